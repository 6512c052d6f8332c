//! Secret descriptors.
//!
//! A descriptor pairs the human-readable name of a secret with the opaque key
//! under which the secret store holds it. Descriptors are supplied by the
//! caller and never mutated by the generator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when caller-supplied descriptors cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// The descriptor at `index` is malformed.
    #[error("invalid descriptor at index {index}: {reason}")]
    InvalidDescriptor {
        /// Position of the descriptor in the input list
        index: usize,
        /// What is wrong with it
        reason: String,
    },
}

/// Logical name and store key of one externally managed secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretDescriptor {
    /// Human-readable name, e.g. `"database url"`
    pub name: String,
    /// Opaque secret-store identifier, e.g. `"DB_URL"`
    pub key: String,
}

impl SecretDescriptor {
    /// Create a new descriptor.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self { name: name.into(), key: key.into() }
    }

    /// Check that this descriptor can be turned into an enum member.
    ///
    /// Names are always accepted since the identifier normalizer has a
    /// fallback for them. Keys must carry at least one non-whitespace
    /// character. Uniqueness of keys is the caller's responsibility.
    pub fn validate(&self, index: usize) -> Result<(), DescriptorError> {
        if self.key.trim().is_empty() {
            return Err(DescriptorError::InvalidDescriptor {
                index,
                reason: format!("secret '{}' has an empty key", self.name),
            });
        }
        Ok(())
    }
}

/// Parameters of the `CreateServerSecretsManager` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSecretsManagerParams {
    /// Secrets to expose through the generated enum, in output order
    #[serde(default)]
    pub secrets_name_key: Vec<SecretDescriptor>,
}

impl CreateSecretsManagerParams {
    /// Create parameters from a list of descriptors.
    pub fn new(secrets_name_key: Vec<SecretDescriptor>) -> Self { Self { secrets_name_key } }

    /// Parse parameters from their JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(json) }

    /// Validate every descriptor, reporting the first malformed one.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        self.secrets_name_key
            .iter()
            .enumerate()
            .try_for_each(|(index, descriptor)| descriptor.validate(index))
    }
}
