//! Secrets name/key enum synthesis.

use ir::{EnumDeclaration, EnumMember};
use types::SecretDescriptor;

use crate::utils::to_type_identifier;

/// Name of the generated enum type.
pub const SECRETS_NAME_KEY_ENUM: &str = "EnumSecretsNameKey";

/// Build the `EnumSecretsNameKey` declaration from secret descriptors
///
/// One member per descriptor, in input order. Member identifiers are the
/// normalized descriptor names and member values are the keys, stored
/// verbatim. Duplicate names or keys are passed through as duplicate members.
pub fn build_secrets_name_key_enum(secrets: &[SecretDescriptor]) -> EnumDeclaration {
    let members = secrets
        .iter()
        .map(|SecretDescriptor { name, key }| EnumMember::new(to_type_identifier(name), key.clone()))
        .collect();

    EnumDeclaration::new(SECRETS_NAME_KEY_ENUM, members)
}
