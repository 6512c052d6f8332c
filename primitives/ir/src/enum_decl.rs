//! Enumeration declarations.

use serde::{Deserialize, Serialize};

/// A named enumeration type whose members carry string values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    /// Type identifier (e.g., "EnumSecretsNameKey")
    name: String,
    /// Members in declaration order
    members: Vec<EnumMember>,
}

/// One member of an [`EnumDeclaration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Member identifier, already normalized
    pub identifier: String,
    /// Raw, unescaped string value
    pub value: String,
}

impl EnumMember {
    /// Create a new member.
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), value: value.into() }
    }
}

impl EnumDeclaration {
    /// Create a declaration from its name and members.
    pub fn new(name: impl Into<String>, members: Vec<EnumMember>) -> Self {
        Self { name: name.into(), members }
    }

    /// Get the type identifier
    pub fn name(&self) -> &str { &self.name }

    /// Get the members in declaration order
    pub fn members(&self) -> &[EnumMember] { &self.members }

    /// Get the number of members
    pub fn member_count(&self) -> usize { self.members.len() }

    /// Whether the declaration has no members
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Find the first member with the given identifier
    pub fn get_member(&self, identifier: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.identifier == identifier)
    }
}
