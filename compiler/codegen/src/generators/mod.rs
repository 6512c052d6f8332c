//! This module contains the code generators for the secrets provider.
//!
//! Generators build syntax nodes from caller input; printers turn those nodes
//! into source text.

/// Sub-module generates: **`EnumSecretsNameKey`**
///
/// Maps each secret descriptor to one enum member, preserving input order.
pub mod secrets_enum;
pub use secrets_enum::build_secrets_name_key_enum;

/// TypeScript printer for syntax nodes
pub mod typescript;
pub use typescript::print_enum_module;
