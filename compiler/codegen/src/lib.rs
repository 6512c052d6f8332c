#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation utilities for the secrets provider.
//!
//! This crate turns secret descriptors into syntax nodes and syntax nodes into
//! TypeScript source. It focuses solely on code synthesis: deriving member
//! identifiers, keeping member order, and printing escaped, formatted text.
//!
//! Other responsibilities, such as template discovery, path layout, or the
//! plugin boundary, reside in companion crates.

pub mod generators;
pub mod utils;

use thiserror::Error;

pub use generators::secrets_enum::{build_secrets_name_key_enum, SECRETS_NAME_KEY_ENUM};
pub use generators::typescript::print_enum_module;

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Formatting error when building generated source.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    /// A syntax node carries an identifier the target language cannot express.
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
}

impl From<String> for CodegenError {
    fn from(msg: String) -> Self { CodegenError::Message(msg) }
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Trim trailing whitespace from each line and drop trailing blank lines.
/// Always ensures the returned string ends with a single newline when not empty.
pub(crate) fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<String> = src.lines().map(|l| l.trim_end().to_string()).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}
