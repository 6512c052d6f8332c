//! Generated modules.

use serde::{Deserialize, Serialize};

/// One unit of generated output: a target file path and the text to write there.
///
/// Two modules are the same unit of output when their `path` strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedModule {
    /// Slash-delimited output path
    pub path: String,
    /// File content
    pub code: String,
}

impl GeneratedModule {
    /// Create a module from a path and its content.
    pub fn new(path: impl Into<String>, code: impl Into<String>) -> Self {
        Self { path: path.into(), code: code.into() }
    }
}
