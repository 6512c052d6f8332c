#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that assembles the secrets-provider modules of a
//! server project.
//!
//! A run combines two kinds of content into one ordered [`types::ModuleMap`]:
//! the `EnumSecretsNameKey` enum synthesized from the caller's secret
//! descriptors, and the static template files shipped with the generator,
//! rewritten onto the project's `providers/secrets` directory.
//!
//! ## Module Organization
//!
//! - `generation_context` - Explicit, read-only inputs of a run
//! - `template_management` - Template discovery, path resolution and encoding-aware reads
//! - `module_generators` - Generators contributing modules to the map
//! - `orchestration` - Entry points, plain and through the plugin registry

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the generation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The template root is missing or cannot be scanned; the generator installation is broken.
    #[error("template directory {path:?} is unusable: {source}")]
    TemplateRoot {
        /// Template root or the entry below it that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// A single template file could not be read.
    #[error("failed to read template {path:?}: {source}")]
    TemplateRead {
        /// Template file on disk
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
    /// Error from the module map.
    #[error(transparent)]
    ModuleMap(#[from] types::ModuleMapError),
    /// Caller supplied a malformed descriptor.
    #[error(transparent)]
    Descriptor(#[from] types::DescriptorError),
    /// Error from an interceptor or the plugin registry.
    #[error(transparent)]
    Plugin(#[from] plugins::PluginError),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// Error loading configuration.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

// Module declarations
pub mod generation_context;
pub mod module_generators;
pub mod orchestration;
pub mod template_management;

// Re-export public API
pub use generation_context::{GenerationContext, ServerDirectories};
pub use orchestration::{
    create_secrets_manager_module, create_secrets_manager_module_internal,
    CreateServerSecretsManager,
};

/// Install the global log subscriber at the level named in `config`.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(config: &config::Config) -> bool { logging::init(&config.logging.level) }
