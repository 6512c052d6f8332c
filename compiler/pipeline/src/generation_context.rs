//! Generation context for the pipeline.
//!
//! This module provides the read-only inputs of a run. The context is passed
//! explicitly to every step; nothing is looked up through global state.

use std::path::PathBuf;

use config::Config;
use types::DuplicatePolicy;

use crate::template_management::default_template_root;
use crate::PipelineError;

/// File name of the generated enum module.
pub const SECRETS_NAME_KEY_ENUM_FILE: &str = "secretsNameKey.enum.ts";

/// Directories of the server project being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDirectories {
    /// Server source root, slash-delimited (e.g., "server/src")
    pub src_directory: String,
}

impl ServerDirectories {
    /// Create the directory layout from a source root.
    pub fn new(src_directory: impl Into<String>) -> Self {
        Self { src_directory: src_directory.into() }
    }
}

/// Context containing everything a generation run reads
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Layout of the server project
    pub server_directories: ServerDirectories,
    /// Directory holding the static templates
    pub template_root: PathBuf,
    /// Policy applied when two modules target the same path
    pub duplicate_policy: DuplicatePolicy,
}

impl GenerationContext {
    /// Create a new builder for GenerationContext
    pub fn builder() -> GenerationContextBuilder { GenerationContextBuilder::default() }

    /// Build a context from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let mut builder = Self::builder()
            .server_directories(ServerDirectories::new(config.server.src_directory.clone()))
            .duplicate_policy(config.generation.duplicate_paths);
        if let Some(root) = &config.templates.root {
            builder = builder.template_root(root.clone());
        }
        builder.build()
    }

    /// Output base path of the secrets provider (`<src>/providers/secrets`)
    pub fn secrets_base_path(&self) -> String {
        path::secrets_base_path(&self.server_directories.src_directory)
    }

    /// Output path of the generated enum module
    pub fn enum_module_path(&self) -> String {
        path::join_module_path(&self.secrets_base_path(), SECRETS_NAME_KEY_ENUM_FILE)
    }
}

#[derive(Default)]
/// Builder for GenerationContext
pub struct GenerationContextBuilder {
    /// Layout of the server project
    server_directories: Option<ServerDirectories>,
    /// Directory holding the static templates
    template_root: Option<PathBuf>,
    /// Policy applied when two modules target the same path
    duplicate_policy: Option<DuplicatePolicy>,
}

impl GenerationContextBuilder {
    /// Set the server directories
    pub fn server_directories(mut self, directories: ServerDirectories) -> Self {
        self.server_directories = Some(directories);
        self
    }

    /// Set the template root (optional; the shipped templates are used by default)
    pub fn template_root(mut self, root: PathBuf) -> Self {
        self.template_root = Some(root);
        self
    }

    /// Set the duplicate-path policy (optional; defaults to rejecting duplicates)
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = Some(policy);
        self
    }

    /// Build the GenerationContext
    pub fn build(self) -> Result<GenerationContext, PipelineError> {
        let server_directories = self.server_directories.ok_or_else(|| {
            PipelineError::Message("server_directories is required".to_string())
        })?;
        if server_directories.src_directory.trim().is_empty() {
            return Err(PipelineError::Message(
                "server_directories.src_directory must not be empty".to_string(),
            ));
        }

        Ok(GenerationContext {
            server_directories,
            template_root: self.template_root.unwrap_or_else(default_template_root),
            duplicate_policy: self.duplicate_policy.unwrap_or_default(),
        })
    }
}
