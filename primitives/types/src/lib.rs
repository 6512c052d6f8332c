#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core data model for the secrets-provider generator.
//!
//! This crate defines the values that flow through a generation run: the
//! secret descriptors supplied by the caller, the generated modules produced
//! by each step, and the ordered [`ModuleMap`] that is handed to the module
//! writer once a run completes.

/// Secret descriptors and the parameters of the secrets-manager event.
pub mod descriptor;
/// A single unit of generated output.
pub mod module;
/// Ordered, path-deduplicated collection of generated modules.
pub mod module_map;

pub use descriptor::{CreateSecretsManagerParams, DescriptorError, SecretDescriptor};
pub use module::GeneratedModule;
pub use module_map::{DuplicatePolicy, ModuleMap, ModuleMapError};
