//! Module generators for the generation pipeline.
//!
//! This module provides standardized generators that implement the ModuleGenerator
//! trait to contribute modules to a run's module map.

use types::{GeneratedModule, ModuleMap};

use crate::generation_context::GenerationContext;
use crate::PipelineError;

/// Trait for generating code modules
pub trait ModuleGenerator {
    /// Get the name of this generator
    fn module_name(&self) -> &str;

    /// Generate the modules, in the order they must appear in the map
    fn generate_modules(&self, ctx: &GenerationContext) -> Result<Vec<GeneratedModule>, PipelineError>;

    /// Generate the modules and set them into `module_map`, one at a time
    fn collect_into(
        &self,
        ctx: &GenerationContext,
        module_map: &mut ModuleMap,
    ) -> Result<(), PipelineError> {
        let modules = self.generate_modules(ctx)?;
        logging::debug(
            self.module_name(),
            &format!("collecting {} module(s)", modules.len()),
        );

        for module in modules {
            logging::trace(self.module_name(), &format!("set {}", module.path));
            module_map.set(module)?;
        }

        Ok(())
    }
}

pub mod secrets_enum;
pub mod static_templates;
