//! Static template module generator
//!
//! Copies the template files under the context's template root onto the
//! secrets provider directory.

use types::GeneratedModule;

use super::ModuleGenerator;
use crate::generation_context::GenerationContext;
use crate::template_management::{read_template, resolve_template, scan_static_templates};
use crate::PipelineError;

/// Generator for the static secrets-manager templates
pub struct StaticTemplatesGenerator;

impl ModuleGenerator for StaticTemplatesGenerator {
    fn module_name(&self) -> &str { "static_templates" }

    fn generate_modules(&self, ctx: &GenerationContext) -> Result<Vec<GeneratedModule>, PipelineError> {
        let base_path = ctx.secrets_base_path();
        let templates = scan_static_templates(&ctx.template_root)?;
        logging::debug(
            self.module_name(),
            &format!("discovered {} template(s) under {}", templates.len(), ctx.template_root.display()),
        );

        // Read in discovery order; the map keeps insertion order.
        templates
            .iter()
            .map(|relative| {
                let template = resolve_template(&ctx.template_root, relative, &base_path)?;
                let code = read_template(&template)?;
                Ok(GeneratedModule::new(template.output_path, code))
            })
            .collect()
    }
}
