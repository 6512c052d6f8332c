//! Secrets name/key enum module generator
//!
//! Generates `secretsNameKey.enum.ts` from the caller's secret descriptors.

use codegen::{build_secrets_name_key_enum, print_enum_module};
use types::{GeneratedModule, SecretDescriptor};

use super::ModuleGenerator;
use crate::generation_context::GenerationContext;
use crate::PipelineError;

/// Generator for the `EnumSecretsNameKey` module
pub struct SecretsNameKeyEnumGenerator<'a> {
    secrets: &'a [SecretDescriptor],
}

impl<'a> SecretsNameKeyEnumGenerator<'a> {
    /// Create a generator over the given descriptors
    pub fn new(secrets: &'a [SecretDescriptor]) -> Self { Self { secrets } }
}

impl ModuleGenerator for SecretsNameKeyEnumGenerator<'_> {
    fn module_name(&self) -> &str { "secrets_enum" }

    fn generate_modules(&self, ctx: &GenerationContext) -> Result<Vec<GeneratedModule>, PipelineError> {
        let declaration = build_secrets_name_key_enum(self.secrets);
        logging::trace(
            self.module_name(),
            &format!("built {} with {} member(s)", declaration.name(), declaration.member_count()),
        );

        let code = print_enum_module(&declaration)?;
        Ok(vec![GeneratedModule::new(ctx.enum_module_path(), code)])
    }
}
