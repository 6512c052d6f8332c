//! Pipeline orchestration for the main entry points.
//!
//! This module contains the entry points that coordinate the module generators
//! into a single secrets-provider module map.

use plugins::{Event, PluginRegistry};
use types::{CreateSecretsManagerParams, ModuleMap};

use crate::generation_context::GenerationContext;
use crate::module_generators::secrets_enum::SecretsNameKeyEnumGenerator;
use crate::module_generators::static_templates::StaticTemplatesGenerator;
use crate::module_generators::ModuleGenerator;
use crate::PipelineError;

/// The interceptable "create the server secrets manager" step.
pub struct CreateServerSecretsManager;

impl Event for CreateServerSecretsManager {
    const NAME: &'static str = "CreateServerSecretsManager";
    type Params = CreateSecretsManagerParams;
    type Output = ModuleMap;
}

/// Create the secrets-manager module map, letting registered interceptors
/// observe or modify the step.
///
/// With no interceptor registered for [`CreateServerSecretsManager`] this is
/// equivalent to [`create_secrets_manager_module_internal`].
pub fn create_secrets_manager_module(
    ctx: &GenerationContext,
    registry: &PluginRegistry,
    params: CreateSecretsManagerParams,
) -> Result<ModuleMap, PipelineError> {
    registry.invoke::<CreateServerSecretsManager, _, PipelineError>(params, |params| {
        create_secrets_manager_module_internal(ctx, params)
    })
}

/// Create the secrets-manager module map without consulting any plugin.
///
/// The map holds the `EnumSecretsNameKey` module first, then every static
/// template in discovery order, each rebased onto
/// `<src_directory>/providers/secrets`. Any failure aborts the whole run and
/// no partial map is returned.
pub fn create_secrets_manager_module_internal(
    ctx: &GenerationContext,
    params: &CreateSecretsManagerParams,
) -> Result<ModuleMap, PipelineError> {
    params.validate()?;
    logging::info(
        "pipeline",
        &format!(
            "Generating secrets manager into {} ({} secret(s))",
            ctx.secrets_base_path(),
            params.secrets_name_key.len()
        ),
    );

    let generators: Vec<Box<dyn ModuleGenerator + '_>> = vec![
        Box::new(SecretsNameKeyEnumGenerator::new(&params.secrets_name_key)),
        Box::new(StaticTemplatesGenerator),
    ];

    let mut module_map = ModuleMap::with_policy(ctx.duplicate_policy);
    for generator in &generators {
        logging::debug("pipeline", &format!("running {} generator", generator.module_name()));
        generator.collect_into(ctx, &mut module_map)?;
    }

    logging::info("pipeline", &format!("Generated {} module(s)", module_map.len()));
    Ok(module_map)
}
