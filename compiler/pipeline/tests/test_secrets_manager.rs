use std::fs;
use std::path::Path;
use std::sync::Arc;

use config::Config;
use pipeline::template_management::{scan_static_templates, FileEncoding};
use pipeline::{
    create_secrets_manager_module, create_secrets_manager_module_internal,
    CreateServerSecretsManager, GenerationContext, PipelineError, ServerDirectories,
};
use plugins::{HookError, Interceptor, Plugin, PluginRegistry};
use tempfile::TempDir;
use types::{
    CreateSecretsManagerParams, DescriptorError, DuplicatePolicy, GeneratedModule, ModuleMap,
    ModuleMapError, SecretDescriptor,
};

fn write(root: &Path, relative: &str, contents: &[u8]) {
    let file = root.join(relative);
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).expect("create template dir");
    }
    fs::write(file, contents).expect("write template");
}

fn context(root: &Path) -> GenerationContext {
    GenerationContext::builder()
        .server_directories(ServerDirectories::new("server/src"))
        .template_root(root.to_path_buf())
        .build()
        .expect("valid context")
}

fn scenario_params() -> CreateSecretsManagerParams {
    CreateSecretsManagerParams::new(vec![
        SecretDescriptor::new("database url", "DB_URL"),
        SecretDescriptor::new("api key", "API_KEY"),
    ])
}

/// Template root with one suffixed file and one nested plain file.
fn simple_root() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "a.txt.template", b"alpha");
    write(dir.path(), "b/c.txt", b"gamma");
    dir
}

#[test]
fn test_enum_module_comes_first_then_templates_in_order() {
    let dir = simple_root();
    let ctx = context(dir.path());

    let map = create_secrets_manager_module_internal(&ctx, &CreateSecretsManagerParams::default())
        .expect("generation succeeds");

    assert_eq!(
        map.paths(),
        vec![
            "server/src/providers/secrets/secretsNameKey.enum.ts",
            "server/src/providers/secrets/a.txt",
            "server/src/providers/secrets/b/c.txt",
        ]
    );
    assert_eq!(map.get("server/src/providers/secrets/a.txt").map(|m| m.code.as_str()), Some("alpha"));
    assert_eq!(
        map.get("server/src/providers/secrets/b/c.txt").map(|m| m.code.as_str()),
        Some("gamma")
    );
    assert_eq!(
        map.get("server/src/providers/secrets/secretsNameKey.enum.ts").map(|m| m.code.as_str()),
        Some("export enum EnumSecretsNameKey {}\n")
    );
}

#[test]
fn test_scenario_database_url_and_api_key() {
    let dir = simple_root();
    let ctx = context(dir.path());

    let map = create_secrets_manager_module_internal(&ctx, &scenario_params())
        .expect("generation succeeds");

    let enum_module = map
        .get("server/src/providers/secrets/secretsNameKey.enum.ts")
        .expect("enum module present");
    assert_eq!(
        enum_module.code,
        "export enum EnumSecretsNameKey {\n  DatabaseUrl = \"DB_URL\",\n  ApiKey = \"API_KEY\",\n}\n"
    );
    let database = enum_module.code.find("DatabaseUrl").expect("DatabaseUrl member");
    let api = enum_module.code.find("ApiKey").expect("ApiKey member");
    assert!(database < api);
}

#[test]
fn test_every_path_is_under_base_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "x.ts", b"x");
    write(dir.path(), "deep/er/y.ts.template", b"y");
    write(dir.path(), ".env.template", b"KEY=");
    let ctx = context(dir.path());
    let base = ctx.secrets_base_path();

    let map = create_secrets_manager_module_internal(&ctx, &scenario_params()).expect("generation");

    assert_eq!(map.len(), 4);
    for module in &map {
        assert!(module.path.starts_with(&format!("{}/", base)), "{} not under {}", module.path, base);
        assert!(!module.path.ends_with(".template"));
    }
    assert!(map.contains("server/src/providers/secrets/.env"));
    assert!(map.contains("server/src/providers/secrets/deep/er/y.ts"));
}

#[test]
fn test_build_artifacts_are_excluded() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "keep.ts", b"keep");
    write(dir.path(), "index.js", b"compiled");
    write(dir.path(), "index.js.map", b"{}");
    write(dir.path(), "types/index.d.ts", b"declare");

    let templates = scan_static_templates(dir.path()).expect("scan");
    assert_eq!(templates, vec![Path::new("keep.ts").to_path_buf()]);

    let map = create_secrets_manager_module_internal(
        &context(dir.path()),
        &CreateSecretsManagerParams::default(),
    )
    .expect("generation");
    assert_eq!(map.len(), 2);
    assert!(map.contains("server/src/providers/secrets/keep.ts"));
}

#[test]
fn test_missing_template_root_fails_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist");

    let err = create_secrets_manager_module_internal(&context(&missing), &scenario_params())
        .expect_err("missing root");

    match err {
        PipelineError::TemplateRoot { path, .. } => assert_eq!(path, missing),
        other => panic!("expected TemplateRoot, got {:?}", other),
    }
}

#[test]
fn test_template_root_must_be_a_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "file", b"not a dir");

    let err = scan_static_templates(&dir.path().join("file")).expect_err("file root");
    assert!(matches!(err, PipelineError::TemplateRoot { .. }));
}

#[test]
fn test_empty_key_is_rejected_before_any_output() {
    let dir = simple_root();
    let params = CreateSecretsManagerParams::new(vec![
        SecretDescriptor::new("ok", "OK"),
        SecretDescriptor::new("broken", "  "),
    ]);

    let err = create_secrets_manager_module_internal(&context(dir.path()), &params)
        .expect_err("invalid descriptor");

    assert!(matches!(
        err,
        PipelineError::Descriptor(DescriptorError::InvalidDescriptor { index: 1, .. })
    ));
}

#[test]
fn test_generation_is_idempotent() {
    let dir = simple_root();
    let ctx = context(dir.path());

    let first = create_secrets_manager_module_internal(&ctx, &scenario_params()).expect("first");
    let second = create_secrets_manager_module_internal(&ctx, &scenario_params()).expect("second");

    assert_eq!(first, second);
}

#[test]
fn test_template_colliding_with_enum_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "secretsNameKey.enum.ts.template", b"export enum Custom {}\n");

    let reject = context(dir.path());
    let err = create_secrets_manager_module_internal(&reject, &scenario_params())
        .expect_err("duplicate path");
    assert!(matches!(
        err,
        PipelineError::ModuleMap(ModuleMapError::DuplicatePath(ref path))
            if path == "server/src/providers/secrets/secretsNameKey.enum.ts"
    ));

    let overwrite = GenerationContext::builder()
        .server_directories(ServerDirectories::new("server/src"))
        .template_root(dir.path().to_path_buf())
        .duplicate_policy(DuplicatePolicy::Overwrite)
        .build()
        .expect("valid context");
    let map = create_secrets_manager_module_internal(&overwrite, &scenario_params())
        .expect("overwrite succeeds");
    assert_eq!(map.len(), 1);
    assert_eq!(map.modules()[0].code, "export enum Custom {}\n");
}

#[test]
fn test_wrapped_matches_internal_without_interceptors() {
    let dir = simple_root();
    let ctx = context(dir.path());
    let registry = PluginRegistry::new();

    let wrapped =
        create_secrets_manager_module(&ctx, &registry, scenario_params()).expect("wrapped");
    let direct = create_secrets_manager_module_internal(&ctx, &scenario_params()).expect("direct");

    assert_eq!(wrapped, direct);
}

/// Adds a secret before the step and a README after it.
struct ExtraSecret;

impl Plugin for ExtraSecret {
    fn name(&self) -> &'static str { "extra-secret" }
}

impl Interceptor<CreateServerSecretsManager> for ExtraSecret {
    fn before(
        &self,
        mut params: CreateSecretsManagerParams,
    ) -> Result<CreateSecretsManagerParams, HookError> {
        params.secrets_name_key.push(SecretDescriptor::new("jwt secret", "JWT_SECRET"));
        Ok(params)
    }

    fn after(
        &self,
        _params: &CreateSecretsManagerParams,
        mut output: ModuleMap,
    ) -> Result<ModuleMap, HookError> {
        output.set(GeneratedModule::new("server/src/providers/secrets/README.md", "# Secrets\n"))?;
        Ok(output)
    }
}

#[test]
fn test_interceptor_rewrites_params_and_output() {
    let dir = simple_root();
    let ctx = context(dir.path());
    let mut registry = PluginRegistry::new();
    registry.register::<CreateServerSecretsManager>(Arc::new(ExtraSecret));

    let map = create_secrets_manager_module(&ctx, &registry, scenario_params()).expect("wrapped");

    let enum_code = &map.modules()[0].code;
    assert!(enum_code.contains("JwtSecret = \"JWT_SECRET\","));
    assert_eq!(map.paths().last(), Some(&"server/src/providers/secrets/README.md"));
    assert_eq!(map.len(), 4);
}

#[test]
fn test_utf8_bom_is_stripped() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "bom.ts", b"\xEF\xBB\xBFexport {};\n");

    let map = create_secrets_manager_module_internal(
        &context(dir.path()),
        &CreateSecretsManagerParams::default(),
    )
    .expect("generation");

    assert_eq!(
        map.get("server/src/providers/secrets/bom.ts").map(|m| m.code.as_str()),
        Some("export {};\n")
    );
}

#[test]
fn test_utf16_templates_are_decoded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut le = vec![0xFF, 0xFE];
    le.extend("héllo".encode_utf16().flat_map(u16::to_le_bytes));
    let mut be = vec![0xFE, 0xFF];
    be.extend("wörld".encode_utf16().flat_map(u16::to_be_bytes));
    write(dir.path(), "le.txt", &le);
    write(dir.path(), "be.txt", &be);

    let map = create_secrets_manager_module_internal(
        &context(dir.path()),
        &CreateSecretsManagerParams::default(),
    )
    .expect("generation");

    assert_eq!(map.get("server/src/providers/secrets/le.txt").map(|m| m.code.as_str()), Some("héllo"));
    assert_eq!(map.get("server/src/providers/secrets/be.txt").map(|m| m.code.as_str()), Some("wörld"));
}

#[test]
fn test_binary_templates_are_base64() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "logo.png", &[0x89, b'P', b'N', b'G', 0x00, 0xFF]);

    let map = create_secrets_manager_module_internal(
        &context(dir.path()),
        &CreateSecretsManagerParams::default(),
    )
    .expect("generation");

    assert_eq!(
        map.get("server/src/providers/secrets/logo.png").map(|m| m.code.as_str()),
        Some("iVBORwD/")
    );
    assert_eq!(
        pipeline::template_management::detect_file_encoding(&dir.path().join("logo.png"))
            .expect("detect"),
        FileEncoding::Base64
    );
}

#[test]
fn test_invalid_utf8_is_a_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "bad.ts", &[b'o', b'k', 0xC3, 0x28]);

    let err = create_secrets_manager_module_internal(
        &context(dir.path()),
        &CreateSecretsManagerParams::default(),
    )
    .expect_err("invalid utf-8");

    match err {
        PipelineError::TemplateRead { path, source } => {
            assert!(path.ends_with("bad.ts"));
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected TemplateRead, got {:?}", other),
    }
}

#[test]
fn test_shipped_templates() {
    let ctx = GenerationContext::builder()
        .server_directories(ServerDirectories::new("apps/api/src"))
        .build()
        .expect("valid context");

    let map = create_secrets_manager_module_internal(&ctx, &scenario_params())
        .expect("shipped templates generate");

    assert_eq!(
        map.paths(),
        vec![
            "apps/api/src/providers/secrets/secretsNameKey.enum.ts",
            "apps/api/src/providers/secrets/base/secretsManager.service.base.spec.ts",
            "apps/api/src/providers/secrets/base/secretsManager.service.base.ts",
            "apps/api/src/providers/secrets/secretsManager.module.ts",
            "apps/api/src/providers/secrets/secretsManager.service.ts",
        ]
    );
    assert!(map.modules()[2].code.contains("EnumSecretsNameKey"));
}

#[test]
fn test_context_from_config() {
    let dir = simple_root();
    let mut config = Config::default();
    config.server.src_directory = "svc/src".to_string();
    config.templates.root = Some(dir.path().to_path_buf());
    config.generation.duplicate_paths = DuplicatePolicy::Overwrite;

    pipeline::init_logging(&config);
    let ctx = GenerationContext::from_config(&config).expect("context from config");

    assert_eq!(ctx.template_root, dir.path());
    assert_eq!(ctx.duplicate_policy, DuplicatePolicy::Overwrite);
    assert_eq!(ctx.enum_module_path(), "svc/src/providers/secrets/secretsNameKey.enum.ts");

    let map = create_secrets_manager_module_internal(&ctx, &scenario_params()).expect("generation");
    assert_eq!(map.policy(), DuplicatePolicy::Overwrite);
    assert!(map.contains("svc/src/providers/secrets/a.txt"));
}

#[test]
fn test_builder_requires_server_directories() {
    assert!(matches!(GenerationContext::builder().build(), Err(PipelineError::Message(_))));
    assert!(matches!(
        GenerationContext::builder().server_directories(ServerDirectories::new(" ")).build(),
        Err(PipelineError::Message(_))
    ));
}
