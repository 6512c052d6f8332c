// SPDX-License-Identifier: CC0-1.0

//! Path utility functions for laying out generated modules.

use std::path::{Component, Path};

/// Suffix carried by template files that must be copied as-is once removed.
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Directory, relative to the server source root, that holds the secrets provider.
pub const SECRETS_PROVIDER_DIR: &str = "providers/secrets";

/// Output base path of the secrets provider for a server source root
///
/// # Examples
///
/// ```
/// use secretgen_path::secrets_base_path;
/// assert_eq!(secrets_base_path("server/src"), "server/src/providers/secrets");
/// assert_eq!(secrets_base_path("server/src/"), "server/src/providers/secrets");
/// assert_eq!(secrets_base_path("/"), "/providers/secrets");
/// ```
pub fn secrets_base_path(src_directory: &str) -> String {
    join_module_path(src_directory, SECRETS_PROVIDER_DIR)
}

/// Join a base path and a relative slash-delimited path with a single `/`
///
/// A base made only of slashes is the root and keeps the result absolute.
///
/// # Examples
///
/// ```
/// use secretgen_path::join_module_path;
/// assert_eq!(join_module_path("a/b/", "/c.ts"), "a/b/c.ts");
/// assert_eq!(join_module_path("", "c.ts"), "c.ts");
/// assert_eq!(join_module_path("/", "c.ts"), "/c.ts");
/// ```
pub fn join_module_path(base: &str, relative: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    match (trimmed.is_empty(), base.starts_with('/')) {
        (true, true) => format!("/{}", relative),
        (true, false) => relative.to_string(),
        (false, _) => format!("{}/{}", trimmed, relative),
    }
}

/// Render a relative filesystem path with `/` separators
///
/// `.` components are dropped. Non-UTF-8 segments are converted lossily.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Remove a trailing [`TEMPLATE_SUFFIX`] from the file name of `path`
///
/// Paths without the suffix are returned unchanged, as are files literally
/// named `.template` since stripping would leave no file name.
///
/// # Examples
///
/// ```
/// use secretgen_path::strip_template_suffix;
/// assert_eq!(strip_template_suffix("base/a.ts.template"), "base/a.ts");
/// assert_eq!(strip_template_suffix("base/a.template.ts"), "base/a.template.ts");
/// assert_eq!(strip_template_suffix("base/.template"), "base/.template");
/// ```
pub fn strip_template_suffix(path: &str) -> &str {
    match path.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => stripped,
        _ => path,
    }
}

/// Rewrite a template path, relative to its template root, onto `base`
///
/// The template suffix is removed and every segment below the root is kept.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use secretgen_path::rebase_template_path;
/// assert_eq!(
///     rebase_template_path(Path::new("b/c.txt.template"), "src/providers/secrets"),
///     "src/providers/secrets/b/c.txt"
/// );
/// ```
pub fn rebase_template_path(relative: &Path, base: &str) -> String {
    let relative = to_slash_path(relative);
    join_module_path(base, strip_template_suffix(&relative))
}
