//! Template management for the pipeline.
//!
//! This module discovers the static template files shipped with the
//! generator, maps each one onto its output path, and reads it with the
//! encoding its content calls for.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use base64::Engine as _;
use walkdir::WalkDir;

use crate::PipelineError;

/// Build artifacts of the generator's own packaging, never treated as templates.
pub const EXCLUDED_EXTENSIONS: &[&str] = &[".js", ".js.map", ".d.ts"];

/// Extensions read as binary and carried as base64 text.
const BINARY_EXTENSIONS: &[&str] =
    &["png", "ico", "jpg", "jpeg", "gif", "webp", "woff", "woff2", "ttf", "eot", "pdf", "zip"];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Directory of the secrets-manager templates shipped with this crate
pub fn default_template_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static").join("secrets-manager")
}

/// Encoding a template file is read with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEncoding {
    /// UTF-8 without byte-order mark
    Utf8,
    /// UTF-8 with a byte-order mark, which is dropped on read
    Utf8Bom,
    /// UTF-16, little endian, with byte-order mark
    Utf16Le,
    /// UTF-16, big endian, with byte-order mark
    Utf16Be,
    /// Binary content, carried as standard base64
    Base64,
}

/// A discovered template and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    /// Template file on disk
    pub source: PathBuf,
    /// Output module path
    pub output_path: String,
    /// Encoding detected on the source file
    pub encoding: FileEncoding,
}

/// List template files under `root`, relative to it
///
/// The walk is recursive, includes dotfiles and follows symlinks. Siblings are
/// visited in file-name order so the result is stable across runs. Files
/// ending in one of [`EXCLUDED_EXTENSIONS`] are skipped.
///
/// # Errors
///
/// Returns [`PipelineError::TemplateRoot`] if the root is missing, is not a
/// directory, or any part of it cannot be read.
pub fn scan_static_templates(root: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let metadata = fs::metadata(root)
        .map_err(|source| PipelineError::TemplateRoot { path: root.to_path_buf(), source })?;
    if !metadata.is_dir() {
        return Err(PipelineError::TemplateRoot {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| PipelineError::TemplateRoot {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| PipelineError::Message(e.to_string()))?
            .to_path_buf();
        if is_excluded(&relative) {
            logging::trace("templates", &format!("skipping build artifact {}", relative.display()));
            continue;
        }
        templates.push(relative);
    }

    Ok(templates)
}

fn is_excluded(relative: &Path) -> bool {
    let name = relative.to_string_lossy();
    EXCLUDED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Resolve a template, relative to `root`, onto the output `base_path`
///
/// The encoding is detected on the original file before anything else reads it.
pub fn resolve_template(
    root: &Path,
    relative: &Path,
    base_path: &str,
) -> Result<ResolvedTemplate, PipelineError> {
    let source = root.join(relative);
    let encoding = detect_file_encoding(&source)
        .map_err(|e| PipelineError::TemplateRead { path: source.clone(), source: e })?;

    Ok(ResolvedTemplate {
        output_path: path::rebase_template_path(relative, base_path),
        source,
        encoding,
    })
}

/// Determine the encoding of a file from its extension and byte-order mark
pub fn detect_file_encoding(file: &Path) -> io::Result<FileEncoding> {
    let is_binary = file
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    if is_binary {
        return Ok(FileEncoding::Base64);
    }

    let mut head = Vec::with_capacity(UTF8_BOM.len());
    File::open(file)?.take(UTF8_BOM.len() as u64).read_to_end(&mut head)?;

    Ok(if head.starts_with(UTF8_BOM) {
        FileEncoding::Utf8Bom
    } else if head.starts_with(UTF16_LE_BOM) {
        FileEncoding::Utf16Le
    } else if head.starts_with(UTF16_BE_BOM) {
        FileEncoding::Utf16Be
    } else {
        FileEncoding::Utf8
    })
}

/// Read a file as text using `encoding`
///
/// Content that does not satisfy the encoding is an `InvalidData` error,
/// never a lossy conversion.
pub fn read_with_encoding(file: &Path, encoding: FileEncoding) -> io::Result<String> {
    let bytes = fs::read(file)?;

    match encoding {
        FileEncoding::Utf8 => String::from_utf8(bytes).map_err(invalid_data),
        FileEncoding::Utf8Bom => {
            String::from_utf8(strip_bom(&bytes, UTF8_BOM).to_vec()).map_err(invalid_data)
        }
        FileEncoding::Utf16Le => decode_utf16(strip_bom(&bytes, UTF16_LE_BOM), u16::from_le_bytes),
        FileEncoding::Utf16Be => decode_utf16(strip_bom(&bytes, UTF16_BE_BOM), u16::from_be_bytes),
        FileEncoding::Base64 => Ok(base64::engine::general_purpose::STANDARD.encode(&bytes)),
    }
}

fn strip_bom<'a>(bytes: &'a [u8], bom: &[u8]) -> &'a [u8] {
    bytes.strip_prefix(bom).unwrap_or(bytes)
}

fn decode_utf16(body: &[u8], to_unit: fn([u8; 2]) -> u16) -> io::Result<String> {
    if body.len() % 2 != 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "odd number of bytes in UTF-16 text"));
    }
    let units: Vec<u16> = body.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]])).collect();
    String::from_utf16(&units).map_err(invalid_data)
}

fn invalid_data<E>(error: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, error)
}

/// Read a resolved template into its output content
pub fn read_template(template: &ResolvedTemplate) -> Result<String, PipelineError> {
    read_with_encoding(&template.source, template.encoding).map_err(|source| {
        PipelineError::TemplateRead { path: template.source.clone(), source }
    })
}
