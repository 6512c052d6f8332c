//! TypeScript printer.

use std::fmt::Write as _;

use ir::EnumDeclaration;

use crate::utils::{escape_string_literal, is_valid_identifier};
use crate::{clean_generated_source, CodegenError, Result};

const INDENT: &str = "  ";

/// Print an exported enum declaration as a TypeScript module
///
/// Member values are emitted as escaped double-quoted string literals, one
/// member per line with a trailing comma. An enum without members prints on a
/// single line. Identifiers the language cannot express are rejected.
pub fn print_enum_module(decl: &EnumDeclaration) -> Result<String> {
    if !is_valid_identifier(decl.name()) {
        return Err(CodegenError::InvalidIdentifier(decl.name().to_string()));
    }

    let mut out = String::new();
    if decl.is_empty() {
        writeln!(out, "export enum {} {{}}", decl.name())?;
        return Ok(clean_generated_source(&out));
    }

    writeln!(out, "export enum {} {{", decl.name())?;
    for member in decl.members() {
        if !is_valid_identifier(&member.identifier) {
            return Err(CodegenError::InvalidIdentifier(member.identifier.clone()));
        }
        writeln!(
            out,
            "{}{} = \"{}\",",
            INDENT,
            member.identifier,
            escape_string_literal(&member.value)
        )?;
    }
    writeln!(out, "}}")?;

    Ok(clean_generated_source(&out))
}
