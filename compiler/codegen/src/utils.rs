// codegen/src/utils.rs

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Identifier used when a name has no alphanumeric characters at all.
pub const EMPTY_IDENTIFIER_FALLBACK: &str = "_";

/// Converts a human-readable name to an UpperCamelCase type-member identifier
///
/// Runs of non-alphanumeric characters and case transitions are word
/// boundaries. Each word is capitalized and the words are concatenated, except
/// that a word starting with `0-9` after the first is joined with `_` so that
/// digit groups stay apart. Names that leave nothing behind become
/// [`EMPTY_IDENTIFIER_FALLBACK`], and results starting with a digit are
/// prefixed with `_` so the identifier stays legal.
///
/// # Examples
/// ```
/// use codegen::utils::to_type_identifier;
/// assert_eq!(to_type_identifier("database url"), "DatabaseUrl");
/// assert_eq!(to_type_identifier("api-key"), "ApiKey");
/// assert_eq!(to_type_identifier("version 1.2"), "Version_1_2");
/// assert_eq!(to_type_identifier("1password token"), "_1passwordToken");
/// assert_eq!(to_type_identifier(""), "_");
/// ```
pub fn to_type_identifier(name: &str) -> String {
    let mut identifier = String::new();
    for (position, word) in split_words(name).iter().enumerate() {
        if position > 0 && word.starts_with(|c: char| c.is_ascii_digit()) {
            identifier.push('_');
        }
        identifier.push_str(&word.to_upper_camel_case());
    }

    match identifier.chars().next() {
        None => EMPTY_IDENTIFIER_FALLBACK.to_string(),
        Some(first) if first.is_numeric() => format!("_{}", identifier),
        Some(_) => identifier,
    }
}

/// Lowercased words of `name`, split on non-alphanumerics and case transitions
fn split_words(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|chunk| !chunk.is_empty())
        .flat_map(|chunk| {
            chunk
                .to_snake_case()
                .split('_')
                .filter(|word| !word.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Whether `ident` is a legal TypeScript identifier (ASCII letters, digits, `_`, `$`
/// plus any Unicode alphanumerics, not starting with a digit)
pub fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let is_part = |c: char| c == '_' || c == '$' || c.is_alphanumeric();
    !first.is_numeric() && is_part(first) && chars.all(is_part)
}

/// Escape a string for use inside a double-quoted TypeScript string literal
///
/// # Examples
/// ```
/// use codegen::utils::escape_string_literal;
/// assert_eq!(escape_string_literal(r#"a"b\c"#), r#"a\"b\\c"#);
/// assert_eq!(escape_string_literal("line\nbreak"), "line\\nbreak");
/// ```
pub fn escape_string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            '\u{2028}' | '\u{2029}' => escaped.push_str(&format!("\\u{:04X}", ch as u32)),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }

    escaped
}
