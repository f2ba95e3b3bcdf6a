//! Identifier case transforms for generated source code.
//!
//! The correctness property is cross-file consistency: a tool named
//! `get-weather` must yield the same PascalCase stem everywhere it is
//! referenced (schema name, handler name, import path) inside the generated
//! MCP project.

/// Collapse runs of non-alphanumeric characters to a single underscore,
/// trim leading and trailing underscores, lowercase. Idempotent.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    out
}

/// Split on `-`/`_` runs and capitalize each segment's first character.
pub fn to_pascal_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

/// PascalCase with the first character lowercased.
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => pascal,
    }
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
