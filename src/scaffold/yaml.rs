//! Safe YAML front-matter and inline JSON value formatting.
//!
//! Every front-matter generator goes through [`yaml_field`] so that values
//! containing YAML-significant characters or newlines still re-parse to the
//! exact original string.

/// Characters that force double-quoting of a single-line scalar.
const NEEDS_QUOTING: &[char] = &[
    ':', '{', '}', '[', ']', ',', '&', '*', '?', '|', '>', '!', '%', '#', '@', '`', '"', '\'',
    '\n', '\r',
];

/// Escape backslash and double-quote for a double-quoted scalar.
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Format a scalar value for use in YAML front matter.
///
/// - Multi-line strings use a block scalar (`|-`) with two-space indent
/// - Strings containing YAML-significant characters are double-quoted
/// - Simple strings are emitted bare
pub fn format_yaml_value(value: &str) -> String {
    if value.contains('\n') {
        let indented: Vec<String> = value.lines().map(|line| format!("  {line}")).collect();
        return format!("|-\n{}", indented.join("\n"));
    }

    if value.contains(NEEDS_QUOTING) {
        return format!("\"{}\"", escape_quoted(value));
    }

    value.to_string()
}

/// Append a `key: value` line with safe escaping.
pub fn yaml_field(lines: &mut Vec<String>, key: &str, value: &str) {
    lines.push(format!("{key}: {}", format_yaml_value(value)));
}

/// Render a flow sequence of double-quoted strings, e.g. `["Read", "Grep"]`.
pub fn format_string_array(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", escape_quoted(v)))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: &str) -> String {
        let field = format!("v: {}", format_yaml_value(value));
        let parsed: serde_yaml::Value = serde_yaml::from_str(&field).unwrap();
        parsed["v"].as_str().unwrap().to_string()
    }

    #[test]
    fn plain_strings_emit_bare() {
        assert_eq!(format_yaml_value("hello world"), "hello world");
        assert_eq!(format_yaml_value("kebab-name.v2"), "kebab-name.v2");
    }

    #[test]
    fn significant_characters_force_quoting() {
        assert_eq!(format_yaml_value("a: b"), "\"a: b\"");
        assert_eq!(format_yaml_value("50%"), "\"50%\"");
        assert_eq!(format_yaml_value("it's"), "\"it's\"");
        assert_eq!(format_yaml_value("use `grep`"), "\"use `grep`\"");
    }

    #[test]
    fn quoting_escapes_backslash_and_quote() {
        assert_eq!(
            format_yaml_value("say \"hi\""),
            "\"say \\\"hi\\\"\""
        );
        assert_eq!(format_yaml_value("a\\b!"), "\"a\\\\b!\"");
    }

    #[test]
    fn multiline_uses_block_scalar() {
        assert_eq!(
            format_yaml_value("line one\nline two"),
            "|-\n  line one\n  line two"
        );
    }

    #[test]
    fn roundtrips_through_yaml_parser() {
        for value in [
            "plain",
            "colon: inside",
            "both \"quotes\" and 'apostrophes'",
            "line one\nline two\nline three",
            "back\\slash & ampersand",
            "#comment-looking",
        ] {
            assert_eq!(roundtrip(value), value, "failed roundtrip for {value:?}");
        }
    }

    #[test]
    fn string_array_quotes_elements() {
        let tools = vec!["Read".to_string(), "Grep".to_string()];
        assert_eq!(format_string_array(&tools), "[\"Read\", \"Grep\"]");
        assert_eq!(format_string_array(&[]), "[]");
    }

    #[test]
    fn string_array_escapes_quotes() {
        let values = vec!["say \"hi\"".to_string()];
        assert_eq!(format_string_array(&values), "[\"say \\\"hi\\\"\"]");
    }

    #[test]
    fn yaml_field_appends_line() {
        let mut lines = Vec::new();
        yaml_field(&mut lines, "name", "my-agent");
        yaml_field(&mut lines, "description", "a: b");
        assert_eq!(lines, vec!["name: my-agent", "description: \"a: b\""]);
    }
}
