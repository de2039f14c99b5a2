//! CLI output formatting utilities.
//!
//! Highlighted JSON for `--json` output and `config show`, and number
//! formatting for layout tables.

use colored::Colorize;
use serde_json::Value;

/// Indentation of one nesting level, matching `serde_json::to_string_pretty`.
const INDENT: &str = "  ";

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
pub fn print_highlighted_json(value: &Value) { println!("{}", highlight_json(value)); }

/// Renders a JSON value as pretty-printed, colored text.
///
/// Scalars are colored by their JSON type. With colors disabled the output is
/// identical to `serde_json::to_string_pretty`.
#[must_use]
pub fn highlight_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, 0, &mut out);
    out
}

fn write_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Null | Value::Bool(_) => out.push_str(&value.to_string().magenta().to_string()),
        Value::Number(_) => out.push_str(&value.to_string().yellow().to_string()),
        Value::String(_) => out.push_str(&value.to_string().green().to_string()),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(depth + 1, out);
                write_value(item, depth + 1, out);
                push_separator(i + 1 < items.len(), out);
            }
            push_indent(depth, out);
            out.push(']');
        }
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                push_indent(depth + 1, out);
                out.push_str(&Value::from(key.as_str()).to_string().cyan().to_string());
                out.push_str(": ");
                write_value(item, depth + 1, out);
                push_separator(i + 1 < map.len(), out);
            }
            push_indent(depth, out);
            out.push('}');
        }
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_separator(more: bool, out: &mut String) {
    if more {
        out.push(',');
    }
    out.push('\n');
}

/// Formats a layout coordinate with at most two decimals.
///
/// Whole values print without a fractional part (`388`, not `388.00`).
#[must_use]
pub fn format_units(value: f64) -> String {
    let formatted = format!("{value:.2}");
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}
