//! Attribute serializer
//!
//! Turns attribute values into frozen Ruby literals. Free text (comments and
//! qualified keys such as `dc:description`) uses the `%(...)` form so that
//! embedded newlines and parentheses stay readable; everything else uses the
//! `inspect` quoting rules.

use super::value::{AttributeValue, Value};

/// Attribute key whose values are long-form text
pub const COMMENT_KEY: &str = "comment";

const FREEZE: &str = ".freeze";

/// Whether values under `key` are rendered as long-form text
pub fn is_free_text_key(key: &str) -> bool {
    key == COMMENT_KEY || key.contains(':')
}

/// Serialize one value as it would appear under `key`
pub fn serialize_value(value: &Value, key: &str) -> String {
    match value.as_text() {
        Some(text) if is_free_text_key(key) => {
            format!("%({}){}", escape_free_text(&text), FREEZE)
        }
        _ => format!("{}{}", inspect(value), FREEZE),
    }
}

/// Serialize everything stored under `key`
///
/// Lists of one value render exactly like the bare value. Longer lists are
/// bracketed, with elements ordered by their serialized text.
pub fn serialize_attribute(value: &AttributeValue, key: &str) -> String {
    match value.values() {
        [single] => serialize_value(single, key),
        values => {
            let mut items: Vec<String> = values.iter().map(|v| serialize_value(v, key)).collect();
            items.sort();
            format!("[{}]", items.join(", "))
        }
    }
}

/// Escape text for a `%(...)` literal
///
/// Parentheses and backslashes are escaped, as are `#` characters that
/// would otherwise start an interpolation.
pub fn escape_free_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            _ => out.push(c),
        }
    }
    out
}

/// Ruby `inspect` rendering of a value
pub fn inspect(value: &Value) -> String {
    match value {
        Value::String(s) | Value::Reference(s) => inspect_str(s),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => inspect_float(*f),
        Value::Boolean(b) => b.to_string(),
        Value::Nil => "nil".to_string(),
        Value::List(items) => {
            let items: Vec<String> = items.iter().map(inspect).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Map(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{} => {}", inspect_str(k), inspect(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Double-quoted string literal with Ruby escapes
pub fn inspect_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\x0C' => out.push_str("\\f"),
            '\x0B' => out.push_str("\\v"),
            '\x08' => out.push_str("\\b"),
            '\x07' => out.push_str("\\a"),
            '\x1B' => out.push_str("\\e"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            '\x7F' => out.push_str("\\x7F"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn inspect_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let debug = format!("{:?}", f);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let mantissa = if mantissa.contains('.') {
                mantissa.to_string()
            } else {
                format!("{}.0", mantissa)
            };
            let sign = if exponent.starts_with('-') { "" } else { "+" };
            format!("{}e{}{}", mantissa, sign, exponent)
        }
        None => debug,
    }
}

/// Whether `name` can be written as a bare Ruby identifier
pub fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Ruby symbol literal for `name`, quoted when it is not a bare identifier
pub fn symbol(name: &str) -> String {
    if is_bare_identifier(name) {
        format!(":{}", name)
    } else {
        format!(":{}", inspect_str(name))
    }
}
