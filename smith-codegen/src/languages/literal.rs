//! Pretty-printer for JSON-shaped literals (Python, JavaScript, Ruby).

use serde_json::Value;

use super::quoted;
use crate::builder::Indent;

/// How object keys are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyStyle {
    /// `"key": value`
    Quoted,
    /// `key: value` for word-like keys, `"key": value` otherwise
    Symbol,
}

/// Literal tokens and layout for one language.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LiteralStyle {
    pub indent: Indent,
    pub null: &'static str,
    pub true_token: &'static str,
    pub false_token: &'static str,
    pub keys: KeyStyle,
}

impl LiteralStyle {
    /// Plain JSON tokens with the given indentation.
    pub const fn json(indent: Indent) -> Self {
        Self {
            indent,
            null: "null",
            true_token: "true",
            false_token: "false",
            keys: KeyStyle::Quoted,
        }
    }

    /// Render `value` with one indentation level per nesting depth.
    pub fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write(value, 0, &mut out);
        out
    }

    fn write(&self, value: &Value, depth: usize, out: &mut String) {
        match value {
            Value::Null => out.push_str(self.null),
            Value::Bool(true) => out.push_str(self.true_token),
            Value::Bool(false) => out.push_str(self.false_token),
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::String(s) => out.push_str(&quoted(s)),
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Object(map) if map.is_empty() => out.push_str("{}"),
            Value::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                    }
                    out.push_str(&self.indent.repeat(depth + 1));
                    self.write(item, depth + 1, out);
                }
                out.push('\n');
                out.push_str(&self.indent.repeat(depth));
                out.push(']');
            }
            Value::Object(map) => {
                out.push_str("{\n");
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                    }
                    out.push_str(&self.indent.repeat(depth + 1));
                    out.push_str(&self.key(key));
                    self.write(item, depth + 1, out);
                }
                out.push('\n');
                out.push_str(&self.indent.repeat(depth));
                out.push('}');
            }
        }
    }

    fn key(&self, key: &str) -> String {
        match self.keys {
            KeyStyle::Symbol if is_word(key) => format!("{}: ", key),
            KeyStyle::Symbol | KeyStyle::Quoted => format!("{}: ", quoted(key)),
        }
    }
}

fn is_word(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
