//! PHP array literal emitter.

use serde_json::Value;
use typesmith_core::Language;

use super::scalar_literal;
use crate::{builder::Indent, language::Emitter};

/// Renders the value as a short-syntax PHP array assigned to `$data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpEmitter;

/// Single-quoted PHP string.
fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn convert(value: &Value, depth: usize) -> String {
    let pad = Indent::FOUR.repeat(depth);
    let item_pad = Indent::FOUR.repeat(depth + 1);
    let items: Vec<String> = match value {
        Value::Null => return "null".to_string(),
        Value::Bool(b) => return b.to_string(),
        Value::Number(n) => return n.to_string(),
        Value::String(s) => return single_quoted(s),
        Value::Array(items) => items
            .iter()
            .map(|item| format!("{}{}", item_pad, convert(item, depth + 1)))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| {
                format!(
                    "{}{} => {}",
                    item_pad,
                    single_quoted(key),
                    convert(item, depth + 1)
                )
            })
            .collect(),
    };

    if items.is_empty() {
        return "[]".to_string();
    }
    format!("[\n{}\n{}]", items.join(",\n"), pad)
}

impl Emitter for PhpEmitter {
    fn language(&self) -> Language {
        Language::Php
    }

    fn emit(&self, value: &Value, _root_name: &str, _use_camel_case: bool) -> String {
        if let Some(text) = scalar_literal(value) {
            return text;
        }
        format!("$data = {};", convert(value, 0))
    }
}
