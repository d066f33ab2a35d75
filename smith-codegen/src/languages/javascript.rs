//! JavaScript literal emitter.

use serde_json::Value;
use typesmith_core::Language;

use super::{literal::LiteralStyle, scalar_literal};
use crate::{builder::Indent, language::Emitter};

/// Wraps the JSON text in a single `const data = ...;` statement.
///
/// This is also the fallback for unknown language identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptEmitter;

impl Emitter for JavaScriptEmitter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn emit(&self, value: &Value, _root_name: &str, _use_camel_case: bool) -> String {
        if let Some(text) = scalar_literal(value) {
            return text;
        }
        let literal = LiteralStyle::json(Indent::TWO).render(value);
        format!("const data = {};", literal)
    }
}
