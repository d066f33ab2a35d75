//! Python literal emitter.

use serde_json::Value;
use typesmith_core::Language;

use super::{
    literal::{KeyStyle, LiteralStyle},
    scalar_literal,
};
use crate::{builder::Indent, language::Emitter};

const PYTHON_LITERAL: LiteralStyle = LiteralStyle {
    indent: Indent::FOUR,
    null: "None",
    true_token: "True",
    false_token: "False",
    keys: KeyStyle::Quoted,
};

/// Renders the value as a Python dict/list literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonEmitter;

impl Emitter for PythonEmitter {
    fn language(&self) -> Language {
        Language::Python
    }

    fn emit(&self, value: &Value, _root_name: &str, _use_camel_case: bool) -> String {
        scalar_literal(value).unwrap_or_else(|| PYTHON_LITERAL.render(value))
    }
}
