//! Ruby literal emitter.

use serde_json::Value;
use typesmith_core::Language;

use super::{
    literal::{KeyStyle, LiteralStyle},
    scalar_literal,
};
use crate::{builder::Indent, language::Emitter};

const RUBY_LITERAL: LiteralStyle = LiteralStyle {
    indent: Indent::TWO,
    null: "nil",
    true_token: "true",
    false_token: "false",
    keys: KeyStyle::Symbol,
};

/// Renders the value as a Ruby hash/array literal with symbol keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyEmitter;

impl Emitter for RubyEmitter {
    fn language(&self) -> Language {
        Language::Ruby
    }

    fn emit(&self, value: &Value, _root_name: &str, _use_camel_case: bool) -> String {
        scalar_literal(value).unwrap_or_else(|| RUBY_LITERAL.render(value))
    }
}
