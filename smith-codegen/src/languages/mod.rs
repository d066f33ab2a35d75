//! One emitter per target language.
//!
//! Schema emitters (Objective-C, Swift, Java, Kotlin, TypeScript, Go, Rust,
//! C#, Dart) infer a type from each key and render type definitions. Dump
//! emitters (Python, JavaScript, PHP, Ruby) render the value itself as a
//! language literal.

mod csharp;
mod dart;
mod go;
mod java;
mod javascript;
mod kotlin;
mod literal;
mod objc;
mod php;
mod python;
mod ruby;
mod rust;
mod swift;
mod typescript;

pub use csharp::CSharpEmitter;
pub use dart::DartEmitter;
pub use go::GoEmitter;
pub use java::JavaEmitter;
pub use javascript::JavaScriptEmitter;
pub use kotlin::KotlinEmitter;
pub use objc::ObjectiveCEmitter;
pub use php::PhpEmitter;
pub use python::PythonEmitter;
pub use ruby::RubyEmitter;
pub use rust::RustEmitter;
pub use swift::SwiftEmitter;
pub use typescript::TypeScriptEmitter;

use serde_json::{Map, Value};

/// What a schema emitter generates for a top-level value.
#[derive(Debug)]
pub(crate) enum Root<'a> {
    /// Object to generate the root type from
    Object(&'a Map<String, Value>),
    /// Value without a schema, rendered as-is
    Literal(String),
}

/// Resolve the object a schema emitter should describe.
///
/// Arrays are described by their first element when it is an object.
pub(crate) fn resolve_root(value: &Value) -> Root<'_> {
    match value {
        Value::Object(map) => Root::Object(map),
        Value::Array(items) => match items.first() {
            Some(Value::Object(map)) => Root::Object(map),
            _ => Root::Literal(value.to_string()),
        },
        scalar => Root::Literal(scalar_text(scalar)),
    }
}

/// Literal text of a top-level scalar, or `None` for arrays and objects.
pub fn scalar_literal(value: &Value) -> Option<String> {
    match value {
        Value::Array(_) | Value::Object(_) => None,
        scalar => Some(scalar_text(scalar)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Double-quoted string literal with JSON escapes.
pub(crate) fn quoted(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}
