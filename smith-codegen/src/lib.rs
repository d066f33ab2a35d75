//! Code generation for typesmith.
//!
//! Turns a decoded JSON value into type definitions or data literals for
//! one of the supported [`Language`]s.
//!
//! # Module Organization
//!
//! - [`builder`] - Line-based code building blocks (CodeBuilder, Indent)
//! - [`language`] - Emitter traits and per-language naming conventions
//! - [`schema`] - Field table of a JSON object, with nested type discovery
//! - [`languages`] - One emitter per target language
//! - [`dispatch`] - Language identifier to emitter and file extension lookup
//!
//! # Usage
//!
//! ```
//! use serde_json::json;
//!
//! let code = typesmith_codegen::generate(&json!({"id": 1}), "TypeScript", true);
//! assert_eq!(code, "interface Root {\n  id: number;\n}");
//! ```

pub mod builder;
pub mod dispatch;
pub mod language;
pub mod languages;
pub mod schema;

pub use dispatch::{
    DEFAULT_ROOT_NAME, GeneratedSource, emitter, file_extension, generate, generate_source,
    generate_with,
};
pub use language::{Emitter, NamingConvention, TypeMapper};
pub use typesmith_core::{JsonType, Language, NestedNaming};
