//! Core utilities and types for typesmith.
//!
//! This crate provides the language-neutral pieces shared by every
//! emitter: identifier conversion, the closed set of target languages,
//! and the type descriptor inferred from a JSON value.

mod json_type;
mod language;
mod naming;

// Type inference
pub use json_type::{JsonType, NestedNaming};
// Target languages
pub use language::{Language, UnknownLanguage};
// String utilities
pub use naming::{
    capitalize, is_identifier, lower_first, property_name, to_camel_from_separators,
    to_snake_case, type_name,
};
