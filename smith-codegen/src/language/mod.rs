//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`Emitter`] - Main trait for language emitters
//! - [`TypeMapper`] - Trait for mapping inferred types to language types
//! - [`NamingConvention`] - Language-specific property naming rules

mod naming;
mod traits;

pub use naming::{
    CSHARP_NAMING, DART_NAMING, GO_NAMING, JAVA_NAMING, KOTLIN_NAMING, NamingConvention,
    OBJC_NAMING, RUST_NAMING, SWIFT_NAMING, TYPESCRIPT_NAMING,
};
pub use traits::{Emitter, TypeMapper};
