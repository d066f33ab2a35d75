//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Ordered, indented lines joined at the end
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
