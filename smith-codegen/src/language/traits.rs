//! Language-agnostic code generation traits.

use serde_json::Value;
use typesmith_core::{JsonType, Language};

/// Trait for language-specific emitters.
///
/// Implement this trait to add support for generating code in a new language.
/// Emitters never fail: values outside their schema (top-level scalars)
/// degenerate to their literal text.
pub trait Emitter: Sync {
    /// Target language of this emitter
    fn language(&self) -> Language;

    /// Emit source text for `value`, naming the top-level type `root_name`.
    ///
    /// `use_camel_case` toggles conversion of `snake_case`/`kebab-case` keys
    /// into camelCase property names, for languages where that applies.
    fn emit(&self, value: &Value, root_name: &str, use_camel_case: bool) -> String;

    /// File extension for generated source files, with the dot
    fn file_extension(&self) -> &'static str {
        self.language().extension()
    }
}

/// Trait for mapping inferred types to language-specific type strings.
///
/// Implement the primitive mappings; [`TypeMapper::map_type`] composes them
/// for arrays and nested type references.
pub trait TypeMapper {
    /// Type for `null` values and elements of empty arrays
    fn any(&self) -> &'static str;

    fn bool(&self) -> &'static str;

    fn int(&self) -> &'static str;

    fn float(&self) -> &'static str;

    fn string(&self) -> &'static str;

    /// Wrap an already mapped element type into the language's list type
    fn array(&self, element: &str) -> String;

    /// Reference a generated nested type
    fn object(&self, name: &str) -> String {
        name.to_string()
    }

    /// Map a type appearing as a list element (e.g., boxed types in Java)
    fn map_element(&self, ty: &JsonType) -> String {
        self.map_type(ty)
    }

    /// Map an inferred type to a language-specific type string
    fn map_type(&self, ty: &JsonType) -> String {
        match ty {
            JsonType::Any => self.any().to_string(),
            JsonType::Bool => self.bool().to_string(),
            JsonType::Int => self.int().to_string(),
            JsonType::Float => self.float().to_string(),
            JsonType::Str => self.string().to_string(),
            JsonType::Array(element) => self.array(&self.map_element(element)),
            JsonType::Object(name) => self.object(name),
        }
    }
}
