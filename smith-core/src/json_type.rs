//! Type inference from JSON values.

use serde_json::{Map, Number, Value};

use crate::naming::type_name;

/// Language-neutral type inferred from a JSON value.
///
/// Every emitter maps this to a concrete type token through its own
/// `TypeMapper`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonType {
    /// `null`, or the element of an empty array
    Any,
    Bool,
    Int,
    Float,
    Str,
    /// Array typed after its first element
    Array(Box<JsonType>),
    /// Reference to a synthesized nested type
    Object(String),
}

/// How synthetic names for nested types are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedNaming {
    /// `<Enclosing><Key>`, for languages with a single flat class namespace.
    Qualified,
    /// `<Key>` alone.
    #[default]
    Bare,
}

impl NestedNaming {
    /// Name of the type generated for an object-valued field.
    pub fn object_name(self, enclosing: &str, key: &str) -> String {
        match self {
            NestedNaming::Qualified => format!("{}{}", enclosing, type_name(key)),
            NestedNaming::Bare => type_name(key),
        }
    }

    /// Name of the type generated for the elements of an array-of-objects field.
    pub fn item_name(self, enclosing: &str, key: &str) -> String {
        format!("{}Item", self.object_name(enclosing, key))
    }
}

impl JsonType {
    /// Classify a scalar. Arrays and objects classify as [`JsonType::Any`]
    /// since they need a field context to be named.
    pub fn of_scalar(value: &Value) -> Self {
        match value {
            Value::Bool(_) => JsonType::Bool,
            Value::Number(n) => Self::of_number(n),
            Value::String(_) => JsonType::Str,
            Value::Null | Value::Array(_) | Value::Object(_) => JsonType::Any,
        }
    }

    /// Integers are numbers with no fractional part inside the `i64` range.
    pub fn of_number(n: &Number) -> Self {
        if n.is_i64() || n.is_u64() {
            return JsonType::Int;
        }
        match n.as_f64() {
            Some(f)
                if f.is_finite()
                    && f.fract() == 0.0
                    && f >= i64::MIN as f64
                    && f < i64::MAX as f64 =>
            {
                JsonType::Int
            }
            _ => JsonType::Float,
        }
    }

    /// Classify the value of `key` inside the type named `enclosing`.
    pub fn of_field(value: &Value, enclosing: &str, key: &str, naming: NestedNaming) -> Self {
        match value {
            Value::Object(_) => JsonType::Object(naming.object_name(enclosing, key)),
            Value::Array(items) => {
                let item = naming.item_name(enclosing, key);
                JsonType::Array(Box::new(Self::of_elements(items, &item)))
            }
            scalar => Self::of_scalar(scalar),
        }
    }

    /// Classify array elements from the first element only.
    pub fn of_elements(items: &[Value], item_name: &str) -> Self {
        match items.first() {
            None => JsonType::Any,
            Some(Value::Object(_)) => JsonType::Object(item_name.to_string()),
            Some(Value::Array(inner)) => {
                JsonType::Array(Box::new(Self::of_elements(inner, item_name)))
            }
            Some(scalar) => Self::of_scalar(scalar),
        }
    }

    /// The object that backs a nested type for this value, following first
    /// elements through arrays.
    pub fn nested_object(value: &Value) -> Option<&Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            Value::Array(items) => items.first().and_then(Self::nested_object),
            _ => None,
        }
    }

    /// Name of the synthesized type this descriptor refers to, looking
    /// through arrays.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            JsonType::Object(name) => Some(name),
            JsonType::Array(element) => element.object_name(),
            _ => None,
        }
    }

    /// Element type when this is an array.
    pub fn element(&self) -> Option<&JsonType> {
        match self {
            JsonType::Array(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonType::Array(_))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(JsonType::of_scalar(&json!(null)), JsonType::Any);
        assert_eq!(JsonType::of_scalar(&json!(true)), JsonType::Bool);
        assert_eq!(JsonType::of_scalar(&json!(42)), JsonType::Int);
        assert_eq!(JsonType::of_scalar(&json!(-7)), JsonType::Int);
        assert_eq!(JsonType::of_scalar(&json!(1.5)), JsonType::Float);
        assert_eq!(JsonType::of_scalar(&json!("Ann")), JsonType::Str);
    }

    #[test]
    fn test_whole_floats_are_integers() {
        assert_eq!(JsonType::of_scalar(&json!(3.0)), JsonType::Int);
        assert_eq!(JsonType::of_scalar(&json!(1e300)), JsonType::Float);
        assert_eq!(JsonType::of_scalar(&json!(u64::MAX)), JsonType::Int);
    }

    #[test]
    fn test_empty_array_is_any() {
        let ty = JsonType::of_field(&json!([]), "Root", "tags", NestedNaming::Bare);
        assert_eq!(ty, JsonType::Array(Box::new(JsonType::Any)));
    }

    #[test]
    fn test_first_element_wins() {
        let ty = JsonType::of_field(&json!([1, "two"]), "Root", "mixed", NestedNaming::Bare);
        assert_eq!(ty, JsonType::Array(Box::new(JsonType::Int)));
    }

    #[test]
    fn test_array_of_objects() {
        let value = json!([{"id": 1}]);
        assert_eq!(
            JsonType::of_field(&value, "Root", "line_items", NestedNaming::Bare),
            JsonType::Array(Box::new(JsonType::Object("LineItemsItem".to_string())))
        );
        assert_eq!(
            JsonType::of_field(&value, "Root", "line_items", NestedNaming::Qualified),
            JsonType::Array(Box::new(JsonType::Object("RootLineItemsItem".to_string())))
        );
    }

    #[test]
    fn test_nested_arrays() {
        let value = json!([[{"x": 1}]]);
        let ty = JsonType::of_field(&value, "Root", "grid", NestedNaming::Bare);
        assert_eq!(
            ty,
            JsonType::Array(Box::new(JsonType::Array(Box::new(JsonType::Object(
                "GridItem".to_string()
            )))))
        );
        assert_eq!(ty.object_name(), Some("GridItem"));
        assert_eq!(JsonType::nested_object(&value), json!({"x": 1}).as_object());
    }

    #[test]
    fn test_object_fields() {
        assert_eq!(
            JsonType::of_field(&json!({}), "Root", "meta", NestedNaming::Bare),
            JsonType::Object("Meta".to_string())
        );
        assert_eq!(
            JsonType::of_field(&json!({"a": 1}), "Root", "user_info", NestedNaming::Qualified),
            JsonType::Object("RootUserInfo".to_string())
        );
    }

    #[test]
    fn test_nested_object_skips_scalars() {
        assert!(JsonType::nested_object(&json!([1, 2])).is_none());
        assert!(JsonType::nested_object(&json!([])).is_none());
        assert!(JsonType::nested_object(&json!("x")).is_none());
    }
}
