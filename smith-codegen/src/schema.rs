//! Field table of a JSON object.
//!
//! An [`ObjectSchema`] is the language-neutral view every schema emitter
//! walks: one [`Field`] per key in insertion order, plus the nested objects
//! that need their own type definitions.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use typesmith_core::{JsonType, NestedNaming};

/// A single key of a JSON object with its inferred type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    /// Original JSON key
    pub key: &'a str,
    /// Value the type was inferred from
    pub value: &'a Value,
    /// Inferred type
    pub ty: JsonType,
}

impl<'a> Field<'a> {
    /// The nested type definition this field requires, if any.
    pub fn nested(&self) -> Option<NestedObject<'a>> {
        let name = self.ty.object_name()?;
        let object = JsonType::nested_object(self.value)?;
        Some(NestedObject {
            name: name.to_string(),
            object,
        })
    }
}

/// A nested object that gets its own synthesized type.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedObject<'a> {
    /// Synthetic type name
    pub name: String,
    /// Object the type is generated from
    pub object: &'a Map<String, Value>,
}

/// Ordered field table for one generated type.
#[derive(Debug, Clone)]
pub struct ObjectSchema<'a> {
    name: String,
    fields: IndexMap<&'a str, Field<'a>>,
}

impl<'a> ObjectSchema<'a> {
    /// Infer the fields of `object` for a type called `name`.
    pub fn new(
        name: impl Into<String>,
        object: &'a Map<String, Value>,
        naming: NestedNaming,
    ) -> Self {
        let name = name.into();
        let fields = object
            .iter()
            .map(|(key, value)| {
                let ty = JsonType::of_field(value, &name, key, naming);
                (
                    key.as_str(),
                    Field {
                        key: key.as_str(),
                        value,
                        ty,
                    },
                )
            })
            .collect();
        Self { name, fields }
    }

    /// Type name of this schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in JSON key order.
    pub fn fields(&self) -> impl Iterator<Item = &Field<'a>> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Nested objects needing their own type, in field order.
    pub fn nested(&self) -> impl Iterator<Item = NestedObject<'a>> + '_ {
        self.fields.values().filter_map(Field::nested)
    }
}
