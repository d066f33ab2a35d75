//! Dart class emitter with `fromJson`/`toJson`.

use serde_json::Value;
use typesmith_core::{JsonType, Language, NestedNaming, type_name};

use super::{Root, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{DART_NAMING, Emitter, TypeMapper},
    schema::{Field, ObjectSchema},
};

/// Emits classes with nullable fields, a `fromJson` named constructor and a
/// `toJson` method reading and writing the original keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct DartEmitter;

impl TypeMapper for DartEmitter {
    fn any(&self) -> &'static str {
        "dynamic"
    }

    fn bool(&self) -> &'static str {
        "bool"
    }

    fn int(&self) -> &'static str {
        "int"
    }

    fn float(&self) -> &'static str {
        "double"
    }

    fn string(&self) -> &'static str {
        "String"
    }

    fn array(&self, element: &str) -> String {
        format!("List<{}>", element)
    }
}

/// Single-quoted Dart string; `$` would otherwise start an interpolation.
fn single_quoted(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('$', "\\$");
    format!("'{}'", escaped)
}

impl DartEmitter {
    fn declaration(&self, field: &Field<'_>, name: &str) -> String {
        match field.ty {
            JsonType::Any => format!("dynamic {};", name),
            ref ty => format!("{}? {};", self.map_type(ty), name),
        }
    }

    fn read(&self, field: &Field<'_>) -> String {
        let json = format!("json[{}]", single_quoted(field.key));
        match &field.ty {
            JsonType::Float => format!("({} as num?)?.toDouble()", json),
            JsonType::Object(name) => {
                format!("{} != null ? {}.fromJson({}) : null", json, name, json)
            }
            JsonType::Array(element) => match element.as_ref() {
                JsonType::Object(name) => {
                    format!("({} as List?)?.map((e) => {}.fromJson(e)).toList()", json, name)
                }
                JsonType::Bool | JsonType::Int | JsonType::Float | JsonType::Str => {
                    format!("{}?.cast<{}>()", json, self.map_element(element))
                }
                JsonType::Any | JsonType::Array(_) => json,
            },
            JsonType::Any | JsonType::Bool | JsonType::Int | JsonType::Str => json,
        }
    }

    fn write(&self, field: &Field<'_>, name: &str) -> String {
        match field.ty.element().unwrap_or(&field.ty) {
            JsonType::Object(_) if field.ty.is_array() => {
                format!("{}?.map((e) => e.toJson()).toList()", name)
            }
            JsonType::Object(_) => format!("{}?.toJson()", name),
            _ => name.to_string(),
        }
    }

    fn render(&self, schema: &ObjectSchema<'_>, use_camel_case: bool, code: &mut CodeBuilder) {
        let fields: Vec<_> = schema
            .fields()
            .map(|field| (field, DART_NAMING.field_name(field.key, use_camel_case)))
            .collect();

        let header = format!("class {} {{", schema.name());
        code.push_block(&header, "}", |b| {
            for (field, name) in &fields {
                b.push_line(&self.declaration(field, name));
            }
            if !fields.is_empty() {
                b.push_blank();
            }

            let constructor = format!("{}.fromJson(Map<String, dynamic> json) {{", schema.name());
            b.push_block(&constructor, "}", |b| {
                for (field, name) in &fields {
                    b.push_line(&format!("{} = {};", name, self.read(field)));
                }
            });
            b.push_blank();

            b.push_block("Map<String, dynamic> toJson() {", "}", |b| {
                b.push_line("final data = <String, dynamic>{};");
                for (field, name) in &fields {
                    b.push_line(&format!(
                        "data[{}] = {};",
                        single_quoted(field.key),
                        self.write(field, name)
                    ));
                }
                b.push_line("return data;");
            });
        });

        for nested in schema.nested() {
            let schema = ObjectSchema::new(nested.name, nested.object, NestedNaming::Bare);
            code.push_blank();
            self.render(&schema, use_camel_case, code);
        }
    }
}

impl Emitter for DartEmitter {
    fn language(&self) -> Language {
        Language::Dart
    }

    fn emit(&self, value: &Value, root_name: &str, use_camel_case: bool) -> String {
        let object = match resolve_root(value) {
            Root::Object(object) => object,
            Root::Literal(text) => return text,
        };

        let schema = ObjectSchema::new(type_name(root_name), object, NestedNaming::Bare);
        let mut code = CodeBuilder::new(Indent::TWO);
        self.render(&schema, use_camel_case, &mut code);
        code.build()
    }
}
