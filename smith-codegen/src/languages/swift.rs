//! Swift `Codable` struct emitter.

use serde_json::Value;
use typesmith_core::{Language, NestedNaming, type_name};

use super::{Root, quoted, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{Emitter, SWIFT_NAMING, TypeMapper},
    schema::ObjectSchema,
};

/// Emits `Codable` structs with optional properties.
///
/// A `CodingKeys` enum listing every property is added when at least one
/// property name differs from its JSON key.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftEmitter;

impl TypeMapper for SwiftEmitter {
    fn any(&self) -> &'static str {
        "Any"
    }

    fn bool(&self) -> &'static str {
        "Bool"
    }

    fn int(&self) -> &'static str {
        "Int"
    }

    fn float(&self) -> &'static str {
        "Double"
    }

    fn string(&self) -> &'static str {
        "String"
    }

    fn array(&self, element: &str) -> String {
        format!("[{}]", element)
    }
}

impl SwiftEmitter {
    fn render(&self, schema: &ObjectSchema<'_>, use_camel_case: bool, code: &mut CodeBuilder) {
        let properties: Vec<_> = schema
            .fields()
            .map(|field| (field, SWIFT_NAMING.field_name(field.key, use_camel_case)))
            .collect();
        let needs_coding_keys = properties
            .iter()
            .any(|(field, name)| SWIFT_NAMING.is_renamed(field.key, name));

        let header = format!("struct {}: Codable {{", schema.name());
        code.push_block(&header, "}", |b| {
            for (field, name) in &properties {
                b.push_line(&format!("var {}: {}?", name, self.map_type(&field.ty)));
            }

            if needs_coding_keys {
                b.push_blank();
                b.push_block("enum CodingKeys: String, CodingKey {", "}", |b| {
                    for (field, name) in &properties {
                        if SWIFT_NAMING.is_renamed(field.key, name) {
                            b.push_line(&format!("case {} = {}", name, quoted(field.key)));
                        } else {
                            b.push_line(&format!("case {}", name));
                        }
                    }
                });
            }
        });

        for nested in schema.nested() {
            let schema = ObjectSchema::new(nested.name, nested.object, NestedNaming::Bare);
            code.push_blank();
            self.render(&schema, use_camel_case, code);
        }
    }
}

impl Emitter for SwiftEmitter {
    fn language(&self) -> Language {
        Language::Swift
    }

    fn emit(&self, value: &Value, root_name: &str, use_camel_case: bool) -> String {
        let object = match resolve_root(value) {
            Root::Object(object) => object,
            Root::Literal(text) => return text,
        };

        let schema = ObjectSchema::new(type_name(root_name), object, NestedNaming::Bare);
        let mut code = CodeBuilder::new(Indent::FOUR);
        self.render(&schema, use_camel_case, &mut code);
        code.build()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_coding_keys_for_renamed_fields() {
        let code = SwiftEmitter.emit(&json!({"user_id": 1, "name": "x"}), "Root", true);
        assert_eq!(
            code,
            "struct Root: Codable {\n    \
             var userId: Int?\n    \
             var name: String?\n\n    \
             enum CodingKeys: String, CodingKey {\n        \
             case userId = \"user_id\"\n        \
             case name\n    \
             }\n\
             }"
        );
    }

    #[test]
    fn test_no_coding_keys_when_names_match() {
        let code = SwiftEmitter.emit(&json!({"id": 1, "score": 0.5}), "Root", true);
        assert_eq!(code, "struct Root: Codable {\n    var id: Int?\n    var score: Double?\n}");
    }

    #[test]
    fn test_camel_case_disabled() {
        let code = SwiftEmitter.emit(&json!({"user_id": 1}), "Root", false);
        assert_eq!(code, "struct Root: Codable {\n    var user_id: Int?\n}");
    }

    #[test]
    fn test_keyword_property_is_escaped_not_renamed() {
        let code = SwiftEmitter.emit(&json!({"default": true}), "Root", true);
        assert!(code.contains("    var `default`: Bool?"));
        assert!(!code.contains("CodingKeys"));
    }

    #[test]
    fn test_nested_and_lists() {
        let code = SwiftEmitter.emit(
            &json!({"tags": [], "items": [{"qty": 2}], "owner": {"name": "x"}}),
            "Root",
            true,
        );
        assert!(code.contains("    var tags: [Any]?"));
        assert!(code.contains("    var items: [ItemsItem]?"));
        assert!(code.contains("\n\nstruct ItemsItem: Codable {\n    var qty: Int?\n}"));
        assert!(code.ends_with("struct Owner: Codable {\n    var name: String?\n}"));
    }
}
