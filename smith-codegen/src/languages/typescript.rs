//! TypeScript interface emitter.

use serde_json::Value;
use typesmith_core::{Language, NestedNaming, is_identifier, type_name};

use super::{Root, quoted, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{Emitter, TYPESCRIPT_NAMING, TypeMapper},
    schema::ObjectSchema,
};

/// Emits one `interface` per object, keeping JSON keys as property names.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptEmitter;

impl TypeMapper for TypeScriptEmitter {
    fn any(&self) -> &'static str {
        "any"
    }

    fn bool(&self) -> &'static str {
        "boolean"
    }

    fn int(&self) -> &'static str {
        "number"
    }

    fn float(&self) -> &'static str {
        "number"
    }

    fn string(&self) -> &'static str {
        "string"
    }

    fn array(&self, element: &str) -> String {
        format!("{}[]", element)
    }
}

impl TypeScriptEmitter {
    fn render(&self, schema: &ObjectSchema<'_>, use_camel_case: bool, code: &mut CodeBuilder) {
        let header = format!("interface {} {{", schema.name());
        code.push_block(&header, "}", |b| {
            for field in schema.fields() {
                let name = TYPESCRIPT_NAMING.field_name(field.key, use_camel_case);
                let name = if is_identifier(&name) {
                    name
                } else {
                    quoted(&name)
                };
                b.push_line(&format!("{}: {};", name, self.map_type(&field.ty)));
            }
        });

        for nested in schema.nested() {
            let schema = ObjectSchema::new(nested.name, nested.object, NestedNaming::Bare);
            code.push_blank();
            self.render(&schema, use_camel_case, code);
        }
    }
}

impl Emitter for TypeScriptEmitter {
    fn language(&self) -> Language {
        Language::TypeScript
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
