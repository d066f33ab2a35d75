//! Go struct emitter.

use serde_json::Value;
use typesmith_core::{Language, NestedNaming, type_name};

use super::{Root, quoted, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{Emitter, GO_NAMING, TypeMapper},
    schema::ObjectSchema,
};

/// Emits exported structs with a `json` tag on every field.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoEmitter;

impl TypeMapper for GoEmitter {
    fn any(&self) -> &'static str {
        "interface{}"
    }

    fn bool(&self) -> &'static str {
        "bool"
    }

    fn int(&self) -> &'static str {
        "int"
    }

    fn float(&self) -> &'static str {
        "float64"
    }

    fn string(&self) -> &'static str {
        "string"
    }

    fn array(&self, element: &str) -> String {
        format!("[]{}", element)
    }
}

impl GoEmitter {
    fn render(&self, schema: &ObjectSchema<'_>, use_camel_case: bool, code: &mut CodeBuilder) {
        let header = format!("type {} struct {{", schema.name());
        code.push_block(&header, "}", |b| {
            for field in schema.fields() {
                let name = GO_NAMING.field_name(field.key, use_camel_case);
                let tag = format!("json:{}", quoted(field.key));
                b.push_line(&format!(
                    "{} {} {}",
                    name,
                    self.map_type(&field.ty),
                    tag_literal(&tag)
                ));
            }
        });

        for nested in schema.nested() {
            let schema = ObjectSchema::new(nested.name, nested.object, NestedNaming::Bare);
            code.push_blank();
            self.render(&schema, use_camel_case, code);
        }
    }
}

/// Tags are raw strings unless the content holds a backtick, which only an
/// interpreted string can carry.
fn tag_literal(tag: &str) -> String {
    if tag.contains('`') {
        format!("\"{}\"", tag.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        format!("`{}`", tag)
    }
}

impl Emitter for GoEmitter {
    fn language(&self) -> Language {
        Language::Go
    }

    fn emit(&self, value: &Value, root_name: &str, use_camel_case: bool) -> String {
        let object = match resolve_root(value) {
            Root::Object(object) => object,
            Root::Literal(text) => return text,
        };

        let schema = ObjectSchema::new(type_name(root_name), object, NestedNaming::Bare);
        let mut code = CodeBuilder::new(Indent::GO);
        self.render(&schema, use_camel_case, &mut code);
        code.build()
    }
}
