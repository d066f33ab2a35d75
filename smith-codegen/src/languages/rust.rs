//! Rust struct emitter with serde derives.

use serde_json::Value;
use typesmith_core::{JsonType, Language, NestedNaming, type_name};

use super::{Root, quoted, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{Emitter, RUST_NAMING, TypeMapper},
    schema::ObjectSchema,
};

const SERDE_IMPORT: &str = "use serde::{Deserialize, Serialize};";

/// Emits `#[derive(Serialize, Deserialize)]` structs.
///
/// Field names are always snake_case; the camelCase flag does not apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

impl TypeMapper for RustEmitter {
    fn any(&self) -> &'static str {
        "Option<serde_json::Value>"
    }

    fn bool(&self) -> &'static str {
        "bool"
    }

    fn int(&self) -> &'static str {
        "i64"
    }

    fn float(&self) -> &'static str {
        "f64"
    }

    fn string(&self) -> &'static str {
        "String"
    }

    fn array(&self, element: &str) -> String {
        format!("Vec<{}>", element)
    }

    fn map_element(&self, ty: &JsonType) -> String {
        match ty {
            JsonType::Any => "serde_json::Value".to_string(),
            other => self.map_type(other),
        }
    }
}

impl RustEmitter {
    fn render(&self, schema: &ObjectSchema<'_>, code: &mut CodeBuilder) {
        code.push_line("#[derive(Debug, Clone, Serialize, Deserialize)]");
        let header = format!("pub struct {} {{", schema.name());
        code.push_block(&header, "}", |b| {
            for field in schema.fields() {
                let name = RUST_NAMING.field_name(field.key, false);
                if RUST_NAMING.is_renamed(field.key, &name) {
                    b.push_line(&format!("#[serde(rename = {})]", quoted(field.key)));
                }
                b.push_line(&format!("pub {}: {},", name, self.map_type(&field.ty)));
            }
        });

        for nested in schema.nested() {
            let schema = ObjectSchema::new(nested.name, nested.object, NestedNaming::Bare);
            code.push_blank();
            self.render(&schema, code);
        }
    }
}

impl Emitter for RustEmitter {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn emit(&self, value: &Value, root_name: &str, _use_camel_case: bool) -> String {
        let object = match resolve_root(value) {
            Root::Object(object) => object,
            Root::Literal(text) => return text,
        };

        let schema = ObjectSchema::new(type_name(root_name), object, NestedNaming::Bare);
        let mut code = CodeBuilder::new(Indent::FOUR);
        code.push_line(SERDE_IMPORT).push_blank();
        self.render(&schema, &mut code);
        code.build()
    }
}
