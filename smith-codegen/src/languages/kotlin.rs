//! Kotlin data class emitter with kotlinx.serialization.

use serde_json::Value;
use typesmith_core::{Language, NestedNaming, type_name};

use super::{Root, quoted, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{Emitter, KOTLIN_NAMING, TypeMapper},
    schema::ObjectSchema,
};

const SERIAL_NAME_IMPORT: &str = "import kotlinx.serialization.SerialName";
const SERIALIZABLE_IMPORT: &str = "import kotlinx.serialization.Serializable";

/// Emits `@Serializable` data classes whose properties default to `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinEmitter;

impl TypeMapper for KotlinEmitter {
    fn any(&self) -> &'static str {
        "Any"
    }

    fn bool(&self) -> &'static str {
        "Boolean"
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
        format!("List<{}>", element)
    }
}

impl KotlinEmitter {
    /// Render `schema` and its nested classes; returns whether any
    /// property needed `@SerialName`.
    fn render(
        &self,
        schema: &ObjectSchema<'_>,
        use_camel_case: bool,
        code: &mut CodeBuilder,
    ) -> bool {
        let mut uses_serial_name = false;

        code.push_line("@Serializable");
        if schema.is_empty() {
            code.push_line(&format!("class {}", schema.name()));
        } else {
            let header = format!("data class {}(", schema.name());
            code.push_block(&header, ")", |b| {
                let last = schema.len() - 1;
                for (i, field) in schema.fields().enumerate() {
                    let name = KOTLIN_NAMING.field_name(field.key, use_camel_case);
                    if KOTLIN_NAMING.is_renamed(field.key, &name) {
                        uses_serial_name = true;
                        b.push_line(&format!("@SerialName({})", quoted(field.key)));
                    }
                    let separator = if i < last { "," } else { "" };
                    b.push_line(&format!(
                        "val {}: {}? = null{}",
                        name,
                        self.map_type(&field.ty),
                        separator
                    ));
                }
            });
        }

        for nested in schema.nested() {
            let schema = ObjectSchema::new(nested.name, nested.object, NestedNaming::Bare);
            code.push_blank();
            uses_serial_name |= self.render(&schema, use_camel_case, code);
        }
        uses_serial_name
    }
}

impl Emitter for KotlinEmitter {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn emit(&self, value: &Value, root_name: &str, use_camel_case: bool) -> String {
        let object = match resolve_root(value) {
            Root::Object(object) => object,
            Root::Literal(text) => return text,
        };

        let schema = ObjectSchema::new(type_name(root_name), object, NestedNaming::Bare);
        let mut body = CodeBuilder::new(Indent::FOUR);
        let uses_serial_name = self.render(&schema, use_camel_case, &mut body);

        let mut code = CodeBuilder::new(Indent::FOUR);
        if uses_serial_name {
            code.push_line(SERIAL_NAME_IMPORT);
        }
        code.push_line(SERIALIZABLE_IMPORT)
            .push_blank()
            .push_lines(&body.build());
        code.build()
    }
}
