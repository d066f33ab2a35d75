//! Java class emitter with Jackson annotations.

use serde_json::Value;
use typesmith_core::{JsonType, Language, NestedNaming, capitalize, type_name};

use super::{Root, quoted, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{Emitter, JAVA_NAMING, TypeMapper},
    schema::ObjectSchema,
};

const LIST_IMPORT: &str = "import java.util.List;";
const JSON_PROPERTY_IMPORT: &str = "import com.fasterxml.jackson.annotation.JsonProperty;";

/// Emits POJOs with private fields and getters/setters.
///
/// The root class is `public`; nested classes are package-private so they
/// can share one file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEmitter;

/// Imports required by the classes rendered so far.
#[derive(Debug, Default)]
struct JavaImports {
    list: bool,
    json_property: bool,
}

impl TypeMapper for JavaEmitter {
    fn any(&self) -> &'static str {
        "Object"
    }

    fn bool(&self) -> &'static str {
        "boolean"
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

    fn map_element(&self, ty: &JsonType) -> String {
        match ty {
            JsonType::Bool => "Boolean".to_string(),
            JsonType::Int => "Integer".to_string(),
            JsonType::Float => "Double".to_string(),
            other => self.map_type(other),
        }
    }
}

impl JavaEmitter {
    fn render(
        &self,
        schema: &ObjectSchema<'_>,
        use_camel_case: bool,
        visibility: &str,
        imports: &mut JavaImports,
        code: &mut CodeBuilder,
    ) {
        let fields: Vec<_> = schema
            .fields()
            .map(|field| {
                let name = JAVA_NAMING.field_name(field.key, use_camel_case);
                (field, name, self.map_type(&field.ty))
            })
            .collect();

        let header = format!("{}class {} {{", visibility, schema.name());
        code.push_block(&header, "}", |b| {
            for (field, name, ty) in &fields {
                imports.list |= field.ty.is_array();
                if JAVA_NAMING.is_renamed(field.key, name) {
                    imports.json_property = true;
                    b.push_line(&format!("@JsonProperty({})", quoted(field.key)));
                }
                b.push_line(&format!("private {} {};", ty, name));
            }

            if !fields.is_empty() {
                b.push_blank();
            }
            for (_, name, ty) in &fields {
                let accessor = capitalize(name);
                b.push_line(&format!("public {} get{}() {{ return {}; }}", ty, accessor, name));
                b.push_line(&format!(
                    "public void set{}({} {}) {{ this.{} = {}; }}",
                    accessor, ty, name, name, name
                ));
            }
        });

        for nested in schema.nested() {
            let schema = ObjectSchema::new(nested.name, nested.object, NestedNaming::Bare);
            code.push_blank();
            self.render(&schema, use_camel_case, "", imports, code);
        }
    }
}

impl Emitter for JavaEmitter {
    fn language(&self) -> Language {
        Language::Java
    }

    fn emit(&self, value: &Value, root_name: &str, use_camel_case: bool) -> String {
        let object = match resolve_root(value) {
            Root::Object(object) => object,
            Root::Literal(text) => return text,
        };

        let schema = ObjectSchema::new(type_name(root_name), object, NestedNaming::Bare);
        let mut imports = JavaImports::default();
        let mut body = CodeBuilder::new(Indent::FOUR);
        self.render(&schema, use_camel_case, "public ", &mut imports, &mut body);

        let mut code = CodeBuilder::new(Indent::FOUR);
        if imports.json_property {
            code.push_line(JSON_PROPERTY_IMPORT);
        }
        if imports.list {
            code.push_line(LIST_IMPORT);
        }
        if !code.is_empty() {
            code.push_blank();
        }
        code.push_lines(&body.build());
        code.build()
    }
}
