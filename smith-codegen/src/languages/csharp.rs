//! C# class emitter with System.Text.Json attributes.

use serde_json::Value;
use typesmith_core::{Language, NestedNaming, type_name};

use super::{Root, quoted, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{CSHARP_NAMING, Emitter, TypeMapper},
    schema::ObjectSchema,
};

const COLLECTIONS_USING: &str = "using System.Collections.Generic;";
const SERIALIZATION_USING: &str = "using System.Text.Json.Serialization;";

/// Emits classes with auto-properties in PascalCase.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpEmitter;

#[derive(Debug, Default)]
struct Usings {
    collections: bool,
    serialization: bool,
}

impl TypeMapper for CSharpEmitter {
    fn any(&self) -> &'static str {
        "object"
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
        "string"
    }

    fn array(&self, element: &str) -> String {
        format!("List<{}>", element)
    }
}

impl CSharpEmitter {
    fn render(
        &self,
        schema: &ObjectSchema<'_>,
        use_camel_case: bool,
        usings: &mut Usings,
        code: &mut CodeBuilder,
    ) {
        code.push_line(&format!("public class {}", schema.name()));
        code.push_block("{", "}", |b| {
            for field in schema.fields() {
                let name = CSHARP_NAMING.field_name(field.key, use_camel_case);
                usings.collections |= field.ty.is_array();
                if CSHARP_NAMING.is_renamed(field.key, &name) {
                    usings.serialization = true;
                    b.push_line(&format!("[JsonPropertyName({})]", quoted(field.key)));
                }
                b.push_line(&format!(
                    "public {} {} {{ get; set; }}",
                    self.map_type(&field.ty),
                    name
                ));
            }
        });

        for nested in schema.nested() {
            let schema = ObjectSchema::new(nested.name, nested.object, NestedNaming::Bare);
            code.push_blank();
            self.render(&schema, use_camel_case, usings, code);
        }
    }
}

impl Emitter for CSharpEmitter {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn emit(&self, value: &Value, root_name: &str, use_camel_case: bool) -> String {
        let object = match resolve_root(value) {
            Root::Object(object) => object,
            Root::Literal(text) => return text,
        };

        let schema = ObjectSchema::new(type_name(root_name), object, NestedNaming::Bare);
        let mut usings = Usings::default();
        let mut body = CodeBuilder::new(Indent::FOUR);
        self.render(&schema, use_camel_case, &mut usings, &mut body);

        let mut code = CodeBuilder::new(Indent::FOUR);
        if usings.collections {
            code.push_line(COLLECTIONS_USING);
        }
        if usings.serialization {
            code.push_line(SERIALIZATION_USING);
        }
        if !code.is_empty() {
            code.push_blank();
        }
        code.push_lines(&body.build());
        code.build()
    }
}
