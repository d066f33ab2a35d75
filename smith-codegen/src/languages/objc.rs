//! Objective-C emitter for YYModel.
//!
//! The output holds two artifacts back to back: the `.h` interface
//! (imports, forward `@class` declarations and every `@interface`) and,
//! after a banner naming the `.m` file, the `@implementation`s with YYModel
//! key and container mappings.

use serde_json::Value;
use typesmith_core::{JsonType, Language, NestedNaming, type_name};

use super::{Root, quoted, resolve_root};
use crate::{
    builder::{CodeBuilder, Indent},
    language::{Emitter, OBJC_NAMING, TypeMapper},
    schema::ObjectSchema,
};

const IMPORTS: [&str; 2] = ["#import <Foundation/Foundation.h>", "#import <YYModel/YYModel.h>"];
const BANNER: &str = "// ════════════════════════════════════";

/// Emits `NSObject <YYModel>` classes.
///
/// Class names are qualified with the enclosing class (`RootUser`), since
/// Objective-C classes share one global namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveCEmitter;

/// Interface and implementation text of one class and its nested classes.
struct ClassSource {
    interface: String,
    implementation: String,
}

impl TypeMapper for ObjectiveCEmitter {
    fn any(&self) -> &'static str {
        "id"
    }

    fn bool(&self) -> &'static str {
        "NSNumber *"
    }

    fn int(&self) -> &'static str {
        "NSNumber *"
    }

    fn float(&self) -> &'static str {
        "NSNumber *"
    }

    fn string(&self) -> &'static str {
        "NSString *"
    }

    fn array(&self, element: &str) -> String {
        if element == self.any() {
            "NSArray *".to_string()
        } else {
            format!("NSArray<{}> *", element)
        }
    }

    fn object(&self, name: &str) -> String {
        format!("{} *", name)
    }
}

impl ObjectiveCEmitter {
    fn property(&self, field_ty: &JsonType, name: &str) -> String {
        let (attributes, ty) = match field_ty {
            JsonType::Bool => ("assign", "BOOL".to_string()),
            JsonType::Int => ("assign", "NSInteger".to_string()),
            JsonType::Float => ("assign", "CGFloat".to_string()),
            JsonType::Str | JsonType::Array(_) => ("copy", self.map_type(field_ty)),
            JsonType::Any | JsonType::Object(_) => ("strong", self.map_type(field_ty)),
        };
        let separator = if ty.ends_with('*') { "" } else { " " };
        format!("@property (nonatomic, {}) {}{}{};", attributes, ty, separator, name)
    }

    fn render_class(&self, schema: &ObjectSchema<'_>, use_camel_case: bool) -> ClassSource {
        let nested: Vec<_> = schema
            .nested()
            .map(|n| {
                let nested_schema = ObjectSchema::new(n.name, n.object, NestedNaming::Qualified);
                self.render_class(&nested_schema, use_camel_case)
            })
            .collect();
        let nested_names: Vec<_> = schema.nested().map(|n| n.name).collect();

        let mut properties = Vec::new();
        let mut key_mappings = Vec::new();
        let mut container_classes = Vec::new();
        for field in schema.fields() {
            let name = OBJC_NAMING.field_name(field.key, use_camel_case);
            properties.push(self.property(&field.ty, &name));
            if OBJC_NAMING.is_renamed(field.key, &name) {
                key_mappings.push(format!("@{}: @{},", quoted(&name), quoted(field.key)));
            }
            if let Some(JsonType::Object(item)) = field.ty.element() {
                container_classes.push(format!("@{}: [{} class],", quoted(&name), item));
            }
        }

        let mut interface = CodeBuilder::new(Indent::FOUR);
        if !nested_names.is_empty() {
            for name in &nested_names {
                interface.push_line(&format!("@class {};", name));
            }
            interface.push_blank();
        }
        interface
            .push_line(&format!("@interface {} : NSObject <YYModel>", schema.name()))
            .push_blank();
        if !properties.is_empty() {
            for property in &properties {
                interface.push_line(property);
            }
            interface.push_blank();
        }
        interface.push_line("@end");
        for class in &nested {
            interface.push_blank().push_lines(&class.interface);
        }

        let mut implementation = CodeBuilder::new(Indent::FOUR);
        implementation
            .push_line(&format!("@implementation {}", schema.name()))
            .push_blank();
        push_dictionary_method(
            &mut implementation,
            "+ (NSDictionary *)modelCustomPropertyMapper {",
            &key_mappings,
        );
        push_dictionary_method(
            &mut implementation,
            "+ (NSDictionary *)modelContainerPropertyGenericClass {",
            &container_classes,
        );
        implementation.push_line("@end");
        for class in &nested {
            implementation.push_blank().push_lines(&class.implementation);
        }

        ClassSource {
            interface: interface.build(),
            implementation: implementation.build(),
        }
    }
}

/// Class method returning a dictionary literal; skipped when `entries` is empty.
fn push_dictionary_method(code: &mut CodeBuilder, signature: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    code.push_block(signature, "}", |b| {
        b.push_block("return @{", "};", |b| {
            for entry in entries {
                b.push_line(entry);
            }
        });
    });
    code.push_blank();
}

impl Emitter for ObjectiveCEmitter {
    fn language(&self) -> Language {
        Language::ObjectiveC
    }

    fn emit(&self, value: &Value, root_name: &str, use_camel_case: bool) -> String {
        let object = match resolve_root(value) {
            Root::Object(object) => object,
            Root::Literal(text) => return text,
        };

        let schema = ObjectSchema::new(type_name(root_name), object, NestedNaming::Qualified);
        let class = self.render_class(&schema, use_camel_case);

        let mut code = CodeBuilder::new(Indent::FOUR);
        for import in IMPORTS {
            code.push_line(import);
        }
        code.push_blank()
            .push_lines(&class.interface)
            .push_blank()
            .push_line(BANNER)
            .push_line(&format!("// {}.m", schema.name()))
            .push_line(BANNER)
            .push_blank()
            .push_line(&format!("#import \"{}.h\"", schema.name()))
            .push_blank()
            .push_lines(&class.implementation);
        code.build()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_flat_class() {
        let code = ObjectiveCEmitter.emit(&json!({"id": 1, "name": "x"}), "Root", true);
        assert_eq!(
            code,
            "#import <Foundation/Foundation.h>\n\
             #import <YYModel/YYModel.h>\n\
             \n\
             @interface Root : NSObject <YYModel>\n\
             \n\
             @property (nonatomic, assign) NSInteger id;\n\
             @property (nonatomic, copy) NSString *name;\n\
             \n\
             @end\n\
             \n\
             // ════════════════════════════════════\n\
             // Root.m\n\
             // ════════════════════════════════════\n\
             \n\
             #import \"Root.h\"\n\
             \n\
             @implementation Root\n\
             \n\
             @end"
        );
    }

    #[test]
    fn test_property_mapper_lists_original_keys() {
        let code = ObjectiveCEmitter.emit(&json!({"user_id": 7}), "Root", true);
        assert!(code.contains("@property (nonatomic, assign) NSInteger userId;"));
        assert!(code.contains(
            "+ (NSDictionary *)modelCustomPropertyMapper {\n    return @{\n        @\"userId\": @\"user_id\",\n    };\n}"
        ));
    }

    #[test]
    fn test_no_mapper_without_camel_case() {
        let code = ObjectiveCEmitter.emit(&json!({"user_id": 7}), "Root", false);
        assert!(code.contains("NSInteger user_id;"));
        assert!(!code.contains("modelCustomPropertyMapper"));
    }

    #[test]
    fn test_nested_classes_are_qualified() {
        let code = ObjectiveCEmitter.emit(
            &json!({"user": {"age": 3}, "orders": [{"total": 1.5}], "tags": ["a"], "raw": []}),
            "Root",
            true,
        );
        assert!(code.contains("@class RootUser;\n@class RootOrdersItem;\n\n@interface Root"));
        assert!(code.contains("@property (nonatomic, strong) RootUser *user;"));
        assert!(code.contains("@property (nonatomic, copy) NSArray<RootOrdersItem *> *orders;"));
        assert!(code.contains("@property (nonatomic, copy) NSArray<NSString *> *tags;"));
        assert!(code.contains("@property (nonatomic, copy) NSArray *raw;"));
        assert!(code.contains("@interface RootUser : NSObject <YYModel>"));
        assert!(code.contains("@property (nonatomic, assign) CGFloat total;"));
        assert!(code.contains("@\"orders\": [RootOrdersItem class],"));
        assert!(code.contains("@implementation RootUser\n"));
        assert!(code.ends_with("@implementation RootOrdersItem\n\n@end"));
        assert_eq!(code.matches("#import <Foundation/Foundation.h>").count(), 1);
    }

    #[test]
    fn test_null_and_bool() {
        let code = ObjectiveCEmitter.emit(&json!({"x": null, "ok": false}), "Root", true);
        assert!(code.contains("@property (nonatomic, strong) id x;"));
        assert!(code.contains("@property (nonatomic, assign) BOOL ok;"));
    }
}
