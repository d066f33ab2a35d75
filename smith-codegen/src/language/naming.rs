//! Naming conventions for different programming languages.

use typesmith_core::{capitalize, property_name, to_snake_case};

/// Language-specific naming conventions.
///
/// Defines how JSON keys become property names, and how reserved words are
/// escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a JSON key into a property name; the flag toggles camelCase
    pub key_to_field: fn(&str, bool) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
    /// Strip escape syntax the language's serializers see through
    /// (e.g., "r#type" serializes as "type" with serde)
    pub unescape: fn(&str) -> &str,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a JSON key and make it safe for use as a property name.
    pub fn field_name(&self, key: &str, use_camel_case: bool) -> String {
        let transformed = (self.key_to_field)(key, use_camel_case);
        self.safe_name(&transformed)
    }

    /// Whether the property rendered for `key` no longer serializes as `key`,
    /// so a key mapping entry is required.
    pub fn is_renamed(&self, key: &str, field_name: &str) -> bool {
        (self.unescape)(field_name) != key
    }
}

fn verbatim(key: &str, _use_camel_case: bool) -> String {
    key.to_string()
}

fn exported_name(key: &str, use_camel_case: bool) -> String {
    capitalize(&property_name(key, use_camel_case))
}

/// snake_case regardless of the camelCase flag, limited to `[a-z0-9_]`.
fn rust_field_name(key: &str, _use_camel_case: bool) -> String {
    let snake: String = to_snake_case(key)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    match snake.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", snake),
        Some(_) => snake,
    }
}

fn escape_rust_reserved(name: &str) -> String {
    match name {
        // Not allowed as raw identifiers
        "self" | "Self" | "super" | "crate" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

fn escape_with_backticks(name: &str) -> String {
    format!("`{}`", name)
}

fn escape_with_suffix(name: &str) -> String {
    format!("{}_", name)
}

fn no_escape(name: &str) -> String {
    name.to_string()
}

fn strip_raw_prefix(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

fn strip_backticks(name: &str) -> &str {
    name.trim_matches('`')
}

fn identity(name: &str) -> &str {
    name
}

/// Objective-C naming conventions.
pub const OBJC_NAMING: NamingConvention = NamingConvention {
    key_to_field: property_name,
    reserved_words: &[],
    escape_reserved: no_escape,
    unescape: identity,
};

/// Swift naming conventions.
pub const SWIFT_NAMING: NamingConvention = NamingConvention {
    key_to_field: property_name,
    reserved_words: &[
        "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
        "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
        "rethrows", "static", "struct", "subscript", "typealias", "var", "break", "case",
        "continue", "default", "defer", "do", "else", "fallthrough", "for", "guard", "if", "in",
        "repeat", "return", "switch", "where", "while", "as", "catch", "false", "is", "nil",
        "super", "self", "throw", "throws", "true", "try",
    ],
    escape_reserved: escape_with_backticks,
    unescape: strip_backticks,
};

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    key_to_field: property_name,
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
        "null",
    ],
    escape_reserved: escape_with_suffix,
    unescape: identity,
};

/// Kotlin naming conventions.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    key_to_field: property_name,
    reserved_words: &[
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
        "true", "try", "typealias", "typeof", "val", "var", "when", "while",
    ],
    escape_reserved: escape_with_backticks,
    unescape: strip_backticks,
};

/// TypeScript naming conventions: properties mirror JSON keys exactly.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    key_to_field: verbatim,
    reserved_words: &[],
    escape_reserved: no_escape,
    unescape: identity,
};

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    key_to_field: exported_name, // Go exports with PascalCase
    reserved_words: &[],
    escape_reserved: no_escape,
    unescape: identity,
};

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    key_to_field: rust_field_name,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
    unescape: strip_raw_prefix,
};

/// C# naming conventions.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    key_to_field: exported_name,
    reserved_words: &[],
    escape_reserved: no_escape,
    unescape: identity,
};

/// Dart naming conventions.
pub const DART_NAMING: NamingConvention = NamingConvention {
    key_to_field: property_name,
    reserved_words: &[
        "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
        "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
        "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
        "while", "with",
    ],
    escape_reserved: escape_with_suffix,
    unescape: identity,
};
