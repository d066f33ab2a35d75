//! Unified language dispatch.
//!
//! Maps language identifiers to emitters and file extensions. Identifiers
//! must match [`Language::as_str`] exactly; anything else falls back to
//! JavaScript for generation, but has no file extension.

use serde_json::Value;
use tracing::{debug, instrument};
use typesmith_core::Language;

use crate::{
    language::Emitter,
    languages::{
        CSharpEmitter, DartEmitter, GoEmitter, JavaEmitter, JavaScriptEmitter, KotlinEmitter,
        ObjectiveCEmitter, PhpEmitter, PythonEmitter, RubyEmitter, RustEmitter, SwiftEmitter,
        TypeScriptEmitter,
    },
};

/// Name of the top-level generated type.
pub const DEFAULT_ROOT_NAME: &str = "Root";

/// Get the emitter for a language.
pub fn emitter(language: Language) -> &'static dyn Emitter {
    match language {
        Language::ObjectiveC => &ObjectiveCEmitter,
        Language::Swift => &SwiftEmitter,
        Language::Java => &JavaEmitter,
        Language::Kotlin => &KotlinEmitter,
        Language::Python => &PythonEmitter,
        Language::JavaScript => &JavaScriptEmitter,
        Language::TypeScript => &TypeScriptEmitter,
        Language::Go => &GoEmitter,
        Language::Rust => &RustEmitter,
        Language::CSharp => &CSharpEmitter,
        Language::Php => &PhpEmitter,
        Language::Ruby => &RubyEmitter,
        Language::Dart => &DartEmitter,
    }
}

/// Generate source for `value` in the language named `language_id`.
///
/// Unrecognized identifiers fall back to [`Language::FALLBACK`]. The root
/// type is named [`DEFAULT_ROOT_NAME`].
pub fn generate(value: &Value, language_id: &str, use_camel_case: bool) -> String {
    let language = resolve(language_id);
    generate_with(value, language, DEFAULT_ROOT_NAME, use_camel_case)
}

/// Generate source for `value` with an explicit language and root type name.
#[instrument(skip(value))]
pub fn generate_with(
    value: &Value,
    language: Language,
    root_name: &str,
    use_camel_case: bool,
) -> String {
    let code = emitter(language).emit(value, root_name, use_camel_case);
    debug!(bytes = code.len(), "generated source");
    code
}

/// File extension for `language_id`, with the dot.
///
/// Unlike [`generate`], there is no fallback: unknown identifiers yield
/// `None`.
pub fn file_extension(language_id: &str) -> Option<&'static str> {
    Language::from_id(language_id).map(|language| emitter(language).file_extension())
}

/// Generated code together with the language it was generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Language actually used, after fallback
    pub language: Language,
    /// Generated text, without trailing newline
    pub code: String,
    /// File extension with the dot
    pub extension: &'static str,
}

impl GeneratedSource {
    /// File name for this source, e.g. `"root.rs"`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}{}", stem, self.extension)
    }
}

/// Generate source and pair it with the extension it should be saved under.
pub fn generate_source(
    value: &Value,
    language_id: &str,
    root_name: &str,
    use_camel_case: bool,
) -> GeneratedSource {
    let language = resolve(language_id);
    let code = generate_with(value, language, root_name, use_camel_case);
    GeneratedSource {
        language,
        code,
        extension: language.extension(),
    }
}

fn resolve(language_id: &str) -> Language {
    Language::from_id(language_id).unwrap_or_else(|| {
        debug!(language_id, fallback = %Language::FALLBACK, "unknown language, falling back");
        Language::FALLBACK
    })
}
