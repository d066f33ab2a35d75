//! Target languages for code generation.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Supported target languages.
///
/// Identifiers (see [`Language::as_str`]) are the display names callers pass
/// around, e.g. `"Objective-C"` or `"C#"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Objective-C with YYModel mapping
    ObjectiveC,
    /// Swift `Codable` structs
    Swift,
    /// Java classes with Jackson annotations
    Java,
    /// Kotlin data classes with kotlinx.serialization
    Kotlin,
    /// Python literal
    Python,
    /// JavaScript literal
    JavaScript,
    /// TypeScript interfaces
    TypeScript,
    /// Go structs with JSON tags
    Go,
    /// Rust structs with serde derives
    Rust,
    /// C# classes with System.Text.Json attributes
    CSharp,
    /// PHP array literal
    Php,
    /// Ruby hash literal
    Ruby,
    /// Dart classes with `fromJson`/`toJson`
    Dart,
}

/// Error returned when a language identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Every supported language, in dispatch table order.
    pub const ALL: [Language; 13] = [
        Language::ObjectiveC,
        Language::Swift,
        Language::Java,
        Language::Kotlin,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Go,
        Language::Rust,
        Language::CSharp,
        Language::Php,
        Language::Ruby,
        Language::Dart,
    ];

    /// Language used when an identifier cannot be resolved.
    pub const FALLBACK: Language = Language::JavaScript;

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ObjectiveC => "Objective-C",
            Language::Swift => "Swift",
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Dart => "Dart",
        }
    }

    /// Conventional file extension, with the dot (e.g., ".rs").
    pub fn extension(&self) -> &'static str {
        match self {
            Language::ObjectiveC => ".m",
            Language::Swift => ".swift",
            Language::Java => ".java",
            Language::Kotlin => ".kt",
            Language::Python => ".py",
            Language::JavaScript => ".js",
            Language::TypeScript => ".ts",
            Language::Go => ".go",
            Language::Rust => ".rs",
            Language::CSharp => ".cs",
            Language::Php => ".php",
            Language::Ruby => ".rb",
            Language::Dart => ".dart",
        }
    }

    /// Whether the language gets type definitions rather than a data literal.
    pub fn emits_types(&self) -> bool {
        !matches!(
            self,
            Language::Python | Language::JavaScript | Language::Php | Language::Ruby
        )
    }

    /// Look up an exact identifier as returned by [`Language::as_str`].
    ///
    /// Unlike [`FromStr`], no aliases, case folding or trimming apply.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.as_str() == id)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(language) = Self::from_id(s) {
            return Ok(language);
        }

        match s.trim().to_lowercase().as_str() {
            "objective-c" | "objectivec" | "objc" => Ok(Language::ObjectiveC),
            "swift" => Ok(Language::Swift),
            "java" => Ok(Language::Java),
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "go" | "golang" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            "c#" | "csharp" | "cs" => Ok(Language::CSharp),
            "php" => Ok(Language::Php),
            "ruby" | "rb" => Ok(Language::Ruby),
            "dart" => Ok(Language::Dart),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_canonical() {
        for language in Language::ALL {
            assert_eq!(Language::from_str(language.as_str()).unwrap(), language);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Language::from_str("objc").unwrap(), Language::ObjectiveC);
        assert_eq!(Language::from_str("ts").unwrap(), Language::TypeScript);
        assert_eq!(Language::from_str("rust").unwrap(), Language::Rust);
        assert_eq!(Language::from_str("csharp").unwrap(), Language::CSharp);
        assert_eq!(Language::from_str("GOLANG").unwrap(), Language::Go);
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(
            Language::from_str("UNKNOWN_LANG"),
            Err(UnknownLanguage("UNKNOWN_LANG".to_string()))
        );
        assert!(Language::from_str("").is_err());
    }

    #[test]
    fn test_from_id_is_exact() {
        for language in Language::ALL {
            assert_eq!(Language::from_id(language.as_str()), Some(language));
        }
        assert_eq!(Language::from_id("go"), None);
        assert_eq!(Language::from_id("typescript"), None);
        assert_eq!(Language::from_id(" Go "), None);
        assert_eq!(Language::from_id("objc"), None);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Language::ObjectiveC.extension(), ".m");
        assert_eq!(Language::Kotlin.extension(), ".kt");
        assert_eq!(Language::CSharp.extension(), ".cs");
        assert_eq!(Language::Ruby.extension(), ".rb");
    }

    #[test]
    fn test_emits_types() {
        assert!(Language::Go.emits_types());
        assert!(Language::ObjectiveC.emits_types());
        assert!(!Language::Ruby.emits_types());
        assert_eq!(Language::ALL.iter().filter(|l| l.emits_types()).count(), 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::CSharp.to_string(), "C#");
        assert_eq!(Language::ObjectiveC.to_string(), "Objective-C");
    }
}
