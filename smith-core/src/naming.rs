//! Identifier conversion between naming conventions.

/// Uppercase the first character (e.g., "userId" -> "UserId").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "UserId" -> "userId").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

/// Strip `_`/`-` separators, uppercasing the character that follows each run
/// (e.g., "user_id" -> "userId", "first-name" -> "firstName").
///
/// A run of separators is only removed when an ASCII letter or digit follows
/// it; otherwise it is kept as-is ("price-$", "name_"). When `enabled` is
/// false the input is returned unchanged.
pub fn to_camel_from_separators(s: &str, enabled: bool) -> String {
    if !enabled {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut pending = String::new();
    for c in s.chars() {
        if is_separator(c) {
            pending.push(c);
        } else if pending.is_empty() {
            result.push(c);
        } else if c.is_ascii_alphanumeric() {
            pending.clear();
            result.extend(c.to_uppercase());
        } else {
            result.push_str(&pending);
            pending.clear();
            result.push(c);
        }
    }
    result.push_str(&pending);
    result
}

/// Conventional field/property name (e.g., "user_id" -> "userId").
pub fn property_name(s: &str, use_camel_case: bool) -> String {
    lower_first(&to_camel_from_separators(s, use_camel_case))
}

/// Conventional type/class name, always PascalCase (e.g., "user_info" -> "UserInfo").
pub fn type_name(s: &str) -> String {
    capitalize(&to_camel_from_separators(s, true))
}

/// Convert to snake_case (e.g., "userId" -> "user_id").
///
/// An underscore is inserted before every uppercase letter, so acronyms
/// split per letter ("userID" -> "user_i_d").
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    match result.strip_prefix('_') {
        Some(rest) => rest.to_string(),
        None => result,
    }
}

/// Check whether `s` is a plain ASCII identifier (`[A-Za-z_$][A-Za-z0-9_$]*`).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("UserId"), "userId");
        assert_eq!(lower_first("URL"), "uRL");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_to_camel_from_separators() {
        assert_eq!(to_camel_from_separators("user_id", true), "userId");
        assert_eq!(to_camel_from_separators("first-name", true), "firstName");
        assert_eq!(to_camel_from_separators("a_b-c", true), "aBC");
        assert_eq!(to_camel_from_separators("item_1", true), "item1");
        assert_eq!(to_camel_from_separators("user_id", false), "user_id");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(to_camel_from_separators("a__b", true), "aB");
        assert_eq!(to_camel_from_separators("a_-b", true), "aB");
    }

    #[test]
    fn test_trailing_separators_are_kept() {
        assert_eq!(to_camel_from_separators("name_", true), "name_");
        assert_eq!(to_camel_from_separators("__", true), "__");
    }

    #[test]
    fn test_separators_before_non_word_characters_are_kept() {
        assert_eq!(to_camel_from_separators("price-$", true), "price-$");
        assert_eq!(to_camel_from_separators("a-.b", true), "a-.b");
        assert_eq!(to_camel_from_separators("a_ b", true), "a_ b");
        assert_eq!(to_camel_from_separators("a__.b_c", true), "a__.bC");
    }

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("user_id", true), "userId");
        assert_eq!(property_name("UserName", true), "userName");
        assert_eq!(property_name("_private", true), "private");
        assert_eq!(property_name("user_id", false), "user_id");
        assert_eq!(property_name("Name", false), "name");
    }

    #[test]
    fn test_property_name_is_idempotent() {
        for s in [
            "user_id",
            "a__b",
            "a_-b",
            "-_a",
            "_a",
            "name_",
            "__",
            "x-1-y",
            "price-$",
            "a-.b",
            "HTTPServer",
            "already_camelCase",
            "",
        ] {
            let once = property_name(s, true);
            assert_eq!(property_name(&once, true), once, "input: {s:?}");
        }
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name("root"), "Root");
        assert_eq!(type_name("user_info"), "UserInfo");
        assert_eq!(type_name("shipping-address"), "ShippingAddress");
        assert_eq!(type_name("RootA"), "RootA");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("userId"), "user_id");
        assert_eq!(to_snake_case("UserName"), "user_name");
        assert_eq!(to_snake_case("user_id"), "user_id");
        assert_eq!(to_snake_case("userID"), "user_i_d");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("userId"));
        assert!(is_identifier("_id"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier("user-id"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("first name"));
        assert!(!is_identifier(""));
    }
}
