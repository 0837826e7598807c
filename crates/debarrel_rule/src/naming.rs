//! Name casing used to turn an imported binding name into a module name.

use crate::options::TransformImportName;

/// Converts a string to kebab-case.
///
/// A hyphen goes between a lowercase letter or digit and a following
/// uppercase letter, and between two uppercase letters when a lowercase
/// letter follows, so acronyms stay together: `HTTPServer` -> `http-server`.
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();

    let mut split = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let word_start = (prev.is_ascii_lowercase() || prev.is_ascii_digit())
                && c.is_ascii_uppercase();
            let acronym_end = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && next.is_some_and(|n| n.is_ascii_lowercase());
            if word_start || acronym_end {
                split.push('-');
            }
        }
        split.push(c);
    }

    split.to_ascii_lowercase()
}

/// Lowercases the first character only.
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Applies the configured transform to `name`. `None` and unknown tokens are
/// the identity.
pub fn transform_import_name(name: &str, transform: Option<&TransformImportName>) -> String {
    match transform {
        None => name.to_string(),
        Some(TransformImportName::Custom(f)) => f(name),
        Some(TransformImportName::Lowercase) => name.to_ascii_lowercase(),
        Some(TransformImportName::KebabCase) => to_kebab_case(name),
        Some(TransformImportName::CamelCase) => to_camel_case(name),
        Some(TransformImportName::Unrecognized(_)) => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_kebab_case_simple() {
        assert_eq!(to_kebab_case("DatePicker"), "date-picker");
        assert_eq!(to_kebab_case("Button"), "button");
        assert_eq!(to_kebab_case("button"), "button");
    }

    #[test]
    fn test_kebab_case_acronyms() {
        assert_eq!(to_kebab_case("HTTPServer"), "http-server");
        assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(to_kebab_case("APIKey"), "api-key");
        assert_eq!(to_kebab_case("UI"), "ui");
    }

    #[test]
    fn test_kebab_case_digits() {
        assert_eq!(to_kebab_case("Grid2Col"), "grid2-col");
        assert_eq!(to_kebab_case("H1Title"), "h1-title");
    }

    #[test]
    fn test_kebab_case_keeps_existing_separators() {
        assert_eq!(to_kebab_case("date-picker"), "date-picker");
        assert_eq!(to_kebab_case("Date_Picker"), "date_picker");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("MyComponent"), "myComponent");
        assert_eq!(to_camel_case("HTTPServer"), "hTTPServer");
        assert_eq!(to_camel_case("x"), "x");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_transform_import_name_strategies() {
        let name = "MyComponent";
        assert_eq!(transform_import_name(name, None), "MyComponent");
        assert_eq!(
            transform_import_name(name, Some(&TransformImportName::Lowercase)),
            "mycomponent"
        );
        assert_eq!(
            transform_import_name(name, Some(&TransformImportName::KebabCase)),
            "my-component"
        );
        assert_eq!(
            transform_import_name(name, Some(&TransformImportName::CamelCase)),
            "myComponent"
        );
        assert_eq!(
            transform_import_name(
                name,
                Some(&TransformImportName::Unrecognized("snake_case".to_string()))
            ),
            "MyComponent"
        );
    }

    #[test]
    fn test_transform_import_name_custom() {
        let custom = TransformImportName::custom(|n| format!("custom-{}", n.to_lowercase()));
        assert_eq!(transform_import_name("MyComponent", Some(&custom)), "custom-mycomponent");
    }

    proptest! {
        #[test]
        fn kebab_case_is_idempotent(name in "[A-Za-z_$][A-Za-z0-9_$]{0,24}") {
            let once = to_kebab_case(&name);
            prop_assert_eq!(to_kebab_case(&once), once);
        }

        #[test]
        fn lowercase_is_idempotent(name in "[A-Za-z_$][A-Za-z0-9_$]{0,24}") {
            let lower = TransformImportName::Lowercase;
            let once = transform_import_name(&name, Some(&lower));
            prop_assert_eq!(transform_import_name(&once, Some(&lower)), once);
        }

        #[test]
        fn kebab_case_has_no_uppercase(name in "[A-Za-z][A-Za-z0-9]{0,24}") {
            prop_assert!(!to_kebab_case(&name).chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
