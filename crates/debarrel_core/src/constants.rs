//! Constants for file discovery.
//!
//! - **TypeScript**: `.ts`, `.tsx`, `.mts` (ES module), `.cts` (CommonJS)
//! - **JavaScript**: `.js`, `.jsx`, `.mjs` (ES module), `.cjs` (CommonJS)

/// File extensions for JavaScript/TypeScript files that should be linted
pub const JS_TS_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
    "mjs", // JavaScript module
    "cjs", // JavaScript CommonJS
];

/// Options file looked up at the project root when `--config` is not given
pub const DEFAULT_OPTIONS_FILE: &str = ".debarrelrc.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_ts_extensions_includes_all_variants() {
        for ext in ["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"] {
            assert!(JS_TS_EXTENSIONS.contains(&ext), "missing '{}'", ext);
        }
        assert_eq!(JS_TS_EXTENSIONS.len(), 8);
    }

    #[test]
    fn test_default_options_file_is_hidden_json() {
        assert!(DEFAULT_OPTIONS_FILE.starts_with('.'));
        assert!(DEFAULT_OPTIONS_FILE.ends_with(".json"));
    }
}
