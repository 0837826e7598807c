use anyhow::{Context, Result, anyhow};
use log::{debug, warn};
use serde::Deserialize;
use std::{fmt, fs, path::Path, sync::Arc};

/// Placeholder substituted by the computed module name in path templates.
pub const IMPORT_NAME_PLACEHOLDER: &str = "{{importName}}";

/// User-supplied name transform for default-export paths.
pub type NameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// User-supplied transform for suffix-matched names: `(imported_name, suffix)`.
pub type SuffixNameFn = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// How an imported name is turned into the module name inside a path template.
#[derive(Clone, Deserialize)]
#[serde(from = "String")]
pub enum TransformImportName {
    Lowercase,
    KebabCase,
    CamelCase,
    Custom(NameFn),
    /// A token this version does not know. Behaves as the identity transform.
    Unrecognized(String),
}

impl TransformImportName {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        TransformImportName::Custom(Arc::new(f))
    }
}

impl From<String> for TransformImportName {
    fn from(token: String) -> Self {
        match token.as_str() {
            "lowercase" => TransformImportName::Lowercase,
            "kebab-case" => TransformImportName::KebabCase,
            "camelCase" => TransformImportName::CamelCase,
            _ => TransformImportName::Unrecognized(token),
        }
    }
}

impl fmt::Debug for TransformImportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformImportName::Lowercase => f.write_str("Lowercase"),
            TransformImportName::KebabCase => f.write_str("KebabCase"),
            TransformImportName::CamelCase => f.write_str("CamelCase"),
            TransformImportName::Custom(_) => f.write_str("Custom(<fn>)"),
            TransformImportName::Unrecognized(token) => {
                f.debug_tuple("Unrecognized").field(token).finish()
            }
        }
    }
}

/// Which imported names stay named (bracketed) imports in the rewrite.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NamedExportConfig {
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub custom_pattern: Option<String>,
    #[serde(skip)]
    pub transform_import_name: Option<SuffixNameFn>,
}

impl NamedExportConfig {
    pub fn with_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { suffixes: suffixes.into_iter().map(Into::into).collect(), ..Default::default() }
    }

    pub fn custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_pattern = Some(pattern.into());
        self
    }

    pub fn transform_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.transform_import_name = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for NamedExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedExportConfig")
            .field("suffixes", &self.suffixes)
            .field("custom_pattern", &self.custom_pattern)
            .field("transform_import_name", &self.transform_import_name.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// One barrel module and how its bindings map to direct paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BarrelPattern {
    pub barrel: String,
    pub transform_pattern: String,
    #[serde(default)]
    pub transform_import_name: Option<TransformImportName>,
    #[serde(default)]
    pub named_exports: Option<NamedExportConfig>,
}

impl BarrelPattern {
    pub fn new(barrel: impl Into<String>, transform_pattern: impl Into<String>) -> Self {
        Self {
            barrel: barrel.into(),
            transform_pattern: transform_pattern.into(),
            transform_import_name: None,
            named_exports: None,
        }
    }

    pub fn transform(mut self, transform: TransformImportName) -> Self {
        self.transform_import_name = Some(transform);
        self
    }

    pub fn named_exports(mut self, named_exports: NamedExportConfig) -> Self {
        self.named_exports = Some(named_exports);
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleOptions {
    pub patterns: Vec<BarrelPattern>,
}

impl RuleOptions {
    pub fn new(patterns: Vec<BarrelPattern>) -> Self {
        Self { patterns }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let options: RuleOptions =
            serde_json::from_str(json).context("Invalid debarrel options")?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading debarrel options from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let options = Self::from_json(&content)
            .with_context(|| format!("Failed to load options from {}", path.display()))?;
        debug!("Loaded {} barrel patterns", options.patterns.len());
        Ok(options)
    }

    fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(anyhow!("`patterns` must contain at least one barrel pattern"));
        }
        for pattern in &self.patterns {
            if !pattern.transform_pattern.contains(IMPORT_NAME_PLACEHOLDER) {
                warn!(
                    "transformPattern for '{}' has no {} placeholder; every import will map to '{}'",
                    pattern.barrel, IMPORT_NAME_PLACEHOLDER, pattern.transform_pattern
                );
            }
            if let Some(TransformImportName::Unrecognized(token)) = &pattern.transform_import_name
            {
                warn!(
                    "Unknown transformImportName '{}' for '{}', names are left unchanged",
                    token, pattern.barrel
                );
            }
        }
        Ok(())
    }
}
