//! Builds the direct import statements that replace a barrel import.

use debarrel_core::{ImportDeclarationNode, SpecifierKind};
use log::trace;

use crate::{
    matcher::match_named_export_suffix,
    naming::transform_import_name,
    options::{BarrelPattern, IMPORT_NAME_PLACEHOLDER, NamedExportConfig},
};

/// A single named binding of a barrel import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    pub imported_name: String,
    pub local_alias: String,
    pub is_type_only: bool,
}

impl ImportSpecifier {
    pub fn new(imported_name: &str, local_alias: &str) -> Self {
        Self {
            imported_name: imported_name.to_string(),
            local_alias: local_alias.to_string(),
            is_type_only: false,
        }
    }

    pub fn type_only(mut self) -> Self {
        self.is_type_only = true;
        self
    }
}

fn fill(template: &str, name: &str) -> String {
    template.replacen(IMPORT_NAME_PLACEHOLDER, name, 1)
}

/// Module path for a binding that becomes a default import.
pub fn default_export_path(imported_name: &str, pattern: &BarrelPattern) -> String {
    let transformed = transform_import_name(imported_name, pattern.transform_import_name.as_ref());
    fill(&pattern.transform_pattern, &transformed)
}

/// Module path for a binding whose name ended with `suffix`.
pub fn named_export_path(
    imported_name: &str,
    suffix: &str,
    named_exports: &NamedExportConfig,
    pattern: &BarrelPattern,
) -> String {
    let base = match &named_exports.transform_import_name {
        Some(f) => f(imported_name, suffix),
        None => {
            let stripped = &imported_name[..imported_name.len() - suffix.len()];
            transform_import_name(stripped, pattern.transform_import_name.as_ref())
        }
    };

    let template = named_exports.custom_pattern.as_deref().unwrap_or(&pattern.transform_pattern);
    fill(template, &base)
}

/// Generates the replacement statement for one specifier.
pub fn generate_import_statement(specifier: &ImportSpecifier, pattern: &BarrelPattern) -> String {
    let type_prefix = if specifier.is_type_only { "type " } else { "" };
    let named_exports = pattern.named_exports.as_ref();

    let statement = match match_named_export_suffix(&specifier.imported_name, named_exports)
        .zip(named_exports)
    {
        Some((suffix, named_exports)) => {
            let path = named_export_path(&specifier.imported_name, suffix, named_exports, pattern);
            format!("import {}{{ {} }} from \"{}\";", type_prefix, specifier.local_alias, path)
        }
        None => {
            let path = default_export_path(&specifier.imported_name, pattern);
            format!("import {}{} from \"{}\";", type_prefix, specifier.local_alias, path)
        }
    };

    trace!("Rewrote '{}' to: {}", specifier.imported_name, statement);
    statement
}

/// Generates the full replacement text for a barrel import declaration.
///
/// Returns `None` when the declaration has no named specifiers. Default and
/// namespace specifiers on the same declaration are kept in a leading
/// statement against the original source.
pub fn generate_replacement(decl: &ImportDeclarationNode, pattern: &BarrelPattern) -> Option<String> {
    let named: Vec<ImportSpecifier> = decl
        .specifiers
        .iter()
        .filter(|s| s.kind == SpecifierKind::Named)
        .map(|s| ImportSpecifier {
            imported_name: s.imported_name.clone(),
            local_alias: s.local_name.clone(),
            is_type_only: decl.is_type_only || s.is_type,
        })
        .collect();

    if named.is_empty() {
        return None;
    }

    let mut statements = Vec::with_capacity(named.len() + 1);
    if let Some(residual) = residual_statement(decl, &pattern.barrel) {
        statements.push(residual);
    }
    statements.extend(named.iter().map(|s| generate_import_statement(s, pattern)));

    Some(statements.join("\n"))
}

fn residual_statement(decl: &ImportDeclarationNode, source: &str) -> Option<String> {
    let clauses: Vec<String> = decl
        .specifiers
        .iter()
        .filter_map(|s| match s.kind {
            SpecifierKind::Default => Some(s.local_name.clone()),
            SpecifierKind::Namespace => Some(format!("* as {}", s.local_name)),
            SpecifierKind::Named => None,
        })
        .collect();

    if clauses.is_empty() {
        return None;
    }

    let type_prefix = if decl.is_type_only { "type " } else { "" };
    Some(format!("import {}{} from \"{}\";", type_prefix, clauses.join(", "), source))
}
