use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::{fs, path::Path};

use crate::types::{ImportDeclarationNode, ModuleSource, Span, SpecifierKind, SpecifierNode};

/// Reads `file` and returns its top-level import declarations.
pub fn read_import_declarations(file: &Path) -> Result<(String, Vec<ImportDeclarationNode>)> {
    trace!("Reading file for imports: {}", file.display());
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let decls = import_declarations(file, &src)?;
    Ok((src, decls))
}

/// Parses `src` and returns every top-level `import ... from "..."` declaration.
///
/// `file` only determines the source type (TypeScript, JSX, module).
pub fn import_declarations(file: &Path, src: &str) -> Result<Vec<ImportDeclarationNode>> {
    let st = source_type_for(file);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } = OxcParser::new(&allocator, src, st).parse();

    if panicked {
        return Err(anyhow!("Failed to parse {}: {} errors", file.display(), errors.len()));
    }
    if !errors.is_empty() {
        debug!("Recovered from {} parse errors in {}", errors.len(), file.display());
    }

    let mut decls = Vec::new();
    for stmt in &program.body {
        if let Statement::ImportDeclaration(decl) = stmt {
            trace!("Found import declaration: '{}' in {}", decl.source.value, file.display());
            decls.push(to_node(decl));
        }
    }

    debug!("Found {} import declarations in {}", decls.len(), file.display());
    Ok(decls)
}

fn to_node(decl: &ImportDeclaration) -> ImportDeclarationNode {
    let specifiers = decl
        .specifiers
        .as_ref()
        .map(|specs| specs.iter().map(to_specifier).collect())
        .unwrap_or_default();

    ImportDeclarationNode {
        span: Span::new(decl.span.start, decl.span.end),
        source: ModuleSource::Literal(decl.source.value.to_string()),
        specifiers,
        is_type_only: decl.import_kind.is_type(),
    }
}

fn to_specifier(spec: &ImportDeclarationSpecifier) -> SpecifierNode {
    match spec {
        ImportDeclarationSpecifier::ImportSpecifier(s) => SpecifierNode {
            kind: SpecifierKind::Named,
            imported_name: s.imported.name().to_string(),
            local_name: s.local.name.to_string(),
            is_type: s.import_kind.is_type(),
        },
        ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
            SpecifierNode::default(s.local.name.as_str())
        }
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
            SpecifierNode::namespace(s.local.name.as_str())
        }
    }
}

fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    // Import declarations only parse as module code
    SourceType::default()
        .with_module(true)
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")))
}
