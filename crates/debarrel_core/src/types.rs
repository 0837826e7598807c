/// Byte range of a node in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn source_text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start as usize..self.end as usize]
    }
}

/// The module source of an import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleSource {
    Literal(String),
    /// Anything that is not a plain string literal.
    NonString,
}

impl ModuleSource {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            ModuleSource::Literal(s) => Some(s),
            ModuleSource::NonString => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// `import Foo from "x"`
    Default,
    /// `import { Foo as Bar } from "x"`
    Named,
    /// `import * as Foo from "x"`
    Namespace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierNode {
    pub kind: SpecifierKind,
    /// Exported name on the source module. `default` for default specifiers
    /// and `*` for namespace specifiers.
    pub imported_name: String,
    pub local_name: String,
    /// Inline `type` modifier (`import { type Foo } from "x"`)
    pub is_type: bool,
}

impl SpecifierNode {
    pub fn named(imported: &str, local: &str) -> Self {
        Self {
            kind: SpecifierKind::Named,
            imported_name: imported.to_string(),
            local_name: local.to_string(),
            is_type: false,
        }
    }

    pub fn default(local: &str) -> Self {
        Self {
            kind: SpecifierKind::Default,
            imported_name: "default".to_string(),
            local_name: local.to_string(),
            is_type: false,
        }
    }

    pub fn namespace(local: &str) -> Self {
        Self {
            kind: SpecifierKind::Namespace,
            imported_name: "*".to_string(),
            local_name: local.to_string(),
            is_type: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclarationNode {
    pub span: Span,
    pub source: ModuleSource,
    pub specifiers: Vec<SpecifierNode>,
    /// `import type { ... } from "x"`
    pub is_type_only: bool,
}
