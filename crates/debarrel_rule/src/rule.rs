use debarrel_core::{ImportDeclarationNode, Span, SpecifierKind};
use log::{debug, trace};
use std::collections::HashMap;

use crate::{
    generator::generate_replacement,
    matcher::match_barrel,
    options::RuleOptions,
    schema::{META, RuleMeta, rule_schema},
};

pub const MESSAGE: &str = "Barrel imports should be transformed into direct imports";

/// Replace the text covered by `span` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub span: Span,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub message: &'static str,
    pub fix: Option<Fix>,
}

/// Collects what handlers report for a single file.
#[derive(Debug, Default)]
pub struct RuleContext {
    diagnostics: Vec<Diagnostic>,
}

impl RuleContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ImportDeclaration,
}

#[derive(Debug, Clone, Copy)]
pub enum Node<'n> {
    ImportDeclaration(&'n ImportDeclarationNode),
}

impl Node<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::ImportDeclaration(_) => NodeKind::ImportDeclaration,
        }
    }
}

pub type Handler<'r> = Box<dyn Fn(&Node<'_>, &mut RuleContext) + Send + Sync + 'r>;

/// Handlers keyed by the node kind they want to see.
#[derive(Default)]
pub struct Visitors<'r> {
    handlers: HashMap<NodeKind, Vec<Handler<'r>>>,
}

impl<'r> Visitors<'r> {
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    pub fn on(mut self, kind: NodeKind, handler: Handler<'r>) -> Self {
        self.handlers.entry(kind).or_default().push(handler);
        self
    }

    pub fn dispatch(&self, node: &Node<'_>, ctx: &mut RuleContext) {
        if let Some(handlers) = self.handlers.get(&node.kind()) {
            for handler in handlers {
                handler(node, ctx);
            }
        }
    }
}

/// The `debarrel` rule bound to its options for one lint run.
#[derive(Debug, Clone)]
pub struct DebarrelRule {
    options: RuleOptions,
}

impl DebarrelRule {
    pub fn new(options: RuleOptions) -> Self {
        Self { options }
    }

    pub fn meta() -> RuleMeta {
        META
    }

    pub fn schema() -> serde_json::Value {
        rule_schema()
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    pub fn create(&self) -> Visitors<'_> {
        Visitors::new().on(
            NodeKind::ImportDeclaration,
            Box::new(move |node: &Node<'_>, ctx: &mut RuleContext| match node {
                Node::ImportDeclaration(decl) => self.check_import_declaration(decl, ctx),
            }),
        )
    }

    fn check_import_declaration(&self, decl: &ImportDeclarationNode, ctx: &mut RuleContext) {
        let Some(source) = decl.source.as_literal() else {
            trace!("Skipping import with non-string source");
            return;
        };

        let Some(pattern) = match_barrel(source, &self.options.patterns) else {
            return;
        };

        if !decl.specifiers.iter().any(|s| s.kind == SpecifierKind::Named) {
            trace!("Import from '{}' has no named specifiers", source);
            return;
        }

        let fix = generate_replacement(decl, pattern)
            .map(|replacement| Fix { span: decl.span, replacement });

        debug!("Barrel import from '{}' at {}..{}", source, decl.span.start, decl.span.end);
        ctx.report(Diagnostic { span: decl.span, message: MESSAGE, fix });
    }
}
