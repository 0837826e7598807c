use anyhow::{Context, Result, anyhow};
use debarrel_core::{CollectorConfig, collect_files, import_declarations};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    thread,
};

use crate::{
    config::Config,
    fixer::apply_fixes,
    rule::{DebarrelRule, Diagnostic, Node, RuleContext},
    types::{CheckResult, Warning},
};

/// Runs the rule over every import declaration in `source`.
pub fn lint_source(rule: &DebarrelRule, path: &Path, source: &str) -> Result<Vec<Diagnostic>> {
    let decls = import_declarations(path, source)?;
    let visitors = rule.create();
    let mut ctx = RuleContext::new();
    for decl in &decls {
        visitors.dispatch(&Node::ImportDeclaration(decl), &mut ctx);
    }
    let diagnostics = ctx.into_diagnostics();
    trace!("{} diagnostics in {}", diagnostics.len(), path.display());
    Ok(diagnostics)
}

/// Lints `source` and returns it with every available fix applied.
pub fn fix_source(rule: &DebarrelRule, path: &Path, source: &str) -> Result<String> {
    let fixes: Vec<_> =
        lint_source(rule, path, source)?.into_iter().filter_map(|d| d.fix).collect();
    Ok(apply_fixes(source, &fixes))
}

/// 1-based line and character column of a byte offset.
pub(crate) fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let before = &source[..offset as usize];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

struct FileOutcome {
    warnings: Vec<Warning>,
    fixed: bool,
}

fn check_file(rule: &DebarrelRule, root: &Path, file: &Path, fix: bool) -> Result<FileOutcome> {
    let source =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let diagnostics = lint_source(rule, file, &source)?;

    let rel_file = file.strip_prefix(root).unwrap_or(file).to_string_lossy().to_string();

    let mut fixed = false;
    if fix && diagnostics.iter().any(|d| d.fix.is_some()) {
        let fixes: Vec<_> = diagnostics.iter().filter_map(|d| d.fix.clone()).collect();
        let output = apply_fixes(&source, &fixes);
        match fs::write(file, output) {
            Ok(()) => {
                debug!("Applied {} fixes to {}", fixes.len(), file.display());
                fixed = true;
            }
            Err(e) => warn!("Failed to write fixes to {}: {}", file.display(), e),
        }
    }

    let warnings = diagnostics
        .into_iter()
        .map(|d| {
            let (line, column) = line_col(&source, d.span.start);
            Warning {
                import_statement: d.span.source_text(&source).to_string(),
                from_file: rel_file.clone(),
                line,
                column,
                message: d.message,
                fixed: fixed && d.fix.is_some(),
                replacement: d.fix.map(|f| f.replacement),
            }
        })
        .collect();

    Ok(FileOutcome { warnings, fixed })
}

pub fn run_debarrel_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting debarrel check");

    cfg.initialize()?;
    let root: PathBuf = cfg.root()?.clone();
    let rule = DebarrelRule::new(cfg.options()?.clone());
    info!("Loaded {} barrel patterns", rule.options().patterns.len());

    debug!("Collecting files with glob: {:?}", cfg.entry_glob);
    let collector_cfg =
        CollectorConfig { root: root.clone(), entry_glob: cfg.entry_glob.clone() };
    let files = collect_files(&collector_cfg)?;
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
        return Err(anyhow!("No source files found under {}", root.display()));
    }
    info!("Linting {} files in parallel", files.len());

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .filter_map(|file| {
            let thread_id = thread::current().id();
            trace!("Thread {:?} processing: {}", thread_id, file.display());
            match check_file(&rule, &root, file, cfg.fix) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    warn!("Skipping {}: {:#}", file.display(), e);
                    None
                }
            }
        })
        .collect();

    let files_analyzed = outcomes.len();
    let files_fixed = outcomes.iter().filter(|o| o.fixed).count();
    let warnings: Vec<Warning> = outcomes.into_iter().flat_map(|o| o.warnings).collect();

    info!(
        "Debarrel check complete. Found {} barrel imports in {} files ({} files fixed)",
        warnings.len(),
        files_analyzed,
        files_fixed
    );

    Ok(CheckResult { warnings, files_analyzed, files_fixed })
}
