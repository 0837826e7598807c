//! The `debarrel` lint rule.
//!
//! Barrel imports pull named bindings from a module that only re-exports
//! them. This crate rewrites each such import into one direct import per
//! binding, following user-configured path patterns.
//!
//! # Examples
//!
//! ## Rewriting a single file
//!
//! ```
//! use debarrel_rule::{BarrelPattern, DebarrelRule, RuleOptions, TransformImportName, fix_source};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let rule = DebarrelRule::new(RuleOptions::new(vec![
//!     BarrelPattern::new("@cloudscape-design/components", "@cloudscape-design/components/{{importName}}")
//!         .transform(TransformImportName::KebabCase),
//! ]));
//!
//! let fixed = fix_source(
//!     &rule,
//!     Path::new("app.tsx"),
//!     r#"import { DatePicker } from "@cloudscape-design/components";"#,
//! )?;
//! assert_eq!(fixed, r#"import DatePicker from "@cloudscape-design/components/date-picker";"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Checking a project
//!
//! ```no_run
//! use debarrel_rule::{Config, run_debarrel_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     config: None,
//!     entry_glob: None,
//!     fix: false,
//!     options: None,
//! };
//!
//! let result = run_debarrel_check(cfg.clone())?;
//!
//! if !result.warnings.is_empty() {
//!     let mut stdout = BufWriter::new(std::io::stdout());
//!     debarrel_rule::print_warnings_tree(&mut stdout, &result.warnings, &cfg)?;
//!     stdout.flush()?;
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod fixer;
mod generator;
mod matcher;
mod naming;
mod options;
mod reporter;
mod rule;
mod schema;
mod types;

// Re-export public API
pub use checker::{fix_source, lint_source, run_debarrel_check};
pub use config::Config;
pub use fixer::apply_fixes;
pub use generator::{
    ImportSpecifier, default_export_path, generate_import_statement, generate_replacement,
    named_export_path,
};
pub use matcher::{match_barrel, match_named_export_suffix};
pub use naming::{to_camel_case, to_kebab_case, transform_import_name};
pub use options::{
    BarrelPattern, IMPORT_NAME_PLACEHOLDER, NameFn, NamedExportConfig, RuleOptions, SuffixNameFn,
    TransformImportName,
};
pub use reporter::{print_no_barrels_message, print_warnings_tree};
pub use rule::{
    DebarrelRule, Diagnostic, Fix, Handler, MESSAGE, Node, NodeKind, RuleContext, Visitors,
};
pub use schema::{Fixable, RULE_NAME, RuleMeta, RuleType, rule_schema};
pub use types::{CheckResult, Warning};
