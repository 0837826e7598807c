//! Core utilities for debarrel.
//!
//! This crate provides the host side of the `debarrel` lint rule:
//! - Parsing import declarations from JS/TS files into a plain node view
//! - Collecting source files from a project
//! - Configuration utilities (git root finding, options file lookup)

mod collector;
mod config;
mod constants;
mod parser;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_files};
pub use config::{find_git_root, find_options_file};
pub use constants::{DEFAULT_OPTIONS_FILE, JS_TS_EXTENSIONS};
pub use parser::{import_declarations, read_import_declarations};
pub use types::{ImportDeclarationNode, ModuleSource, Span, SpecifierKind, SpecifierNode};
