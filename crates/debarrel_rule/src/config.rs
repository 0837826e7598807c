use anyhow::{Result, anyhow};
use clap::Parser;
use debarrel_core::{find_git_root, find_options_file};
use log::{debug, info};
use std::path::PathBuf;

use crate::options::RuleOptions;

#[derive(Debug, Clone, Parser)]
#[command(name = "check")]
#[command(about = "Find barrel imports and rewrite them into direct imports")]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Rule options file (defaults to .debarrelrc.json in the root)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only lint files whose path relative to the root contains this string
    #[arg(long)]
    pub entry_glob: Option<String>,

    /// Rewrite barrel imports in place
    #[arg(long)]
    pub fix: bool,

    /// Options supplied programmatically take precedence over the options file
    #[clap(skip)]
    pub options: Option<RuleOptions>,
}

impl Config {
    /// Resolve the root directory and load rule options
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, searching for git root");
            find_git_root()?
        };
        info!("Using root directory: {}", root.display());

        if self.options.is_none() {
            let path = find_options_file(&root, self.config.as_deref())?;
            info!("Using options file: {}", path.display());
            self.options = Some(RuleOptions::load(&path)?);
        } else {
            debug!("Using programmatic rule options");
        }

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    pub fn options(&self) -> Result<&RuleOptions> {
        self.options
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn bare(root: PathBuf) -> Config {
        Config { root: Some(root), config: None, entry_glob: None, fix: false, options: None }
    }

    #[test]
    fn test_initialize_loads_default_options_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".debarrelrc.json"),
            r#"{"patterns": [{"barrel": "@lib", "transformPattern": "@lib/{{importName}}"}]}"#,
        )
        .unwrap();

        let mut cfg = bare(temp_dir.path().to_path_buf());
        cfg.initialize().unwrap();
        assert_eq!(cfg.options().unwrap().patterns[0].barrel, "@lib");
        assert!(cfg.root().unwrap().is_absolute());
    }

    #[test]
    fn test_initialize_prefers_programmatic_options() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = bare(temp_dir.path().to_path_buf());
        cfg.options = Some(RuleOptions::new(vec![crate::options::BarrelPattern::new(
            "@ui",
            "@ui/{{importName}}",
        )]));

        cfg.initialize().unwrap();
        assert_eq!(cfg.options().unwrap().patterns[0].barrel, "@ui");
    }

    #[test]
    fn test_initialize_without_options_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = bare(temp_dir.path().to_path_buf());
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_uninitialized_accessors_fail() {
        let cfg =
            Config { root: None, config: None, entry_glob: None, fix: false, options: None };
        assert!(cfg.root().is_err());
        assert!(cfg.options().is_err());
    }

    #[test]
    fn test_parse_cli_flags() {
        let cfg = Config::parse_from([
            "check",
            "--root",
            "/tmp/project",
            "--config",
            "debarrel.json",
            "--entry-glob",
            "src/",
            "--fix",
        ]);
        assert_eq!(cfg.root, Some(PathBuf::from("/tmp/project")));
        assert_eq!(cfg.config, Some(PathBuf::from("debarrel.json")));
        assert_eq!(cfg.entry_glob.as_deref(), Some("src/"));
        assert!(cfg.fix);
        assert!(cfg.options.is_none());
    }
}
