use anyhow::{Result, anyhow};
use log::{debug, trace};
use path_clean::clean;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::constants::DEFAULT_OPTIONS_FILE;

pub fn find_git_root() -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = env::current_dir()?;
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!("Could not find .git directory in any parent folder"));
            }
        }
    }
}

/// Locates the rule options file.
///
/// An explicit path wins (relative paths are taken from `root`). Otherwise
/// `.debarrelrc.json` at the root is used when it exists.
pub fn find_options_file(root: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            clean(root.join(path).to_string_lossy().to_string()).into()
        };
        debug!("Using options file: {:?}", path);
        if !path.is_file() {
            return Err(anyhow!("Options file not found: {}", path.display()));
        }
        return Ok(path);
    }

    let candidate = root.join(DEFAULT_OPTIONS_FILE);
    trace!("Checking for options file at: {:?}", candidate);
    if candidate.is_file() {
        debug!("Found options file at: {:?}", candidate);
        Ok(candidate)
    } else {
        Err(anyhow!(
            "No {} found in {} (pass --config to point at one)",
            DEFAULT_OPTIONS_FILE,
            root.display()
        ))
    }
}
