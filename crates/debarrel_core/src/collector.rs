use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::PathBuf;

use crate::constants::JS_TS_EXTENSIONS;

pub struct CollectorConfig {
    pub root: PathBuf,
    pub entry_glob: Option<String>,
}

/// Collects every JS/TS source file under the root, honoring `.gitignore`.
pub fn collect_files(cfg: &CollectorConfig) -> Result<Vec<PathBuf>> {
    debug!("Collecting source files");
    let mut files: Vec<PathBuf> = Vec::new();
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root).hidden(false).ignore(true).git_ignore(true).build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let Some(ext) = p.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !JS_TS_EXTENSIONS.contains(&ext) {
            continue;
        }

        if p.components().any(|c| c.as_os_str() == "node_modules") {
            trace!("Skipping dependency file: {}", p.display());
            continue;
        }

        // If entry_glob is set, the relative path from root must contain it
        if let Some(gl) = &cfg.entry_glob {
            match p.strip_prefix(root) {
                Ok(rel_path) if rel_path.to_string_lossy().contains(gl.as_str()) => {
                    trace!("Matched file with glob '{}': {}", gl, rel_path.display());
                }
                _ => continue,
            }
        }

        trace!("Found source file: {}", p.display());
        files.push(p.to_path_buf());
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    Ok(files)
}
