use std::{
    collections::BTreeMap,
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;
use log::{debug, trace};

use crate::{config::Config, types::Warning};

/// Relativize a path to the current working directory for clickable links
fn relativize_to_cwd(root: &Path, relative_to_root: &str) -> String {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => {
            debug!("Failed to get current directory");
            return relative_to_root.to_string();
        }
    };
    trace!("Relativizing '{}' from root {:?} to cwd {:?}", relative_to_root, root, cwd);

    let abs_path = root.join(relative_to_root);
    match make_relative(&abs_path, &cwd) {
        Some(rel_path) => rel_path.to_string_lossy().to_string(),
        None => relative_to_root.to_string(),
    }
}

/// Create a relative path from `base` to `target`
fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    use std::path::Component;

    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = target_parts.iter().zip(&base_parts).take_while(|(t, b)| t == b).count();
    if common == 0 {
        return None;
    }

    let mut result = PathBuf::new();
    for _ in &base_parts[common..] {
        result.push("..");
    }
    for component in &target_parts[common..] {
        match component {
            Component::Normal(p) => result.push(p),
            Component::ParentDir => result.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}

/// Collapse a possibly multi-line statement onto one line
fn one_line(statement: &str) -> String {
    statement.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn print_no_barrels_message<W: Write>(writer: &mut W, files_analyzed: usize) -> io::Result<()> {
    debug!("No barrel imports found");
    writeln!(
        writer,
        "{} No barrel imports found in {} files.",
        "✓".green().bold(),
        files_analyzed.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_warnings_tree<W: Write>(
    writer: &mut W,
    warnings: &[Warning],
    cfg: &Config,
) -> io::Result<()> {
    debug!("Printing warnings tree for {} warnings", warnings.len());
    let mut by_file: BTreeMap<&str, Vec<&Warning>> = BTreeMap::new();
    for w in warnings {
        by_file.entry(w.from_file.as_str()).or_default().push(w);
    }
    debug!("Grouped warnings into {} files", by_file.len());

    writeln!(writer, "{} Barrel imports detected\n", "⚠".yellow().bold())?;

    for (file, mut file_warnings) in by_file {
        file_warnings.sort_by_key(|w| (w.line, w.column));
        trace!("Processing file: {} with {} warnings", file, file_warnings.len());

        let display_path = match &cfg.root {
            Some(root) => relativize_to_cwd(root, file),
            None => file.to_string(),
        };
        writeln!(writer, "{}", display_path.bright_white().bold())?;

        for (idx, warning) in file_warnings.iter().enumerate() {
            let is_last = idx == file_warnings.len() - 1;
            let (prefix, indent) = if is_last { ("└──", "   ") } else { ("├──", "│  ") };
            let status = if warning.fixed { "fixed".green() } else { "barrel".yellow() };

            writeln!(
                writer,
                "{}  {}:{} {} {}",
                prefix.dimmed(),
                warning.line.to_string().cyan(),
                warning.column.to_string().cyan(),
                status,
                one_line(&warning.import_statement)
            )?;

            if let Some(replacement) = &warning.replacement {
                for line in replacement.lines() {
                    writeln!(writer, "{}     {} {}", indent.dimmed(), "→".dimmed(), line.green())?;
                }
            }
        }

        writeln!(writer)?;
    }

    print_summary(writer, warnings)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, warnings: &[Warning]) -> io::Result<()> {
    let total = warnings.len();
    let fixed = warnings.iter().filter(|w| w.fixed).count();

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Barrel imports: {}", total.to_string().yellow().bold())?;
    if fixed > 0 {
        writeln!(writer, "  Fixed: {}", fixed.to_string().green().bold())?;
    }
    if fixed < total {
        writeln!(writer, "  Run with {} to rewrite them.", "--fix".bold())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(file: &str, line: usize, fixed: bool) -> Warning {
        Warning {
            import_statement: "import {\n  Button,\n} from '@lib';".to_string(),
            from_file: file.to_string(),
            line,
            column: 1,
            message: "Barrel imports should be transformed into direct imports",
            replacement: Some("import Button from \"@lib/button\";".to_string()),
            fixed,
        }
    }

    fn render(warnings: &[Warning]) -> String {
        colored::control::set_override(false);
        let cfg = Config { root: None, config: None, entry_glob: None, fix: false, options: None };
        let mut out = Vec::new();
        print_warnings_tree(&mut out, warnings, &cfg).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_make_relative_same_dir() {
        let result = make_relative(Path::new("/project/src/file.ts"), Path::new("/project/src"));
        assert_eq!(result, Some(PathBuf::from("file.ts")));
    }

    #[test]
    fn test_make_relative_parent_dir() {
        let result =
            make_relative(Path::new("/project/src/file.ts"), Path::new("/project/src/components"));
        assert_eq!(result, Some(PathBuf::from("../file.ts")));
    }

    #[test]
    fn test_make_relative_sibling_dir() {
        let result =
            make_relative(Path::new("/project/apps/web/index.ts"), Path::new("/project/apps/api"));
        assert_eq!(result, Some(PathBuf::from("../web/index.ts")));
    }

    #[test]
    fn test_make_relative_same_path() {
        let result = make_relative(Path::new("/project/src"), Path::new("/project/src"));
        assert_eq!(result, Some(PathBuf::from(".")));
    }

    #[test]
    fn test_one_line() {
        assert_eq!(one_line("import {\n  A,\n  B,\n} from 'x';"), "import { A, B, } from 'x';");
    }

    #[test]
    fn test_tree_groups_by_file() {
        let out = render(&[warning("src/b.ts", 3, false), warning("src/a.ts", 1, false)]);
        let a = out.find("src/a.ts").unwrap();
        let b = out.find("src/b.ts").unwrap();
        assert!(a < b);
        assert!(out.contains("1:1 barrel import { Button, } from '@lib';"));
        assert!(out.contains("→ import Button from \"@lib/button\";"));
        assert!(out.contains("Barrel imports: 2"));
        assert!(out.contains("--fix"));
    }

    #[test]
    fn test_tree_marks_fixed() {
        let out = render(&[warning("src/a.ts", 1, true)]);
        assert!(out.contains("fixed"));
        assert!(out.contains("Fixed: 1"));
        assert!(!out.contains("--fix"));
    }

    #[test]
    fn test_no_barrels_message() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_no_barrels_message(&mut out, 12).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No barrel imports found in 12 files."));
    }
}
