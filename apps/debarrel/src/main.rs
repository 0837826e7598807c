use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use debarrel_rule::{Config, DebarrelRule};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "debarrel")]
#[command(about = "Rewrite barrel imports into direct imports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report barrel imports in JavaScript/TypeScript projects (and fix them with --fix)
    Check(Config),
    /// Print the JSON schema of the rule options
    Schema,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    match cli.command {
        Commands::Check(mut cfg) => {
            let start = Instant::now();
            let num_threads = rayon::current_num_threads();
            info!("Running debarrel check (fix: {}, using {} threads)", cfg.fix, num_threads);
            debug!(
                "Config: root={:?}, config={:?}, entry_glob={:?}",
                cfg.root, cfg.config, cfg.entry_glob
            );

            // Initialized here too so the reporter can relativize paths
            cfg.initialize()?;
            let result = debarrel_rule::run_debarrel_check(cfg.clone())?;
            debug!("Found {} warnings", result.warnings.len());

            if result.warnings.is_empty() {
                debarrel_rule::print_no_barrels_message(&mut stdout, result.files_analyzed)?;
            } else {
                debarrel_rule::print_warnings_tree(&mut stdout, &result.warnings, &cfg)?;
            }

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files (using {} threads).",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan(),
                result.files_analyzed.to_string().cyan(),
                num_threads.to_string().cyan()
            )?;
            stdout.flush()?;

            if result.unfixed() > 0 {
                // Non-zero exit to fail CI
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Schema => {
            info!("Printing options schema for '{}'", DebarrelRule::meta().name);
            serde_json::to_writer_pretty(&mut stdout, &DebarrelRule::schema())?;
            writeln!(stdout)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
