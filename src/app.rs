//! Application orchestrator.
//! Loads/merges config, initializes logging, obtains and validates the folder,
//! and runs the organizer with a tracing-backed event sink.

use anyhow::{bail, Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io;
use std::path::PathBuf;
use tracing::{debug, error, info};

use file_organizer::cli::{sanitize_str, Args};
use file_organizer::config::{default_config_path, load_or_init, LoadResult};
use file_organizer::logging::init_tracing;
use file_organizer::output as out;
use file_organizer::{OrganizeOptions, Organizer, TracingSink};

/// Ask for the folder. Piped stdin is read as a single line without a prompt.
fn prompt_for_folder() -> Result<PathBuf> {
    if atty::isnt(atty::Stream::Stdin) {
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("read folder path from stdin")?;
        return Ok(sanitize_str(&line));
    }
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the path to the folder you want to organize")
        .interact_text()
        .context("read folder path from terminal")?;
    Ok(sanitize_str(&raw))
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        match args.config.clone().or_else(default_config_path) {
            Some(p) => {
                out::print_info(&format!("Config file:\n  {}", p.display()));
                if !p.exists() {
                    out::print_info("No config file exists there yet; one is written on the next run.");
                }
            }
            None => out::print_error("Could not determine a config file location."),
        }
        return Ok(());
    }

    let loaded = load_or_init(args.config.as_deref())?;
    let created = match &loaded {
        LoadResult::CreatedTemplate { path, .. } => Some(path.clone()),
        _ => None,
    };
    let mut cfg = loaded.into_config();
    args.apply_overrides(&mut cfg);

    // Held until the end of run(); dropping it flushes the log file.
    let guard = init_tracing(&cfg.log_level, cfg.log_file_spec().as_ref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    out::print_banner();
    if let Some(path) = created {
        out::print_info(&format!("A template config was written to: {}", path.display()));
    }
    debug!(config = ?cfg, "Starting file_organizer");

    let result = (|| -> Result<()> {
        let source = match args.source() {
            Some(p) => p,
            None => prompt_for_folder()?,
        };
        if !source.is_dir() {
            bail!("The specified path is not a valid directory: {}", source.display());
        }

        let organizer = Organizer::local(OrganizeOptions {
            dry_run: cfg.dry_run,
        });
        match organizer.run(&source, &mut TracingSink) {
            Ok(report) => {
                info!(
                    moved = report.moved(),
                    skipped = report.skipped(),
                    would_move = report.would_move(),
                    "File organization completed."
                );
                out::print_success("File organization completed. Check the logs for details.");
                Ok(())
            }
            Err(e) => {
                error!(kind = e.kind(), entry = e.entry().unwrap_or("-"), "File organization aborted");
                Err(e.into())
            }
        }
    })();

    drop(guard);
    result
}
