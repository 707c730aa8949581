//! Aggregation mode handlers.

use crate::aggregator::Aggregator;
use crate::cli::Cli;
use crate::config::{AggregateConfig, Config};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

/// Run the normal aggregation mode.
pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    let config = Config::load(Some(Path::new(".")));
    let effective = AggregateConfig::resolve(cli, &config);
    info!(roots = ?effective.roots, output = %effective.output.display(), "Starting aggregation");

    match Aggregator::new(effective.clone()).run() {
        Ok(summary) => {
            debug!(
                files = summary.files_written,
                bytes = summary.content_bytes,
                "Aggregation completed"
            );
            println!("Aggregated code saved to {}", effective.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// Handle `--init`: write a config template.
pub fn handle_init_config(cli: &Cli) -> ExitCode {
    let target = cli
        .roots
        .first()
        .cloned()
        .unwrap_or_else(|| Path::new(".").to_path_buf());
    let output_path = if target.is_dir() {
        target.join(".srccat.yaml")
    } else {
        target
    };

    if output_path.exists() {
        eprintln!(
            "Error: Configuration file already exists at {}",
            output_path.display()
        );
        eprintln!("Remove it first or specify a different path.");
        return ExitCode::from(2);
    }

    let template = Config::generate_template();

    match fs::write(&output_path, &template) {
        Ok(()) => {
            println!(
                "Created configuration file template at {}",
                output_path.display()
            );
            println!("\nYou can customize this file to:");
            println!("  - Set the root directories to search");
            println!("  - Change the output file path");
            println!("  - Adjust the accepted filename suffixes");
            println!("  - Override the header prefix");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: Failed to write configuration file: {}", e);
            ExitCode::from(2)
        }
    }
}
