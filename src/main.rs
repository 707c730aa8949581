use clap::Parser;
use srccat::Cli;
use srccat::handlers::{handle_init_config, run_normal_mode};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "srccat=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Handle config initialization
    if cli.init {
        return handle_init_config(&cli);
    }

    run_normal_mode(&cli)
}
