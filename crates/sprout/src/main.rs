//! Sprout CLI - scaffold a new project from a template repository
//!
//! This is the main entry point for the Sprout command-line interface.

mod cli;
mod commands;
mod output;
mod progress;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands, NewArgs};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    let config_path = cli.config.as_deref();

    // Run command; bare `sprout` behaves like `sprout new`
    let result = match cli.command {
        Some(Commands::New(args)) => commands::new::run(args, config_path).await,
        Some(Commands::Config(cmd)) => commands::config::run(cmd, config_path),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        None => commands::new::run(NewArgs::default(), config_path).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Step failures were printed where they happened
            if commands::is_reported(&err) {
                tracing::debug!("{:#}", err);
            } else {
                output::error(&format!("{:#}", err));
            }
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Spinners carry progress by default; -v/-vv for step logs
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
