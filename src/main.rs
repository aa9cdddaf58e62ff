//! vsw - VSCode theme switcher
//!
//! Thin binary entry point that delegates to the command handlers in `cli`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use vsw::startup::StartupContext;
use vsw_core::cli::Cli;
use vsw_core::ui::{DialoguerPrompter, styled};

mod cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    args.color.write_global();
    initialize_tracing(&args);

    let Some(command) = args.command.as_ref() else {
        Cli::command()
            .print_help()
            .context("Failed to print help")?;
        println!();
        return Ok(());
    };

    let startup = StartupContext::from_cli_args(&args)?;
    let manager = startup.theme_manager()?;

    // Command failures are reported as a single line and do not change the exit status.
    if let Err(err) = cli::dispatch(&manager, &DialoguerPrompter, command) {
        tracing::debug!(error = ?err, "command failed");
        styled::error(&format!("{}: {err:#}", cli::failure_context(command)));
    }

    Ok(())
}

fn initialize_tracing(args: &Cli) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG takes precedence over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.verbose {
            EnvFilter::new("warn,vsw=debug,vsw_core=debug,vsw_config=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
