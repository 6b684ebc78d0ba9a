//! openprs CLI - Alfred Script Filter for open pull requests
//!
//! Lists every open pull request in a GitHub organization, oldest first.
//! Script Filter JSON goes to stdout; logs go to stderr.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use openprs_core::{ScriptFilterSink, Workflow};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ListArgs;

/// List an organization's open pull requests in Alfred
#[derive(Parser, Debug)]
#[command(name = "openprs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    list: ListArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// List open pull requests as Script Filter JSON (the default)
    #[command(visible_alias = "ls")]
    List,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout belongs to Alfred
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "info" } else { "warn" }));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        tracing::info!(
            organization = ?cli.list.organization,
            endpoint = %cli.list.endpoint,
            "Verbose mode enabled"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("openprs {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some(Commands::Config) => {
            commands::config::show(&cli.list);
            ExitCode::SUCCESS
        }
        Some(Commands::List) | None => {
            let mut workflow = Workflow::new(ScriptFilterSink::stdout());
            let result = cli.list.execute(&mut workflow).await;
            if commands::list::finish(&mut workflow, result) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
