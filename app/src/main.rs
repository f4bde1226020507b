#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{CommandStrategy, InfoStrategy, InitStrategy, RunStrategy, VersionStrategy};

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Interactive in-memory contact book", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    Run,
    /// Create ~/phonebook/config.json with default settings
    Init,
    /// Show the effective configuration
    Info,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    // stdout belongs to the session; logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => RunStrategy.execute(()),
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
