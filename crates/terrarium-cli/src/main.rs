//! `terra` -- CLI binary for the terrarium environment framework.
//!
//! Provides the following subcommands:
//!
//! - `terra route` -- Dispatch a single command string and print the result.
//! - `terra repl` -- Interactive line-oriented command loop.
//! - `terra envs` -- List registered environments and their commands.
//! - `terra status` -- Show resolved configuration and diagnostics.

use clap::Parser;

mod commands;

/// terrarium environment CLI.
#[derive(Parser)]
#[command(name = "terra", about = "terrarium agent environment CLI", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Dispatch a single command string, e.g. `terra route "wallet tokens"`.
    Route(commands::route::RouteArgs),

    /// Start an interactive command loop.
    Repl(commands::repl::ReplArgs),

    /// List registered environments and their documented commands.
    Envs(commands::envs::EnvsArgs),

    /// Show resolved configuration status.
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match cli.command {
        Commands::Route(args) => commands::route::run(args).await,
        Commands::Repl(args) => commands::repl::run(args).await,
        Commands::Envs(args) => commands::envs::run(args),
        Commands::Status(args) => commands::status::run(args),
    }
}
