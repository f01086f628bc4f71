//! tap-release - Homebrew tap release automation
//!
//! CLI binary that publishes versioned formulas for the latest upstream tag.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tap_release::config::{LOG_LEVEL, log_filter};
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "tap-release")]
#[command(about = "Publish versioned Homebrew formulas for the latest upstream tag")]
#[command(version)]
struct Cli {
    /// Directory the tap is cloned into (defaults to current directory)
    #[arg(short, long, global = true)]
    workdir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate formulas for the latest tag and open a PR (default)
    Release {
        /// Dry run - resolve the tag and show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the benchmark report
    Report {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

fn init_tracing() {
    let level = env::var(LOG_LEVEL).ok();
    let filter = EnvFilter::new(log_filter(level.as_deref()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let path = cli.workdir.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        None => cli::run_release(&path, false).await?,
        Some(Commands::Release { dry_run }) => cli::run_release(&path, dry_run).await?,
        Some(Commands::Report { json }) => cli::run_report(json)?,
        Some(Commands::Auth { action }) => {
            let action = match action {
                AuthCommand::Test => cli::AuthAction::Test,
                AuthCommand::Setup => cli::AuthAction::Setup,
            };
            cli::run_auth(action).await?;
        }
    }

    Ok(())
}
