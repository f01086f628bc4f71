//! Auth command - test and explain authentication

use crate::cli::style::{Stylize, check};
use anstream::println;
use tap_release::auth::{get_github_auth, test_github_auth};
use tap_release::config::GITHUB_ACCESS_TOKEN;
use tap_release::error::Result;
use tap_release::process::TokioCommandRunner;

/// Auth subcommand action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Verify the token against the API
    Test,
    /// Print setup instructions
    Setup,
}

/// Run the auth test command
async fn run_auth_test() -> Result<()> {
    println!("{}", "Testing GitHub authentication...".muted());
    let config = get_github_auth(&TokioCommandRunner).await?;
    let username = test_github_auth(&config).await?;
    println!("{} Authenticated as: {}", check(), username.accent());
    println!("  Token source: {:?}", config.source);
    Ok(())
}

/// Run the auth setup command (show instructions)
fn run_auth_setup() {
    println!("{}", "GitHub Authentication Setup".emphasis());
    println!("===========================");
    println!();
    println!("Option 1: Environment variable (used by releases)");
    println!("  Set {GITHUB_ACCESS_TOKEN} to a token with repo scope");
    println!();
    println!("Option 2: GitHub CLI (auth test only)");
    println!("  Install: https://cli.github.com/");
    println!("  Run: gh auth login");
}

/// Wrapper for auth commands
pub async fn run_auth(action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Test => run_auth_test().await,
        AuthAction::Setup => {
            run_auth_setup();
            Ok(())
        }
    }
}
