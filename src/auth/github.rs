//! GitHub authentication

use crate::auth::AuthSource;
use crate::config::{GITHUB_ACCESS_TOKEN, require};
use crate::error::{Error, Result};
use crate::process::CommandRunner;
use std::env;
use std::path::Path;

/// GitHub authentication configuration
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Get GitHub authentication
///
/// Priority:
/// 1. `GITHUB_ACCESS_TOKEN` environment variable
/// 2. gh CLI (`gh auth token`)
pub async fn get_github_auth(runner: &dyn CommandRunner) -> Result<GitHubAuthConfig> {
    get_github_auth_with(|name| env::var(name).ok(), runner).await
}

async fn get_github_auth_with(
    lookup: impl Fn(&str) -> Option<String> + Send,
    runner: &dyn CommandRunner,
) -> Result<GitHubAuthConfig> {
    if let Ok(token) = require(lookup, GITHUB_ACCESS_TOKEN) {
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        });
    }

    if let Some(token) = get_gh_cli_token(runner).await {
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(format!(
        "No GitHub authentication found. Set {GITHUB_ACCESS_TOKEN} or run `gh auth login`"
    )))
}

async fn get_gh_cli_token(runner: &dyn CommandRunner) -> Option<String> {
    let output = runner
        .run_checked("gh", &["auth", "token"], Path::new("."))
        .await
        .ok()?;

    let token = output.stdout.trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

/// Test GitHub authentication, returning the login of the token's user
pub async fn test_github_auth(config: &GitHubAuthConfig) -> Result<String> {
    let octocrab = octocrab::Octocrab::builder()
        .personal_token(config.token.clone())
        .build()
        .map_err(|e| Error::GitHubApi(e.to_string()))?;

    let user = octocrab
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

    Ok(user.login)
}
