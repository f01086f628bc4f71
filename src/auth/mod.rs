//! GitHub authentication
//!
//! The release pipeline always takes its token from `GITHUB_ACCESS_TOKEN`;
//! `auth test` additionally falls back to the gh CLI.

mod github;

pub use github::{GitHubAuthConfig, get_github_auth, test_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from environment variable
    EnvVar,
    /// Token from the gh CLI
    Cli,
}
