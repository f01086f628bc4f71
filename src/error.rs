//! Error types for tap-release

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the release pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is unset or empty
    #[error("missing required environment variable: {0}")]
    MissingEnv(String),

    /// Input could not be parsed (repository slug, remote URL, ...)
    #[error("parse error: {0}")]
    Parse(String),

    /// No `MAJOR.MINOR.PATCH` tag in the remote listing
    #[error("no tag found")]
    NoTagFound,

    /// An external command exited unsuccessfully
    #[error("`{command}` failed with exit code {code}: {stderr}")]
    Command {
        /// Rendered command line (credentials redacted)
        command: String,
        /// Exit code, -1 when terminated by a signal
        code: i32,
        /// Trimmed stderr output
        stderr: String,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport or status error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Authentication failure
    #[error("authentication failed: {0}")]
    Auth(String),

    /// An open pull request for the branch already exists
    #[error("pull request already open for {branch}: {url}")]
    PullRequestExists {
        /// Head branch
        branch: String,
        /// URL of the existing PR
        url: String,
    },

    /// Internal invariant violation
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_display() {
        let err = Error::Command {
            command: "git push -u origin release_1.3.0".to_string(),
            code: 1,
            stderr: "rejected".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`git push -u origin release_1.3.0` failed with exit code 1: rejected"
        );
    }

    #[test]
    fn test_missing_env_names_variable() {
        let err = Error::MissingEnv("GITHUB_ACCESS_TOKEN".to_string());
        assert!(err.to_string().contains("GITHUB_ACCESS_TOKEN"));
    }
}
