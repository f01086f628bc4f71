//! Release configuration loaded from the environment
//!
//! Everything the pipeline needs is read once into a [`ReleaseConfig`] and
//! passed down explicitly; no stage reads the environment on its own.
//! `LOG_LEVEL` is the exception: the binary sets up tracing from it through
//! [`log_filter`] before any configuration is loaded.

use crate::error::{Error, Result};
use crate::types::RepoSlug;
use std::env;
use std::path::PathBuf;

/// Tap repository to clone and open the PR against (`owner/name`)
pub const TARGET_REPO_NAME: &str = "TARGET_REPO_NAME";
/// Token used for pushing and for the GitHub API
pub const GITHUB_ACCESS_TOKEN: &str = "GITHUB_ACCESS_TOKEN";
/// Prefix of the release branch
pub const RELEASE_BRANCH_PREFIX: &str = "RELEASE_BRANCH_PREFIX";
/// Committer email
pub const TUIST_GIT_EMAIL: &str = "TUIST_GIT_EMAIL";
/// Committer name
pub const GITHUB_REPOSITORY_OWNER: &str = "GITHUB_REPOSITORY_OWNER";
/// Tracing filter level
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Repository whose tags and release assets are published
pub const UPSTREAM_REPO_NAME: &str = "UPSTREAM_REPO_NAME";
/// Template directory, relative to the cloned tap unless absolute
pub const FORMULA_TEMPLATE_DIR: &str = "FORMULA_TEMPLATE_DIR";

/// Default branch prefix
pub const DEFAULT_BRANCH_PREFIX: &str = "release";
/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
/// Default upstream repository
pub const DEFAULT_UPSTREAM_REPO: &str = "tuist/tuist";
/// Default template directory
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Release configuration
#[derive(Clone)]
pub struct ReleaseConfig {
    /// Tap repository
    pub target_repo: RepoSlug,
    /// Access token
    pub token: String,
    /// Branch prefix (`{prefix}_{tag}`)
    pub branch_prefix: String,
    /// Committer email, may be empty
    pub git_email: String,
    /// Committer name, may be empty
    pub git_name: String,
    /// Upstream repository for tags and release archives
    pub upstream_repo: RepoSlug,
    /// Template directory
    pub template_dir: PathBuf,
}

impl std::fmt::Debug for ReleaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseConfig")
            .field("target_repo", &self.target_repo)
            .field("token", &"<redacted>")
            .field("branch_prefix", &self.branch_prefix)
            .field("git_email", &self.git_email)
            .field("git_name", &self.git_name)
            .field("upstream_repo", &self.upstream_repo)
            .field("template_dir", &self.template_dir)
            .finish()
    }
}

impl ReleaseConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    ///
    /// Required variables are checked first, so a missing one fails before
    /// anything else is parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let target = require(&lookup, TARGET_REPO_NAME)?;
        let token = require(&lookup, GITHUB_ACCESS_TOKEN)?;

        let optional = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            target_repo: RepoSlug::parse(&target)?,
            token,
            branch_prefix: optional(RELEASE_BRANCH_PREFIX, DEFAULT_BRANCH_PREFIX),
            git_email: optional(TUIST_GIT_EMAIL, ""),
            git_name: optional(GITHUB_REPOSITORY_OWNER, ""),
            upstream_repo: RepoSlug::parse(&optional(UPSTREAM_REPO_NAME, DEFAULT_UPSTREAM_REPO))?,
            template_dir: PathBuf::from(optional(FORMULA_TEMPLATE_DIR, DEFAULT_TEMPLATE_DIR)),
        })
    }
}

/// Read a required variable, treating an empty value as unset
pub fn require(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::MissingEnv(name.to_string()))
}

/// `LOG_LEVEL` as a tracing filter directive (`INFO` -> `info`)
///
/// Accepts both tracing and Python logging level names. Anything else maps
/// to `info`, since `EnvFilter` would read an unknown word as a target.
pub fn log_filter(level: Option<&str>) -> &'static str {
    let level = level.map(str::trim).filter(|l| !l.is_empty());
    match level.unwrap_or(DEFAULT_LOG_LEVEL).to_ascii_uppercase().as_str() {
        "TRACE" | "NOTSET" => "trace",
        "DEBUG" => "debug",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" | "FATAL" => "error",
        "OFF" => "off",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = ReleaseConfig::from_lookup(lookup_from(&[
            (TARGET_REPO_NAME, "tuist/homebrew-tuist"),
            (GITHUB_ACCESS_TOKEN, "token"),
        ]))
        .unwrap();

        assert_eq!(config.branch_prefix, "release");
        assert_eq!(config.git_email, "");
        assert_eq!(config.git_name, "");
        assert_eq!(config.upstream_repo.to_string(), "tuist/tuist");
        assert_eq!(config.template_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_optional_overrides() {
        let config = ReleaseConfig::from_lookup(lookup_from(&[
            (TARGET_REPO_NAME, "tuist/homebrew-tuist"),
            (GITHUB_ACCESS_TOKEN, "token"),
            (RELEASE_BRANCH_PREFIX, "bump"),
            (TUIST_GIT_EMAIL, "bot@tuist.io"),
            (GITHUB_REPOSITORY_OWNER, "tuist"),
        ]))
        .unwrap();

        assert_eq!(config.branch_prefix, "bump");
        assert_eq!(config.git_email, "bot@tuist.io");
        assert_eq!(config.git_name, "tuist");
    }

    #[test]
    fn test_missing_target_repo() {
        let err = ReleaseConfig::from_lookup(lookup_from(&[(GITHUB_ACCESS_TOKEN, "token")]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingEnv(ref name) if name == TARGET_REPO_NAME));
    }

    #[test]
    fn test_empty_token_is_missing() {
        let err = ReleaseConfig::from_lookup(lookup_from(&[
            (TARGET_REPO_NAME, "tuist/homebrew-tuist"),
            (GITHUB_ACCESS_TOKEN, ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::MissingEnv(ref name) if name == GITHUB_ACCESS_TOKEN));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ReleaseConfig::from_lookup(lookup_from(&[
            (TARGET_REPO_NAME, "tuist/homebrew-tuist"),
            (GITHUB_ACCESS_TOKEN, "ghp_secret"),
        ]))
        .unwrap();
        assert!(!format!("{config:?}").contains("ghp_secret"));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(None), "info");
        assert_eq!(log_filter(Some("")), "info");
        assert_eq!(log_filter(Some("DEBUG")), "debug");
        assert_eq!(log_filter(Some("warn")), "warn");
    }

    #[test]
    fn test_log_filter_python_level_names() {
        assert_eq!(log_filter(Some("WARNING")), "warn");
        assert_eq!(log_filter(Some("CRITICAL")), "error");
        assert_eq!(log_filter(Some("verbose")), "info");
    }

    #[test]
    fn test_log_filter_never_disables_errors() {
        use tracing::Level;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::{EnvFilter, Registry};

        for level in ["WARNING", "CRITICAL", "verbose"] {
            let filter = EnvFilter::new(log_filter(Some(level)));
            let subscriber = Registry::default().with(filter);
            let enabled = tracing::subscriber::with_default(subscriber, || {
                tracing::enabled!(Level::ERROR)
            });
            assert!(enabled, "{level} disabled error events");
        }
    }
}
