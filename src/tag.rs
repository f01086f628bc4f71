//! Upstream version tag resolution
//!
//! The selected tag is the *last* `MAJOR.MINOR.PATCH` match in the order the
//! remote lists its refs, not the highest version. Tags created out of order
//! therefore resolve to whatever git lists last.

use crate::error::{Error, Result};
use crate::git::ls_remote_tags;
use crate::process::CommandRunner;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+").expect("hardcoded version pattern is valid"));

/// Pick the last version-looking substring of a tag listing
pub fn select_tag(listing: &str) -> Result<String> {
    VERSION_RE
        .find_iter(listing)
        .last()
        .map(|m| m.as_str().to_string())
        .ok_or(Error::NoTagFound)
}

/// Query `url` for tags and select one
pub async fn resolve_tag(runner: &dyn CommandRunner, url: &str, cwd: &Path) -> Result<String> {
    let listing = ls_remote_tags(runner, url, cwd).await?;
    let tag = select_tag(&listing)?;
    info!(tag, "resolved upstream tag");
    Ok(tag)
}
