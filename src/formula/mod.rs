//! Versioned Homebrew formula generation
//!
//! Each built-in [`FormulaSpec`] names a release asset and a template. For a
//! tag, the asset is downloaded, hashed, and the template is rendered to
//! `<name>@<tag>.rb` in the tap checkout.

mod archive;
mod template;

pub use archive::{ARCHIVE_FILE, download_archive, http_client, sha256_file};
pub use template::{FORMULA_TOKEN, SHA_TOKEN, URL_TOKEN, render_formula, replace_token};

use crate::error::Result;
use crate::types::{FormulaDescriptor, RepoSlug};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::info;

/// Static recipe for one formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaSpec {
    /// Formula base name, e.g. `tuist`
    pub name: &'static str,
    /// Release asset file name
    pub asset: &'static str,
    /// Template file name inside the template directory
    pub template: &'static str,
}

/// Formulas published for every release
pub const FORMULAS: [FormulaSpec; 2] = [
    FormulaSpec {
        name: "tuist",
        asset: "tuist.zip",
        template: "tuist.rb",
    },
    FormulaSpec {
        name: "tuistenv",
        asset: "tuistenv.zip",
        template: "tuistenv.rb",
    },
];

impl FormulaSpec {
    /// Versioned formula file name (`tuist@1.3.0.rb`)
    pub fn output_name(&self, tag: &str) -> String {
        format!("{}@{tag}.rb", self.name)
    }

    /// Homebrew class name for the versioned formula (`TuistAT130`)
    pub fn symbol(&self, tag: &str) -> String {
        let mut chars = self.name.chars();
        let capitalized: String = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{capitalized}AT{}", tag.replace('.', ""))
    }
}

/// Release archive URL for an asset
pub fn release_url(upstream: &RepoSlug, tag: &str, asset: &str) -> String {
    format!("https://github.com/{upstream}/releases/download/{tag}/{asset}")
}

/// A formula to produce for a specific tag, before its archive is hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaTarget {
    /// Recipe this target was built from
    pub spec: FormulaSpec,
    /// Template path
    pub template: PathBuf,
    /// Output file name
    pub output: String,
    /// Formula class name
    pub symbol: String,
    /// Archive URL
    pub url: String,
}

impl FormulaTarget {
    /// Build the target for `spec` at `tag`
    pub fn new(spec: FormulaSpec, tag: &str, upstream: &RepoSlug, template_dir: &Path) -> Self {
        Self {
            spec,
            template: template_dir.join(spec.template),
            output: spec.output_name(tag),
            symbol: spec.symbol(tag),
            url: release_url(upstream, tag, spec.asset),
        }
    }

    /// Attach a checksum, producing the full descriptor
    pub fn describe(&self, sha256: String) -> FormulaDescriptor {
        FormulaDescriptor {
            template: self.template.clone(),
            output: self.output.clone(),
            symbol: self.symbol.clone(),
            sha256,
            url: self.url.clone(),
        }
    }
}

/// Targets for every built-in formula
pub fn formula_targets(tag: &str, upstream: &RepoSlug, template_dir: &Path) -> Vec<FormulaTarget> {
    FORMULAS
        .iter()
        .map(|spec| FormulaTarget::new(*spec, tag, upstream, template_dir))
        .collect()
}

/// Download, hash and render one target into `dir`
///
/// The archive is written to [`ARCHIVE_FILE`] in `dir`, replacing any
/// previous download.
pub async fn generate_formula(
    client: &Client,
    target: &FormulaTarget,
    dir: &Path,
) -> Result<FormulaDescriptor> {
    let archive = dir.join(ARCHIVE_FILE);
    download_archive(client, &target.url, &archive).await?;
    let sha256 = sha256_file(&archive).await?;

    let descriptor = target.describe(sha256);
    render_formula(&descriptor, dir).await?;
    info!(output = %descriptor.output, sha256 = %descriptor.sha256, "formula written");
    Ok(descriptor)
}
