//! Release planning
//!
//! Resolves the tag and derives every name the release will use, without
//! touching the tap repository.

use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::formula::{FormulaTarget, formula_targets};
use crate::process::CommandRunner;
use crate::tag::resolve_tag;
use std::fmt::Write;
use std::path::PathBuf;

/// Configuration plus the directory the tap is cloned into
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    /// Loaded configuration
    pub config: ReleaseConfig,
    /// Directory that receives the clone
    pub workdir: PathBuf,
}

impl ReleaseContext {
    /// Create a context
    pub fn new(config: ReleaseConfig, workdir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            workdir: workdir.into(),
        }
    }

    /// Path of the tap checkout
    pub fn checkout_dir(&self) -> PathBuf {
        self.workdir.join(&self.config.target_repo.name)
    }
}

/// Everything a release will do, derived from the resolved tag
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    /// Resolved upstream tag
    pub tag: String,
    /// Release branch
    pub branch: String,
    /// Formulas to generate
    pub formulas: Vec<FormulaTarget>,
    /// Commit message
    pub commit_message: String,
    /// PR title
    pub pr_title: String,
    /// PR body
    pub pr_body: String,
}

/// Release branch name (`release_1.3.0`)
pub fn branch_name(prefix: &str, tag: &str) -> String {
    format!("{prefix}_{tag}")
}

impl ReleasePlan {
    /// Derive a plan for `tag`
    pub fn for_tag(ctx: &ReleaseContext, tag: &str) -> Self {
        let template_dir = ctx.checkout_dir().join(&ctx.config.template_dir);

        Self {
            tag: tag.to_string(),
            branch: branch_name(&ctx.config.branch_prefix, tag),
            formulas: formula_targets(tag, &ctx.config.upstream_repo, &template_dir),
            commit_message: format!("Add formulas for Tuist {tag}"),
            pr_title: format!("Tuist {tag}"),
            pr_body: format!("Bump Tuist formulas to version {tag}."),
        }
    }
}

/// Resolve the upstream tag and plan the release
pub async fn create_release_plan(
    ctx: &ReleaseContext,
    runner: &dyn CommandRunner,
) -> Result<ReleasePlan> {
    let tag = resolve_tag(runner, &ctx.config.upstream_repo.https_url(), &ctx.workdir).await?;
    Ok(ReleasePlan::for_tag(ctx, &tag))
}

/// Describe what executing `plan` would do, one step per line
pub fn render_dry_run(plan: &ReleasePlan, ctx: &ReleaseContext) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Would clone {} into {}",
        ctx.config.target_repo,
        ctx.checkout_dir().display()
    );
    let _ = writeln!(out, "Would create branch {}", plan.branch);
    let _ = writeln!(out, "Would write:");
    for target in &plan.formulas {
        let _ = writeln!(
            out,
            "  - {} ({}) from {}",
            target.output, target.symbol, target.url
        );
    }
    let _ = writeln!(out, "Would commit: {}", plan.commit_message);
    let _ = writeln!(
        out,
        "Would open PR \"{}\" against the default branch",
        plan.pr_title
    );

    out
}
