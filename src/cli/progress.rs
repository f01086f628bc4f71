//! CLI progress callback with styled output

use crate::cli::style::{Stream, Stylize, arrow, check, hyperlink_url};
use anstream::println;
use async_trait::async_trait;
use tap_release::error::Error;
use tap_release::release::{Phase, ProgressCallback};
use tap_release::types::{FormulaDescriptor, PullRequest};
use tracing::debug;

/// CLI progress callback that prints to stdout with styled output
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => println!("{} {}", check(), phase.to_string().success()),
            _ => println!("{} {}...", arrow(), phase.to_string().emphasis()),
        }
    }

    async fn on_tag_resolved(&self, tag: &str) {
        println!("  {} Latest tag: {}", check(), tag.accent());
    }

    async fn on_formula_written(&self, formula: &FormulaDescriptor) {
        println!(
            "  {} Wrote {} {}",
            check(),
            formula.output.emphasis(),
            format!("(sha256 {})", formula.sha256).muted()
        );
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        let pr_num = format!("#{}", pr.number);
        println!(
            "  {} Opened PR {} {} → {}",
            check(),
            pr_num.accent(),
            pr.head_ref.emphasis(),
            pr.base_ref.emphasis()
        );
        println!("    {}", hyperlink_url(Stream::Stdout, &pr.html_url));
    }

    // main reports the returned error
    async fn on_error(&self, err: &Error) {
        debug!(error = %err, "release failed");
    }

    async fn on_message(&self, message: &str) {
        println!("  {}", message.muted());
    }
}
