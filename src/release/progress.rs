//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, CI logs, tests) to receive
//! progress updates while a release runs.

use crate::error::Error;
use crate::types::{FormulaDescriptor, PullRequest};
use async_trait::async_trait;
use std::fmt;

/// Release phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolving the upstream tag
    Resolving,
    /// Cloning the tap and setting commit identity
    Staging,
    /// Creating the release branch
    Branching,
    /// Downloading archives and rendering formulas
    Generating,
    /// Committing and pushing
    Publishing,
    /// Opening the pull request
    OpeningPr,
    /// Release complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Resolving => "Resolving tag",
            Self::Staging => "Cloning tap",
            Self::Branching => "Creating branch",
            Self::Generating => "Generating formulas",
            Self::Publishing => "Pushing",
            Self::OpeningPr => "Opening pull request",
            Self::Complete => "Done",
        };
        f.write_str(label)
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the tag is known
    async fn on_tag_resolved(&self, tag: &str);

    /// Called after a formula file is written
    async fn on_formula_written(&self, formula: &FormulaDescriptor);

    /// Called when the PR is created
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called when a stage fails, before the error propagates
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_tag_resolved(&self, _tag: &str) {}
    async fn on_formula_written(&self, _formula: &FormulaDescriptor) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
