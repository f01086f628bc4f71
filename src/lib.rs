//! tap-release - Homebrew tap release automation
//!
//! Resolves the latest upstream version tag, renders versioned formulas from
//! templates into a tap repository, and opens a pull request on GitHub.
//! Also hosts the fixed benchmark report used by the `report` command.

pub mod auth;
pub mod config;
pub mod error;
pub mod forge;
pub mod formula;
pub mod git;
pub mod process;
pub mod release;
pub mod report;
pub mod tag;
pub mod types;
