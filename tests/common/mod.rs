//! Shared test utilities

pub mod fixtures;
pub mod mock_forge;
pub mod mock_runner;
