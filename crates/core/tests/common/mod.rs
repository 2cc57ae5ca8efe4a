//! Common test utilities and helpers for E2E tests.
//!
//! This module provides shared functionality across all E2E tests including:
//! - Test fixtures (sample projects, config files, drop directories)
//! - Custom assertions over validation results

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use fixtures::*;
