//! Configuration loading and management.
//!
//! This module loads the five configuration files named in
//! [`sp_protocol::constants`] and checks them against each other.

pub mod error;
pub mod loader;
pub mod models;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, load_config_file};
pub use models::AppConfig;
pub use validate::{validate, Severity, ValidationIssue};
