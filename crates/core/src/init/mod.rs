//! Initialization module for scaffolding a project's `config/` directory.
//!
//! This module writes default versions of every configuration file to the
//! locations defined in [`sp_protocol::constants`].
//!
//! # Example
//!
//! ```no_run
//! use sp_core::init::{InitOptions, generate_project_structure};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//!     minimal: false,
//! };
//!
//! let written = generate_project_structure(options).await?;
//! println!("Wrote {} config files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{generate_project_structure, InitOptions};
pub use templates::get_template;
