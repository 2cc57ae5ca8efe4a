//! # sp-protocol
//!
//! Shared constants and configuration models for the sales reporting pipeline.
//!
//! This crate defines:
//! - The central constant set (project metadata, file defaults, config paths)
//! - Serde models for every configuration file under `config/`
//!
//! ## Modules
//!
//! - [`constants`]: Project-wide constants
//! - [`connection_models`]: `config/connections.yaml`
//! - [`mapping_models`]: `config/mappings/model_map.json`
//! - [`date_models`]: `config/mappings/date_rules.json`
//! - [`retailer_models`]: `config/mappings/retailers.json`
//! - [`ingestion_models`]: `config/ingestion_list.yaml`
//!
//! ## Design Principles
//!
//! - No I/O: reading files belongs to `sp-core`
//! - Independent compilation: No dependencies on other workspace crates

pub mod connection_models;
pub mod constants;
pub mod date_models;
pub mod ingestion_models;
pub mod mapping_models;
pub mod retailer_models;

// Re-export all public types for convenience
pub use connection_models::*;
pub use date_models::*;
pub use ingestion_models::*;
pub use mapping_models::*;
pub use retailer_models::*;
