//! # sp-core
//!
//! Configuration handling for the sales reporting pipeline.
//!
//! This crate provides:
//! - Configuration loading from the `config/` directory
//! - Cross-file validation of the loaded configuration
//! - Discovery of the files each ingestion source points at
//! - Scaffolding of a default `config/` directory
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and validation
//! - [`ingest`]: Ingestion source discovery
//! - [`init`]: Project initialization from embedded templates

pub mod config;
pub mod ingest;
pub mod init;
