//! Ingestion source discovery.
//!
//! Turns the sources listed in `config/ingestion_list.yaml` into the concrete
//! files waiting to be ingested.

pub mod discovery;

pub use discovery::{discover_source, discover_sources, DiscoveredFile};
