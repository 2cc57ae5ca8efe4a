//! Configuration models that aggregate all settings.
//!
//! This module provides the unified `AppConfig` structure that combines the
//! five configuration files into a single object, together with the project
//! root they were read from.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::validate::validate;
use crate::config::validate::Severity;
use sp_protocol::ConnectionsConfig;
use sp_protocol::DateRules;
use sp_protocol::IngestionList;
use sp_protocol::ModelMap;
use sp_protocol::RetailerRegistry;
use std::path::Path;
use std::path::PathBuf;

/// Unified application configuration loaded from a project root.
///
/// This structure aggregates all configuration sources:
/// - `config/connections.yaml`: Named connections
/// - `config/mappings/model_map.json`: Product to model mappings
/// - `config/mappings/date_rules.json`: Date parsing rules
/// - `config/mappings/retailers.json`: Retailer registry
/// - `config/ingestion_list.yaml`: Sources to ingest
///
/// # Example
///
/// ```rust,no_run
/// use sp_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} connections and {} sources",
///          config.connections.connections.len(),
///          config.ingestion.sources.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Project root that configuration paths were resolved against.
    pub root: PathBuf,

    pub connections: ConnectionsConfig,

    pub model_map: ModelMap,

    pub date_rules: DateRules,

    pub retailers: RetailerRegistry,

    pub ingestion: IngestionList,
}

impl AppConfig {
    /// An empty configuration rooted at `root`.
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Self::default()
        }
    }

    /// Resolves a path relative to the project root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Fails with the first error-level validation issue, if any.
    ///
    /// Warnings are not considered failures.
    pub fn ensure_valid(&self) -> ConfigResult<()> {
        match validate(self)
            .into_iter()
            .find(|issue| issue.severity == Severity::Error)
        {
            Some(issue) => Err(ConfigError::InvalidConfig {
                path: self.resolve(issue.file),
                reason: issue.message,
            }),
            None => Ok(()),
        }
    }
}
