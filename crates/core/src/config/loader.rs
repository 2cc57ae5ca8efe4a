//! Configuration file loader for the `config/` directory structure.
//!
//! This module provides functionality to load and parse all configuration files
//! of a project, at the locations defined in [`sp_protocol::constants`]:
//! - `config/connections.yaml`: Named connections
//! - `config/mappings/*.json`: Model map, date rules and retailers
//! - `config/ingestion_list.yaml`: Sources to ingest

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use serde::de::DeserializeOwned;
use sp_protocol::constants::PATH_CONNECTIONS;
use sp_protocol::constants::PATH_DATE_RULES;
use sp_protocol::constants::PATH_INGESTION_LIST;
use sp_protocol::constants::PATH_MODEL_MAP;
use sp_protocol::constants::PATH_RETAILERS;
use std::path::Path;
use tracing::debug;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            Some("json") => Some(Format::Json),
            _ => None,
        }
    }
}

/// Loads all configuration below `root`.
///
/// # Arguments
///
/// * `root` - Project root containing the `config/` folder
///
/// # Returns
///
/// An `AppConfig` containing all loaded configuration. If `config/` or any of
/// the files are missing, the corresponding part is left empty rather than
/// reported as an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - `root` itself is not an existing directory
/// - Files exist but cannot be read
/// - Files have invalid YAML or JSON syntax
/// - Required fields are missing in configuration files
///
/// # Example
///
/// ```rust,no_run
/// use sp_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} retailers", config.retailers.retailers.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    if !root.is_dir() {
        return Err(ConfigError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let config = AppConfig {
        root: root.to_path_buf(),
        connections: load_config_file(root, PATH_CONNECTIONS)?,
        model_map: load_config_file(root, PATH_MODEL_MAP)?,
        date_rules: load_config_file(root, PATH_DATE_RULES)?,
        retailers: load_config_file(root, PATH_RETAILERS)?,
        ingestion: load_config_file(root, PATH_INGESTION_LIST)?,
    };

    debug!(
        root = %root.display(),
        connections = config.connections.connections.len(),
        mappings = config.model_map.mappings.len(),
        retailers = config.retailers.retailers.len(),
        sources = config.ingestion.sources.len(),
        "configuration loaded"
    );

    Ok(config)
}

/// Loads a single configuration file at `relative` below `root`.
///
/// The format is chosen by extension: `.yaml`/`.yml` as YAML, `.json` as JSON.
/// A missing file yields `T::default()`.
pub fn load_config_file<T>(root: &Path, relative: &str) -> ConfigResult<T>
where
    T: DeserializeOwned + Default,
{
    let path = root.join(relative);

    let format = Format::from_path(&path)
        .ok_or_else(|| ConfigError::UnsupportedFormat { path: path.clone() })?;

    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
        path: path.clone(),
        source,
    })?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    // An empty YAML document would deserialize as unit, not as a mapping
    if content.trim().is_empty() {
        return Ok(T::default());
    }

    match format {
        Format::Yaml => {
            serde_yaml::from_str(content).map_err(|source| ConfigError::YamlParse { path, source })
        }
        Format::Json => {
            serde_json::from_str(content).map_err(|source| ConfigError::JsonParse { path, source })
        }
    }
}
