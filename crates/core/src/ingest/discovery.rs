//! Finds the files each enabled ingestion source points at.
//!
//! Only `local` connections can be listed from here. Remote connections are
//! skipped with a log line.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use serde::Serialize;
use sp_protocol::Connection;
use sp_protocol::IngestionSource;
use std::path::Path;
use std::path::PathBuf;
use tracing::info;
use tracing::warn;
use walkdir::WalkDir;

/// A file found below an ingestion source's location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredFile {
    /// Name of the ingestion source the file belongs to.
    pub source: String,

    /// Retailer as written in the ingestion list.
    pub retailer: String,

    /// Code of the retailer `retailer` resolves to. Model map and date rule
    /// lookups take this code.
    pub retailer_code: String,

    pub path: PathBuf,

    /// Worksheet to read when the file is a spreadsheet.
    pub sheet: String,

    pub encoding: String,
}

/// Lists files for every enabled source, in ingestion list order.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfig` if a source names a connection or
/// retailer that does not exist, and `ConfigError::DirectoryWalk` if a directory cannot be
/// traversed.
pub fn discover_sources(config: &AppConfig) -> ConfigResult<Vec<DiscoveredFile>> {
    let mut files = Vec::new();

    for source in config.ingestion.enabled() {
        files.extend(discover_source(config, source)?);
    }

    Ok(files)
}

/// Lists files for a single source, sorted by path.
///
/// A source on a non-local connection yields nothing. A missing directory
/// yields nothing and logs a warning.
pub fn discover_source(
    config: &AppConfig,
    source: &IngestionSource,
) -> ConfigResult<Vec<DiscoveredFile>> {
    let connection = config.connections.get(&source.connection).ok_or_else(|| {
        ConfigError::InvalidConfig {
            path: config.resolve(sp_protocol::constants::PATH_INGESTION_LIST),
            reason: format!(
                "source '{}' refers to unknown connection '{}'",
                source.name, source.connection
            ),
        }
    })?;

    let retailer = config.retailers.resolve(&source.retailer).ok_or_else(|| {
        ConfigError::InvalidConfig {
            path: config.resolve(sp_protocol::constants::PATH_INGESTION_LIST),
            reason: format!(
                "source '{}' refers to unknown retailer '{}'",
                source.name, source.retailer
            ),
        }
    })?;

    let connection_root = match connection {
        Connection::Local { root } => root,
        other => {
            info!(
                source = %source.name,
                connection = %source.connection,
                kind = other.kind(),
                "skipping source on non-local connection"
            );
            return Ok(Vec::new());
        }
    };

    let dir = config.root.join(connection_root).join(&source.path);
    if !dir.exists() {
        warn!(
            source = %source.name,
            path = %dir.display(),
            "ingestion directory does not exist"
        );
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry.map_err(|err| ConfigError::DirectoryWalk {
            path: dir.clone(),
            source: err,
        })?;

        if !entry.file_type().is_file() || !matches_source(entry.path(), source) {
            continue;
        }

        files.push(DiscoveredFile {
            source: source.name.clone(),
            retailer: source.retailer.clone(),
            retailer_code: retailer.code.clone(),
            path: entry.into_path(),
            sheet: source.sheet.clone(),
            encoding: source.encoding.clone(),
        });
    }

    info!(source = %source.name, files = files.len(), "discovered ingestion files");
    Ok(files)
}

fn matches_source(path: &Path, source: &IngestionSource) -> bool {
    // Lock files left behind by open spreadsheets
    let is_lock_file = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("~$"));

    !is_lock_file
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| source.accepts_extension(ext))
}
