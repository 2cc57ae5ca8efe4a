//! Ingestion list models for `config/ingestion_list.yaml`.
//!
//! Each source ties a retailer to a connection and a location below that
//! connection where the retailer's sales files land.

use crate::constants::DEFAULT_ENCODING;
use crate::constants::DEFAULT_EXTENSIONS;
use crate::constants::DEFAULT_SHEET;
use serde::Deserialize;
use serde::Serialize;

/// Root document of `config/ingestion_list.yaml`.
///
/// # Example
///
/// ```yaml
/// sources:
///   - name: acme-weekly
///     retailer: acme
///     connection: local_drop
///     path: acme/weekly
///     extensions: [xlsx]
///     sheet: Sales
///   - name: bolt-daily
///     retailer: bolt
///     connection: local_drop
///     path: bolt
///     enabled: false
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionList {
    #[serde(default)]
    pub sources: Vec<IngestionSource>,
}

impl IngestionList {
    /// Sources that take part in a run.
    pub fn enabled(&self) -> impl Iterator<Item = &IngestionSource> {
        self.sources.iter().filter(|source| source.enabled)
    }
}

/// One location to ingest sales files from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IngestionSource {
    /// Unique name of the source.
    pub name: String,

    /// Retailer code, name or alias from the retailer registry.
    pub retailer: String,

    /// Key into `config/connections.yaml`.
    pub connection: String,

    /// Location relative to the connection root.
    #[serde(default)]
    pub path: String,

    /// File extensions to pick up, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Worksheet to read from spreadsheet files.
    #[serde(default = "default_sheet")]
    pub sheet: String,

    /// Text encoding of CSV files.
    #[serde(default = "default_encoding")]
    pub encoding: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl IngestionSource {
    /// True when `extension` (with or without a leading dot) is picked up by
    /// this source, ignoring case.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.extensions
            .iter()
            .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_sheet() -> String {
    DEFAULT_SHEET.to_string()
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

fn default_enabled() -> bool {
    true
}
