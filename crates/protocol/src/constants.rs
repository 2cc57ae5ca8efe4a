//! Central constants used across the sales reporting pipeline.
//!
//! Every other crate refers to these names instead of repeating the literals.
//! Configuration paths are relative to the project root that the loader is
//! pointed at.

// Project metadata

/// Human-readable project name.
pub const PROJECT_NAME: &str = "Sales Reporting Data Pipeline";

/// Project version reported by the CLI.
pub const PROJECT_VERSION: &str = "0.1.0";

// File handling defaults

/// Text encoding assumed for configuration files and CSV sources.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Worksheet read from spreadsheet sources when none is configured.
pub const DEFAULT_SHEET: &str = "Sheet1";

// YAML / JSON config locations

/// Named connections that ingestion sources read from.
pub const PATH_CONNECTIONS: &str = "config/connections.yaml";

/// Retailer product codes mapped to canonical models.
pub const PATH_MODEL_MAP: &str = "config/mappings/model_map.json";

/// Date formats per retailer.
pub const PATH_DATE_RULES: &str = "config/mappings/date_rules.json";

/// Registry of known retailers and their aliases.
pub const PATH_RETAILERS: &str = "config/mappings/retailers.json";

/// Sources to ingest on each run.
pub const PATH_INGESTION_LIST: &str = "config/ingestion_list.yaml";

/// All configuration locations, in load order.
pub const CONFIG_PATHS: [&str; 5] = [
    PATH_CONNECTIONS,
    PATH_MODEL_MAP,
    PATH_DATE_RULES,
    PATH_RETAILERS,
    PATH_INGESTION_LIST,
];

// Schema + validation

/// Directory that holds every configuration file.
pub const CONFIG_DIR: &str = "config";

/// Encoding names accepted by the validator, compared case-insensitively.
pub const SUPPORTED_ENCODINGS: [&str; 2] = ["utf-8", "utf8"];

/// File extensions an ingestion source matches when none are configured.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["xlsx", "csv"];

/// Day zero of the spreadsheet serial date system (1899-12-30).
pub const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);
