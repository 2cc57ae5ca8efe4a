//! Cross-file checks for a loaded configuration.
//!
//! Parsing guarantees each file is well-formed on its own. The checks here
//! catch references between files that do not line up, such as a source
//! pointing at a connection that does not exist.

use crate::config::models::AppConfig;
use sp_protocol::constants::PATH_DATE_RULES;
use sp_protocol::constants::PATH_INGESTION_LIST;
use sp_protocol::constants::PATH_MODEL_MAP;
use sp_protocol::constants::PATH_RETAILERS;
use sp_protocol::constants::SUPPORTED_ENCODINGS;
use sp_protocol::date_models::is_valid_format;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Config path (relative to the project root) the issue was found in.
    pub file: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    fn error(file: &'static str, message: impl Into<String>) -> Self {
        Self {
            file,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(file: &'static str, message: impl Into<String>) -> Self {
        Self {
            file,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.file, self.message)
    }
}

/// Runs every check and returns all issues found, in file order.
///
/// An empty result means the configuration is consistent.
pub fn validate(config: &AppConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_retailers(config, &mut issues);
    check_model_map(config, &mut issues);
    check_date_rules(config, &mut issues);
    check_ingestion_list(config, &mut issues);
    issues
}

/// Returns true when `encoding` names a supported text encoding.
pub fn is_supported_encoding(encoding: &str) -> bool {
    SUPPORTED_ENCODINGS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(encoding.trim()))
}

fn check_retailers(config: &AppConfig, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    // Lowercased code, name or alias -> code of the first retailer it names.
    let mut owners: HashMap<String, &str> = HashMap::new();

    for (index, retailer) in config.retailers.retailers.iter().enumerate() {
        if retailer.code.trim().is_empty() {
            issues.push(ValidationIssue::error(
                PATH_RETAILERS,
                format!("retailer #{} has an empty code", index + 1),
            ));
            continue;
        }
        if retailer.name.trim().is_empty() {
            issues.push(ValidationIssue::error(
                PATH_RETAILERS,
                format!("retailer '{}' has an empty name", retailer.code),
            ));
        }
        if !seen.insert(retailer.code.trim().to_ascii_lowercase()) {
            issues.push(ValidationIssue::error(
                PATH_RETAILERS,
                format!("duplicate retailer code '{}'", retailer.code),
            ));
        }

        let code = retailer.code.trim();
        let keys = [code, retailer.name.trim()]
            .into_iter()
            .chain(retailer.aliases.iter().map(|alias| alias.trim()));
        for key in keys.filter(|key| !key.is_empty()) {
            match owners.entry(key.to_ascii_lowercase()) {
                Entry::Vacant(entry) => {
                    entry.insert(code);
                }
                Entry::Occupied(entry) if !entry.get().eq_ignore_ascii_case(code) => {
                    issues.push(ValidationIssue::warning(
                        PATH_RETAILERS,
                        format!(
                            "'{key}' matches both retailer '{}' and '{code}'; the first one wins",
                            entry.get()
                        ),
                    ));
                }
                Entry::Occupied(_) => {}
            }
        }
    }
}

fn check_model_map(config: &AppConfig, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();

    for (index, mapping) in config.model_map.mappings.iter().enumerate() {
        let position = index + 1;
        if mapping.source.trim().is_empty() {
            issues.push(ValidationIssue::error(
                PATH_MODEL_MAP,
                format!("mapping #{position} has an empty source"),
            ));
        }
        if mapping.model.trim().is_empty() {
            issues.push(ValidationIssue::error(
                PATH_MODEL_MAP,
                format!("mapping #{position} has an empty model"),
            ));
        }
        // Lookups compare against the code the ingestion step passes, so a
        // name or alias here would never match.
        if let Some(retailer) = &mapping.retailer {
            match config.retailers.resolve(retailer) {
                None => issues.push(ValidationIssue::error(
                    PATH_MODEL_MAP,
                    format!("mapping #{position} refers to unknown retailer '{retailer}'"),
                )),
                Some(known) if config.retailers.by_code(retailer).is_none() => {
                    issues.push(ValidationIssue::error(
                        PATH_MODEL_MAP,
                        format!(
                            "mapping #{position} uses '{retailer}' instead of retailer code '{}'",
                            known.code
                        ),
                    ))
                }
                Some(_) => {}
            }
        }

        let key = (
            mapping
                .retailer
                .as_deref()
                .map(|r| r.trim().to_ascii_lowercase()),
            mapping.source.trim().to_ascii_lowercase(),
        );
        if !seen.insert(key) {
            issues.push(ValidationIssue::warning(
                PATH_MODEL_MAP,
                format!(
                    "mapping #{position} repeats source '{}'; the first mapping wins",
                    mapping.source
                ),
            ));
        }
    }
}

fn check_date_rules(config: &AppConfig, issues: &mut Vec<ValidationIssue>) {
    let rules = &config.date_rules;

    for format in &rules.default_formats {
        if !is_valid_format(format) {
            issues.push(ValidationIssue::error(
                PATH_DATE_RULES,
                format!("invalid default date format '{format}'"),
            ));
        }
    }

    for (code, rule) in &rules.retailers {
        match config.retailers.resolve(code) {
            None => issues.push(ValidationIssue::warning(
                PATH_DATE_RULES,
                format!("date rules for unknown retailer '{code}'"),
            )),
            Some(known) if config.retailers.by_code(code).is_none() => {
                issues.push(ValidationIssue::error(
                    PATH_DATE_RULES,
                    format!(
                        "date rules key '{code}' should be retailer code '{}'",
                        known.code
                    ),
                ))
            }
            Some(_) => {}
        }
        for format in &rule.formats {
            if !is_valid_format(format) {
                issues.push(ValidationIssue::error(
                    PATH_DATE_RULES,
                    format!("invalid date format '{format}' for retailer '{code}'"),
                ));
            }
        }
    }
}

fn check_ingestion_list(config: &AppConfig, issues: &mut Vec<ValidationIssue>) {
    let mut names = HashSet::new();

    for source in &config.ingestion.sources {
        let name = &source.name;

        if !names.insert(name.as_str()) {
            issues.push(ValidationIssue::error(
                PATH_INGESTION_LIST,
                format!("duplicate source name '{name}'"),
            ));
        }

        if config.connections.get(&source.connection).is_none() {
            issues.push(ValidationIssue::error(
                PATH_INGESTION_LIST,
                format!(
                    "source '{name}' refers to unknown connection '{}'",
                    source.connection
                ),
            ));
        }

        match config.retailers.resolve(&source.retailer) {
            None => issues.push(ValidationIssue::error(
                PATH_INGESTION_LIST,
                format!(
                    "source '{name}' refers to unknown retailer '{}'",
                    source.retailer
                ),
            )),
            Some(retailer) if source.enabled && !retailer.active => {
                issues.push(ValidationIssue::warning(
                    PATH_INGESTION_LIST,
                    format!(
                        "source '{name}' is enabled but retailer '{}' is inactive",
                        retailer.code
                    ),
                ))
            }
            Some(_) => {}
        }

        if !is_supported_encoding(&source.encoding) {
            issues.push(ValidationIssue::error(
                PATH_INGESTION_LIST,
                format!(
                    "source '{name}' uses unsupported encoding '{}'",
                    source.encoding
                ),
            ));
        }

        if source.extensions.is_empty() {
            issues.push(ValidationIssue::error(
                PATH_INGESTION_LIST,
                format!("source '{name}' lists no file extensions"),
            ));
        }
    }
}
