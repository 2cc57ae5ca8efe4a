//! Retailer registry for `config/mappings/retailers.json`.

use serde::Deserialize;
use serde::Serialize;

/// Root document of `config/mappings/retailers.json`.
///
/// # Example
///
/// ```json
/// {
///   "retailers": [
///     { "code": "acme", "name": "Acme Stores", "aliases": ["ACME INC"] },
///     { "code": "bolt", "name": "Bolt Electronics", "active": false }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RetailerRegistry {
    #[serde(default)]
    pub retailers: Vec<Retailer>,
}

/// A retailer that sends sales reports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Retailer {
    /// Short stable identifier, used by every other config file.
    pub code: String,

    /// Display name used in reports.
    pub name: String,

    /// Other spellings that appear in source data.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Inactive retailers stay resolvable but are no longer ingested.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Retailer {
    /// True when `name` is this retailer's code, display name or an alias.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.code.eq_ignore_ascii_case(name)
            || self.name.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.trim().eq_ignore_ascii_case(name))
    }
}

impl RetailerRegistry {
    /// Finds the retailer known by `name`, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<&Retailer> {
        self.retailers.iter().find(|retailer| retailer.matches(name))
    }

    /// Finds the retailer whose code is `code`, ignoring case. Names and
    /// aliases do not match.
    pub fn by_code(&self, code: &str) -> Option<&Retailer> {
        let code = code.trim();
        self.retailers
            .iter()
            .find(|retailer| retailer.code.eq_ignore_ascii_case(code))
    }

    /// Retailers that are still being ingested.
    pub fn active(&self) -> impl Iterator<Item = &Retailer> {
        self.retailers.iter().filter(|retailer| retailer.active)
    }
}
