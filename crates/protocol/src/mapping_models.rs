//! Model mapping for `config/mappings/model_map.json`.
//!
//! Retailers report products under their own codes and descriptions. The
//! model map translates those into the canonical model names used in reports.

use serde::Deserialize;
use serde::Serialize;

/// Root document of `config/mappings/model_map.json`.
///
/// # Example
///
/// ```json
/// {
///   "mappings": [
///     { "source": "TV-55-OLED", "model": "OLED55" },
///     { "source": "55IN OLED TV", "model": "OLED55", "retailer": "acme" }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelMap {
    #[serde(default)]
    pub mappings: Vec<ModelMapping>,
}

/// One source code or description mapped to a canonical model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModelMapping {
    /// Product code or description as it appears in retailer data.
    pub source: String,

    /// Canonical model name.
    pub model: String,

    /// Restricts the mapping to one retailer code. Global when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,
}

impl ModelMap {
    /// Resolves a retailer's product value to its canonical model.
    ///
    /// `retailer` is a retailer code; names and aliases are not resolved
    /// here. Matching trims whitespace and ignores case. A mapping scoped to
    /// `retailer` takes precedence over a global mapping for the same source.
    pub fn resolve(&self, retailer: &str, source: &str) -> Option<&str> {
        let source = source.trim();
        let mut global = None;

        for mapping in &self.mappings {
            if !mapping.source.trim().eq_ignore_ascii_case(source) {
                continue;
            }
            match &mapping.retailer {
                Some(scope) if scope.trim().eq_ignore_ascii_case(retailer.trim()) => {
                    return Some(mapping.model.as_str());
                }
                Some(_) => {}
                None => {
                    if global.is_none() {
                        global = Some(mapping.model.as_str());
                    }
                }
            }
        }

        global
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(source: &str, model: &str, retailer: Option<&str>) -> ModelMapping {
        ModelMapping {
            source: source.to_string(),
            model: model.to_string(),
            retailer: retailer.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_prefers_retailer_scope() {
        let map = ModelMap {
            mappings: vec![
                mapping("TV-55", "GLOBAL55", None),
                mapping("TV-55", "ACME55", Some("acme")),
            ],
        };

        assert_eq!(map.resolve("acme", "TV-55"), Some("ACME55"));
        assert_eq!(map.resolve("bolt", "TV-55"), Some("GLOBAL55"));
    }

    #[test]
    fn test_resolve_ignores_case_and_whitespace() {
        let map = ModelMap {
            mappings: vec![mapping("55in Oled TV", "OLED55", Some("ACME"))],
        };

        assert_eq!(map.resolve(" acme ", "  55IN OLED TV "), Some("OLED55"));
    }

    #[test]
    fn test_resolve_unknown_source() {
        let map = ModelMap {
            mappings: vec![mapping("TV-55", "OLED55", None)],
        };

        assert_eq!(map.resolve("acme", "TV-65"), None);
        assert_eq!(ModelMap::default().resolve("acme", "TV-55"), None);
    }
}
