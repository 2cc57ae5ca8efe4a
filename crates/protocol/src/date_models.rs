//! Date parsing rules for `config/mappings/date_rules.json`.
//!
//! Retailer reports carry dates in many layouts, and spreadsheets often hold
//! them as serial day numbers. `DateRules` decides how a raw cell is read.

use crate::constants::EXCEL_EPOCH;
use chrono::format::Item;
use chrono::format::StrftimeItems;
use chrono::Days;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Largest serial a spreadsheet can hold (9999-12-31).
const MAX_EXCEL_SERIAL: u64 = 2_958_465;

/// Root document of `config/mappings/date_rules.json`.
///
/// # Example
///
/// ```json
/// {
///   "default_formats": ["%Y-%m-%d", "%d/%m/%Y"],
///   "excel_serial": true,
///   "retailers": {
///     "acme": { "formats": ["%m/%d/%Y"] }
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DateRules {
    /// Formats tried for every retailer, after its own formats.
    #[serde(default)]
    pub default_formats: Vec<String>,

    /// Accept numeric cells as spreadsheet serial dates.
    #[serde(default = "default_excel_serial")]
    pub excel_serial: bool,

    /// Per-retailer overrides keyed by retailer code.
    #[serde(default)]
    pub retailers: BTreeMap<String, RetailerDateRule>,
}

/// Formats specific to one retailer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RetailerDateRule {
    #[serde(default)]
    pub formats: Vec<String>,
}

impl Default for DateRules {
    fn default() -> Self {
        Self {
            default_formats: Vec::new(),
            excel_serial: default_excel_serial(),
            retailers: BTreeMap::new(),
        }
    }
}

fn default_excel_serial() -> bool {
    true
}

impl DateRules {
    /// Formats that apply to the retailer with code `retailer`, most
    /// specific first.
    pub fn formats_for<'a>(&'a self, retailer: &str) -> impl Iterator<Item = &'a str> + 'a {
        let specific = self
            .retailers
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(retailer.trim()))
            .map(|(_, rule)| rule.formats.as_slice())
            .unwrap_or_default();

        specific
            .iter()
            .chain(self.default_formats.iter())
            .map(String::as_str)
    }

    /// Parses a raw date value reported by `retailer`.
    ///
    /// Tries the retailer's formats, then the defaults, then (when enabled)
    /// reads a numeric value as a spreadsheet serial date.
    pub fn parse(&self, retailer: &str, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(date) = self
            .formats_for(retailer)
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        {
            return Some(date);
        }

        if self.excel_serial {
            return parse_excel_serial(raw);
        }

        None
    }
}

/// Reads a spreadsheet serial day number. Any fractional time part is dropped.
pub fn parse_excel_serial(raw: &str) -> Option<NaiveDate> {
    let serial: f64 = raw.trim().parse().ok()?;
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }

    let days = serial.trunc() as u64;
    if days > MAX_EXCEL_SERIAL {
        return None;
    }

    let (year, month, day) = EXCEL_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)?.checked_add_days(Days::new(days))
}

/// Returns true when `format` is a well-formed strftime pattern.
pub fn is_valid_format(format: &str) -> bool {
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> DateRules {
        let mut retailers = BTreeMap::new();
        retailers.insert(
            "acme".to_string(),
            RetailerDateRule {
                formats: vec!["%m/%d/%Y".to_string()],
            },
        );
        DateRules {
            default_formats: vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()],
            excel_serial: true,
            retailers,
        }
    }

    #[test]
    fn test_retailer_formats_take_precedence() {
        let rules = rules();

        // 03/04/2024 is March 4th for acme, April 3rd for everyone else.
        assert_eq!(
            rules.parse("acme", "03/04/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );
        assert_eq!(
            rules.parse("bolt", "03/04/2024"),
            NaiveDate::from_ymd_opt(2024, 4, 3)
        );
    }

    #[test]
    fn test_retailer_lookup_ignores_case() {
        let rules = rules();
        let formats: Vec<&str> = rules.formats_for("ACME").collect();
        assert_eq!(formats, vec!["%m/%d/%Y", "%Y-%m-%d", "%d/%m/%Y"]);
    }

    #[test]
    fn test_falls_back_to_defaults() {
        assert_eq!(
            rules().parse("acme", " 2024-01-15 "),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_excel_serial() {
        let rules = rules();
        assert_eq!(
            rules.parse("acme", "45306"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            rules.parse("acme", "45306.75"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_excel_serial("1"), NaiveDate::from_ymd_opt(1899, 12, 31));
        assert_eq!(parse_excel_serial("0"), None);
        assert_eq!(parse_excel_serial("-5"), None);
        assert_eq!(parse_excel_serial("99999999"), None);
    }

    #[test]
    fn test_excel_serial_disabled() {
        let rules = DateRules {
            excel_serial: false,
            ..rules()
        };
        assert_eq!(rules.parse("acme", "45306"), None);
    }

    #[test]
    fn test_unparseable_input() {
        let rules = rules();
        assert_eq!(rules.parse("acme", ""), None);
        assert_eq!(rules.parse("acme", "next tuesday"), None);
    }

    #[test]
    fn test_is_valid_format() {
        assert!(is_valid_format("%Y-%m-%d"));
        assert!(is_valid_format("%d.%m.%y"));
        assert!(!is_valid_format("%Q-%m"));
        assert!(!is_valid_format(""));
    }
}
