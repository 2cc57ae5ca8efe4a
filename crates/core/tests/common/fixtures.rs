//! Test fixtures for creating sample projects and test data.

use sp_protocol::constants::PATH_CONNECTIONS;
use sp_protocol::constants::PATH_DATE_RULES;
use sp_protocol::constants::PATH_INGESTION_LIST;
use sp_protocol::constants::PATH_MODEL_MAP;
use sp_protocol::constants::PATH_RETAILERS;
use std::path::Path;
use tempfile::TempDir;

/// Write `content` to `relative` below `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Create a temporary project with a complete, consistent configuration.
///
/// This creates:
/// - One local and one SFTP connection
/// - Two retailers (`acme` active, `bolt` inactive)
/// - A model map, date rules and three ingestion sources
/// - Sample sales files under `data/incoming/`
///
/// Returns a TempDir that must be kept alive for the test duration.
pub fn create_test_project() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    write_file(
        root,
        PATH_CONNECTIONS,
        r#"
connections:
  local_drop:
    type: local
    root: data/incoming
  retailer_ftp:
    type: sftp
    host: ftp.example.com
    user: reports
"#,
    )?;

    write_file(
        root,
        PATH_RETAILERS,
        r#"{
  "retailers": [
    { "code": "acme", "name": "Acme Stores", "aliases": ["ACME INC"] },
    { "code": "bolt", "name": "Bolt Electronics", "active": false }
  ]
}"#,
    )?;

    write_file(
        root,
        PATH_MODEL_MAP,
        r#"{
  "mappings": [
    { "source": "TV-55-OLED", "model": "OLED55" },
    { "source": "55IN OLED TV", "model": "OLED55", "retailer": "acme" }
  ]
}"#,
    )?;

    write_file(
        root,
        PATH_DATE_RULES,
        r#"{
  "default_formats": ["%Y-%m-%d"],
  "retailers": { "acme": { "formats": ["%m/%d/%Y"] } }
}"#,
    )?;

    write_file(
        root,
        PATH_INGESTION_LIST,
        r#"
sources:
  - name: acme-weekly
    retailer: ACME INC
    connection: local_drop
    path: acme
    sheet: Sales
  - name: bolt-daily
    retailer: bolt
    connection: local_drop
    path: bolt
    enabled: false
  - name: acme-ftp
    retailer: acme
    connection: retailer_ftp
    path: outbound
"#,
    )?;

    write_file(root, "data/incoming/acme/2024-w01.xlsx", "")?;
    write_file(root, "data/incoming/acme/2024-w02.csv", "")?;
    write_file(root, "data/incoming/acme/readme.txt", "")?;
    write_file(root, "data/incoming/bolt/2024-01-01.csv", "")?;

    Ok(temp_dir)
}
