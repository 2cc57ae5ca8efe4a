//! End-to-end tests: project on disk → load → validate → discover.

mod common;

use chrono::NaiveDate;
use common::*;
use sp_core::config::load_config;
use sp_core::config::validate;
use sp_core::config::Severity;
use sp_core::ingest::discover_sources;
use sp_core::init::generate_project_structure;
use sp_core::init::InitOptions;
use sp_protocol::constants::PATH_DATE_RULES;
use sp_protocol::constants::PATH_INGESTION_LIST;
use sp_protocol::constants::PATH_MODEL_MAP;

#[tokio::test]
async fn test_full_project_loads_and_validates() {
    let project = create_test_project().expect("Failed to create test project");

    let config = load_config(project.path())
        .await
        .expect("Failed to load config");

    assert_eq!(config.connections.connections.len(), 2);
    assert_eq!(config.retailers.retailers.len(), 2);
    assert_eq!(config.ingestion.sources.len(), 3);

    let issues = validate(&config);
    assert!(issues.is_empty(), "Unexpected issues: {issues:?}");
    assert!(config.ensure_valid().is_ok());
}

#[tokio::test]
async fn test_mappings_apply_to_loaded_config() {
    let project = create_test_project().expect("Failed to create test project");
    let config = load_config(project.path())
        .await
        .expect("Failed to load config");

    let retailer = config
        .retailers
        .resolve(&config.ingestion.sources[0].retailer)
        .expect("ACME INC alias should resolve");
    assert_eq!(retailer.code, "acme");

    assert_eq!(
        config.model_map.resolve(&retailer.code, "55in oled tv"),
        Some("OLED55")
    );
    assert_eq!(
        config.date_rules.parse(&retailer.code, "01/15/2024"),
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
    assert_eq!(
        config.date_rules.parse("bolt", "45306"),
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
}

#[tokio::test]
async fn test_discovery_over_loaded_config() {
    let project = create_test_project().expect("Failed to create test project");
    let config = load_config(project.path())
        .await
        .expect("Failed to load config");

    let files = discover_sources(&config).expect("Discovery should succeed");

    let names: Vec<String> = files
        .iter()
        .filter_map(|file| file.path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["2024-w01.xlsx", "2024-w02.csv"]);
    assert!(files.iter().all(|file| file.sheet == "Sales"));
    assert!(files.iter().all(|file| file.encoding == "utf-8"));
    // The fixture source names its retailer by alias.
    assert!(files.iter().all(|file| file.retailer == "ACME INC"));
    assert!(files.iter().all(|file| file.retailer_code == "acme"));
}

#[tokio::test]
async fn test_mapping_keys_by_name_or_alias_are_rejected() {
    let project = create_test_project().expect("Failed to create test project");
    write_file(
        project.path(),
        PATH_MODEL_MAP,
        r#"{ "mappings": [{ "source": "55IN OLED TV", "model": "OLED55", "retailer": "Acme Stores" }] }"#,
    )
    .expect("Failed to rewrite model map");
    write_file(
        project.path(),
        PATH_DATE_RULES,
        r#"{ "retailers": { "ACME INC": { "formats": ["%m/%d/%Y"] } } }"#,
    )
    .expect("Failed to rewrite date rules");

    let config = load_config(project.path())
        .await
        .expect("Failed to load config");
    let issues = validate(&config);

    assert_issue(
        &issues,
        Severity::Error,
        "uses 'Acme Stores' instead of retailer code 'acme'",
    );
    assert_issue(
        &issues,
        Severity::Error,
        "date rules key 'ACME INC' should be retailer code 'acme'",
    );
    assert!(config.ensure_valid().is_err());
}

#[tokio::test]
async fn test_broken_references_are_reported() {
    let project = create_test_project().expect("Failed to create test project");
    write_file(
        project.path(),
        PATH_INGESTION_LIST,
        r#"
sources:
  - name: zeta
    retailer: zeta
    connection: warehouse
    encoding: latin-1
  - name: bolt-daily
    retailer: bolt
    connection: local_drop
"#,
    )
    .expect("Failed to rewrite ingestion list");

    let config = load_config(project.path())
        .await
        .expect("Failed to load config");
    let issues = validate(&config);

    assert_issue(&issues, Severity::Error, "unknown connection 'warehouse'");
    assert_issue(&issues, Severity::Error, "unknown retailer 'zeta'");
    assert_issue(&issues, Severity::Error, "unsupported encoding 'latin-1'");
    assert_issue(&issues, Severity::Warning, "retailer 'bolt' is inactive");
    assert!(!has_no_errors(&issues));
    assert!(config.ensure_valid().is_err());
}

#[tokio::test]
async fn test_generated_project_is_valid() {
    for minimal in [false, true] {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        generate_project_structure(InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: false,
            minimal,
        })
        .await
        .expect("Init should succeed");

        let config = load_config(dir.path())
            .await
            .expect("Generated config should load");
        let issues = validate(&config);
        assert!(
            has_no_errors(&issues),
            "Generated config (minimal = {minimal}) has errors: {issues:?}"
        );
        assert_eq!(config.ingestion.sources.len(), 1);
    }
}
