//! Subcommand implementations.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use colored::Colorize;
use sp_core::config::load_config;
use sp_core::config::validate;
use sp_core::config::Severity;
use sp_core::ingest::discover_sources;
use sp_core::init::generate_project_structure;
use sp_core::init::InitOptions;
use sp_protocol::constants::CONFIG_PATHS;
use sp_protocol::constants::DEFAULT_ENCODING;
use sp_protocol::constants::DEFAULT_SHEET;
use sp_protocol::constants::PROJECT_NAME;
use sp_protocol::constants::PROJECT_VERSION;
use std::path::Path;
use tracing::info;

pub fn show_info() -> Result<()> {
    println!("{} {}", PROJECT_NAME.bold(), PROJECT_VERSION);
    println!("  default encoding: {DEFAULT_ENCODING}");
    println!("  default sheet:    {DEFAULT_SHEET}");
    Ok(())
}

pub fn paths(root: &Path) -> Result<()> {
    for relative in CONFIG_PATHS {
        let path = root.join(relative);
        let status = if path.is_file() {
            "ok".green()
        } else {
            "missing".yellow()
        };
        println!("{status}  {}", path.display());
    }
    Ok(())
}

pub async fn init(root: &Path, force: bool, minimal: bool) -> Result<()> {
    let written = generate_project_structure(InitOptions {
        target_dir: root.to_path_buf(),
        force,
        minimal,
    })
    .await?;

    for path in &written {
        println!("{} {}", "created".green(), path.display());
    }
    info!(files = written.len(), "project initialized");
    Ok(())
}

pub async fn check(root: &Path) -> Result<()> {
    let config = load_config(root).await?;
    let issues = validate(&config);

    for issue in &issues {
        let label = match issue.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        println!("{label}: {}: {}", issue.file, issue.message);
    }

    let errors = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(eyre!(
            "configuration has {errors} error(s) and {warnings} warning(s)"
        ));
    }

    println!(
        "{} {} source(s), {} retailer(s), {} warning(s)",
        "configuration ok:".green(),
        config.ingestion.sources.len(),
        config.retailers.retailers.len(),
        warnings
    );
    Ok(())
}

pub async fn discover(root: &Path, json: bool) -> Result<()> {
    let config = load_config(root).await?;
    let files = discover_sources(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    for file in &files {
        println!("{}\t{}\t{}", file.source.cyan(), file.sheet, file.path.display());
    }
    info!(files = files.len(), "discovery finished");
    Ok(())
}
