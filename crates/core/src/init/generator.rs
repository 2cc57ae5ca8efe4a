//! Directory structure and file generation for project initialization.

use super::error::{InitError, InitResult};
use super::templates::get_template;
use sp_protocol::constants::CONFIG_DIR;
use sp_protocol::constants::CONFIG_PATHS;
use sp_protocol::constants::PATH_CONNECTIONS;
use sp_protocol::constants::PATH_INGESTION_LIST;
use sp_protocol::constants::PATH_RETAILERS;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files written in minimal mode: just enough for the ingestion list to
/// reference a valid connection and retailer.
const MINIMAL_PATHS: [&str; 3] = [PATH_CONNECTIONS, PATH_RETAILERS, PATH_INGESTION_LIST];

/// Options for initializing a project's configuration.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project root where `config/` will be created.
    pub target_dir: PathBuf,

    /// Overwrite existing configuration files.
    pub force: bool,

    /// Skip the model map and date rules.
    pub minimal: bool,
}

/// Generate the `config/` directory with default configuration files.
///
/// This function creates the following structure:
/// ```text
/// config/
/// ├── connections.yaml
/// ├── ingestion_list.yaml
/// └── mappings/
///     ├── date_rules.json (unless minimal)
///     ├── model_map.json (unless minimal)
///     └── retailers.json
/// ```
///
/// # Returns
/// The paths of the files written, or an `InitError` if:
/// - The `config/` directory already exists (without force flag)
/// - A template file cannot be found
/// - File system operations fail
pub async fn generate_project_structure(options: InitOptions) -> InitResult<Vec<PathBuf>> {
    let config_dir = options.target_dir.join(CONFIG_DIR);

    if config_dir.exists() && !options.force {
        return Err(InitError::ConfigExists(config_dir));
    }

    let paths: &[&str] = if options.minimal {
        &MINIMAL_PATHS
    } else {
        &CONFIG_PATHS
    };

    let mut written = Vec::with_capacity(paths.len());
    for path in paths {
        written.push(write_template_file(&options.target_dir, path)?);
    }

    Ok(written)
}

/// Writes the template stored under `template_path` to the same relative
/// path below `target_dir`.
fn write_template_file(target_dir: &Path, template_path: &str) -> InitResult<PathBuf> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = target_dir.join(template_path);

    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| InitError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    debug!(path = %target_path.display(), "wrote config template");
    Ok(target_path)
}
