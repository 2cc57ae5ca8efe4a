//! Embedded template files for project initialization.
//!
//! This module uses `rust-embed` to embed the workspace `templates/` directory
//! into the binary at compile time. Template paths mirror the configuration
//! paths in [`sp_protocol::constants`], so `PATH_RETAILERS` is also the key of
//! the retailers template.

use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
///
/// The path is calculated relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = workspace `templates/`
///
/// During development with the `debug-embed` feature, files are read from the
/// filesystem at runtime, allowing for quick iteration without recompilation.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Arguments
/// * `path` - Relative path from templates root (e.g., "config/connections.yaml")
///
/// # Returns
/// The file content as a String, or None if the file doesn't exist.
///
/// # Example
/// ```
/// use sp_core::init::templates::get_template;
/// use sp_protocol::constants::PATH_CONNECTIONS;
///
/// let connections = get_template(PATH_CONNECTIONS).expect("connections template should exist");
/// assert!(connections.contains("connections:"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}
