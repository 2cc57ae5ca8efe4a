//! Connection models for `config/connections.yaml`.
//!
//! A connection names a place that ingestion sources read files from. Sources
//! in the ingestion list refer to connections by key.

use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Root document of `config/connections.yaml`.
///
/// # Example
///
/// ```yaml
/// connections:
///   local_drop:
///     type: local
///     root: data/incoming
///   retailer_ftp:
///     type: sftp
///     host: ftp.example.com
///     user: reports
///   warehouse:
///     type: postgres
///     host: localhost
///     database: sales
///     user: reporting
///     password_env: SALES_DB_PASSWORD
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionsConfig {
    /// Connections keyed by the name sources use to reference them.
    #[serde(default)]
    pub connections: BTreeMap<String, Connection>,
}

impl ConnectionsConfig {
    /// Looks up a connection by name.
    pub fn get(&self, name: &str) -> Option<&Connection> {
        self.connections.get(name)
    }
}

/// A single named connection, tagged by `type`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Connection {
    /// A directory on the local filesystem, relative to the project root
    /// unless absolute.
    Local { root: String },

    /// A remote SFTP drop.
    Sftp {
        host: String,
        #[serde(default = "default_sftp_port")]
        port: u16,
        user: String,
        #[serde(default = "default_sftp_root")]
        root: String,
    },

    /// A PostgreSQL database.
    ///
    /// The password itself is never stored in the file; `password_env` names
    /// the environment variable that holds it.
    Postgres {
        host: String,
        #[serde(default = "default_postgres_port")]
        port: u16,
        database: String,
        user: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        password_env: Option<String>,
    },
}

impl Connection {
    /// Short name of the connection kind, as written in the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Connection::Local { .. } => "local",
            Connection::Sftp { .. } => "sftp",
            Connection::Postgres { .. } => "postgres",
        }
    }
}

fn default_sftp_port() -> u16 {
    22
}

fn default_sftp_root() -> String {
    "/".to_string()
}

fn default_postgres_port() -> u16 {
    5432
}
