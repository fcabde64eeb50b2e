use serde::Deserialize;

/// Runtime settings for the HTTP server.
///
/// Loaded from `config/default.yaml`, an optional per-environment file and
/// `APP__*` environment variables, in that order of precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `127.0.0.1`.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
}
