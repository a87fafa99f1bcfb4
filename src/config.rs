//! Configuration management for Banara server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Optional directory for a daily rolling log file
    #[serde(default)]
    pub file: Option<String>,
}

/// Which backend holds the `points/` collection
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Firebase,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    /// Realtime database root, e.g. `https://<project>-default-rtdb.firebaseio.com`
    pub url: String,
    /// Database secret or ID token appended as `?auth=`
    #[serde(default)]
    pub auth: Option<String>,
    pub points_path: String,
    pub timeout_secs: u64,
    /// Re-read the collection periodically so writes made by other clients
    /// reach subscribers. 0 disables polling.
    pub refresh_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    /// Start the visitor store with the three demo check-ins
    pub preload_demo: bool,
}

/// Initial map centres and zoom spans for the location screens
#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    pub add_latitude: f64,
    pub add_longitude: f64,
    pub add_delta: f64,
    pub edit_latitude: f64,
    pub edit_longitude: f64,
    pub edit_delta: f64,
    /// Span used after recentring on a device fix
    pub device_fix_delta: f64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub map: MapConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BANARA_DATABASE__BACKEND=memory, BANARA_SERVER__PORT=9000, ...
            .add_source(
                Environment::with_prefix("BANARA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("FIREBASE_DATABASE_URL").ok())?
            .set_override_option("database.auth", env::var("FIREBASE_AUTH").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::Memory,
            url: "http://localhost:9000".to_string(),
            auth: None,
            points_path: "points".to_string(),
            timeout_secs: 10,
            refresh_interval_secs: 0,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            add_latitude: -8.0,
            add_longitude: 110.26,
            add_delta: 0.01,
            edit_latitude: -7.7956,
            edit_longitude: 110.3695,
            edit_delta: 0.005,
            device_fix_delta: 0.005,
        }
    }
}
