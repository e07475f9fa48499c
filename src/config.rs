//! Server configuration from environment variables.
//!
//! - `HOST`: bind address (default `0.0.0.0`)
//! - `PORT`: bind port (default `8080`; unparsable values fall back to it)
//! - `DATA_DIR`: directory for the JSON file store; unset keeps everything in memory

use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = match lookup("PORT") {
            Some(p) => p.trim().parse().unwrap_or_else(|_| {
                log::warn!("Invalid PORT '{}', using {}", p, default_port());
                default_port()
            }),
            None => default_port(),
        };
        let data_dir = lookup("DATA_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);
        Self { host, port, data_dir }
    }
}
