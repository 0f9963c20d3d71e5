use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

/// SQLite in-memory database identifier
pub const MEMORY_DB_URL: &str = ":memory:";

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    /// Directory holding the database file, or ":memory:"
    pub url: String,
    pub name: String,
}

impl Database {
    /// Resolve the store location handed to the connection pool
    pub fn location(&self) -> PathBuf {
        if self.url.trim().eq_ignore_ascii_case(MEMORY_DB_URL) {
            PathBuf::from(MEMORY_DB_URL)
        } else {
            PathBuf::from(&self.url).join(format!("{}.db", self.name))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Cors {
    /// Comma-separated origin list, "*" for any
    pub origins: String,
}

impl Cors {
    /// Parsed origin list; `None` means any origin is allowed
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub cors: Cors,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // 1. Try to load from settings.toml (optional)
        let config_file_name = "settings.toml";

        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        // Check in snapfeed-server directory (for development)
        let dev_path = PathBuf::from("snapfeed-server").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        // 2. Defaults; database.url and database.name have none on purpose
        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8001)?
            .set_default("cors.origins", "*")?;

        // 3. Override with environment variables (highest priority)
        let overrides = [
            ("DATABASE_URL", "database.url"),
            ("DB_NAME", "database.name"),
            ("CORS_ORIGINS", "cors.origins"),
            ("PORT", "server.port"),
            ("HOST", "server.host"),
        ];
        for (var, key) in overrides {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        let s = builder.build()?;
        s.try_deserialize()
    }
}
