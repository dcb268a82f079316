// Connection target configuration

use anyhow::{Context, Result};
use serde::{Deserialize, de::DeserializeOwned};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_NAME: &str = "bookstore-queries";

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "plp_bookstore";
pub const DEFAULT_COLLECTION: &str = "books";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_PATH_ENV: &str = "BOOKSTORE_CONFIG";
pub const URI_ENV: &str = "BOOKSTORE_MONGODB_URI";
pub const DATABASE_ENV: &str = "BOOKSTORE_DATABASE";
pub const COLLECTION_ENV: &str = "BOOKSTORE_COLLECTION";
pub const CONNECT_TIMEOUT_ENV: &str = "BOOKSTORE_CONNECT_TIMEOUT_SECS";

/// Where the tour connects and which collection it runs against
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookstoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout_secs: u64,
}

impl Default for BookstoreConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl BookstoreConfig {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self { uri: uri.into(), database: database.into(), ..Self::default() }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Overlay `BOOKSTORE_*` variables resolved through `lookup`.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(uri) = lookup(URI_ENV) {
            self.uri = uri;
        }
        if let Some(database) = lookup(DATABASE_ENV) {
            self.database = database;
        }
        if let Some(collection) = lookup(COLLECTION_ENV) {
            self.collection = collection;
        }
        if let Some(raw) = lookup(CONNECT_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.connect_timeout_secs = secs,
                Err(err) => log::warn!("Ignoring {CONNECT_TIMEOUT_ENV}={raw:?}: {err}"),
            }
        }
        self
    }
}

/// Locates and reads the optional JSON config file
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    const CONFIG_FILE: &'static str = "config.json";

    /// Create a ConfigManager rooted at the platform config directory
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the platform-specific config directory
    fn get_config_dir() -> Result<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_NAME)).context("Could not determine config directory")
    }

    /// Get path to a specific config file
    fn file_path(&self, filename: &str) -> PathBuf {
        self.config_dir.join(filename)
    }

    /// Load data from a JSON file, `None` when the file is absent
    fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let value: T = serde_json::from_str(&data)
            .with_context(|| format!("Failed to deserialize {}", path.display()))?;

        Ok(Some(value))
    }

    /// Load `config.json` from the config directory, falling back to defaults
    pub fn load_config(&self) -> Result<BookstoreConfig> {
        let path = self.file_path(Self::CONFIG_FILE);
        Ok(Self::load_json(&path)?.unwrap_or_default())
    }

    /// Load a config from an explicit path; a missing file is an error here
    pub fn load_config_from(path: &Path) -> Result<BookstoreConfig> {
        Self::load_json(path)?
            .with_context(|| format!("Config file {} does not exist", path.display()))
    }
}

/// Resolve the effective config from the process environment.
pub fn load_config() -> BookstoreConfig {
    resolve_config(|key| std::env::var(key).ok())
}

/// Resolve the effective config: defaults, then file, then environment.
///
/// A file that cannot be read is logged and skipped so the tour still runs
/// against the defaults with the environment applied.
pub fn resolve_config(lookup: impl Fn(&str) -> Option<String>) -> BookstoreConfig {
    let from_file = match lookup(CONFIG_PATH_ENV) {
        Some(path) => ConfigManager::load_config_from(Path::new(&path)),
        None => ConfigManager::new().and_then(|manager| manager.load_config()),
    };

    let base = from_file.unwrap_or_else(|err| {
        log::warn!("Failed to load config, using defaults: {err:#}");
        BookstoreConfig::default()
    });

    base.with_env_overrides(lookup)
}
