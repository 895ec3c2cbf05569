use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::constants::tmdb;
use crate::services::LookupConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub store_path: String,

    pub log_level: String,

    /// Warn after every save that the store is a plain local file.
    pub persistence_notice: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            store_path: "movie_database.json".to_string(),
            log_level: "info".to_string(),
            persistence_notice: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// Deployment-level key. Overridden by `TMDB_API_KEY` and `--api-key`.
    pub api_key: String,

    pub base_url: String,

    pub language: String,

    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: tmdb::API_BASE.to_string(),
            language: tmdb::DEFAULT_LANGUAGE.to_string(),
            request_timeout_seconds: 10,
        }
    }
}

impl TmdbConfig {
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("movietracker").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".movietracker").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.store_path.trim().is_empty() {
            anyhow::bail!("Store path cannot be empty");
        }

        url::Url::parse(&self.tmdb.base_url)
            .with_context(|| format!("Invalid TMDB base URL: {}", self.tmdb.base_url))?;

        if self.tmdb.request_timeout_seconds == 0 {
            anyhow::bail!("TMDB request timeout must be > 0");
        }

        Ok(())
    }

    /// Picks the API key: session value first, then the environment, then the
    /// config file. Blank values are skipped.
    #[must_use]
    pub fn resolve_api_key(&self, session_key: Option<&str>, env_key: Option<&str>) -> Option<String> {
        [session_key, env_key, Some(self.tmdb.api_key.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|k| !k.is_empty())
            .map(str::to_string)
    }

    #[must_use]
    pub fn lookup_config(&self, session_key: Option<&str>) -> LookupConfig {
        let env_key = std::env::var(tmdb::API_KEY_ENV).ok();
        LookupConfig::new(
            self.resolve_api_key(session_key, env_key.as_deref()),
            self.tmdb.language.clone(),
        )
    }
}
