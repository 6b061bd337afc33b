//! Configuration loading for the discretization client

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

/// Environment variable selecting the backend host. Empty means same-origin.
pub const API_URL_ENV: &str = "PHYSRL_API_URL";

/// Configuration for the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL; empty sends requests to `origin`
    pub base_url: String,
    /// Origin the front-end is served from
    pub origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            origin: "http://127.0.0.1:3000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Base URL requests are actually sent to
    pub fn resolved_base_url(&self) -> &str {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            self.origin.trim()
        } else {
            base_url
        }
    }

    pub fn is_same_origin(&self) -> bool {
        self.base_url.trim().is_empty()
    }
}

impl ClientConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();
        let mut config = Self::load_from(config_path.as_deref())?;

        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            tracing::debug!("{} overrides api.base_url", API_URL_ENV);
            config.api.base_url = base_url;
        }

        Ok(config)
    }

    /// Load configuration from an explicit file (if any) plus `PHYSRL_*` style
    /// environment variables
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::<config::builder::DefaultState>::default();

        if let Some(path) = path {
            tracing::info!("Loading config from: {:?}", path);
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        } else {
            tracing::info!("No config file found, using defaults");
        }

        // e.g. PHYSRL_API__ORIGIN
        builder = builder.add_source(
            Environment::with_prefix("PHYSRL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Render as TOML, as written by `physrl config init`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Find the configuration file
    pub fn find_config_file() -> Option<PathBuf> {
        // Check in order: PHYSRL_CONFIG env, ./physrl.toml, ~/.config/physrl/physrl.toml
        if let Ok(path) = std::env::var("PHYSRL_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("physrl.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".config").join("physrl").join("physrl.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_same_origin() {
        let config = ClientConfig::default();
        assert!(config.api.is_same_origin());
        assert_eq!(config.api.resolved_base_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let api = ApiConfig {
            base_url: "https://physrl.example.com".to_string(),
            ..ApiConfig::default()
        };
        assert!(!api.is_same_origin());
        assert_eq!(api.resolved_base_url(), "https://physrl.example.com");
    }

    #[test]
    fn test_blank_base_url_is_same_origin() {
        let api = ApiConfig {
            base_url: "   ".to_string(),
            origin: "http://localhost:8080".to_string(),
        };
        assert_eq!(api.resolved_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://10.0.0.5:8000\"").unwrap();

        let config = ClientConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.api.origin, "http://127.0.0.1:3000");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = ClientConfig::load_from(Some(&path)).unwrap();
        assert!(config.api.is_same_origin());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[api]"));
        assert!(rendered.contains("origin = \"http://127.0.0.1:3000\""));

        let parsed: ClientConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.api.origin, config.api.origin);
    }
}
