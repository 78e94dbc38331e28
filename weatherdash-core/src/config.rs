use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{model::UnitSystem, provider::weatherapi::DEFAULT_BASE_URL};

/// Environment variable that overrides the API key stored on disk.
pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_units = "imperial"
/// default_location = "Oslo"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Override for the provider endpoint, mostly useful against a local mock.
    pub base_url: Option<String>,

    pub default_units: Option<UnitSystem>,

    pub default_location: Option<String>,
}

/// Settings the fetcher is built from, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Empty when nothing was configured.
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherdash", "weatherdash")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve against the process environment. Call once, at startup.
    pub fn resolve(&self) -> ResolvedConfig {
        self.resolve_with_env(std::env::var(API_KEY_ENV).ok())
    }

    /// Environment key wins over the file; an unset key resolves to `""`.
    pub fn resolve_with_env(&self, env_api_key: Option<String>) -> ResolvedConfig {
        let api_key = env_api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
            .unwrap_or_default();

        let base_url = self.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        ResolvedConfig { api_key, base_url }
    }

    pub fn units_or_default(&self) -> UnitSystem {
        self.default_units.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_sentinel_key_and_default_url() {
        let resolved = Config::default().resolve_with_env(None);

        assert_eq!(resolved.api_key, "");
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn env_key_overrides_file_key() {
        let cfg = Config { api_key: Some("FILE_KEY".into()), ..Config::default() };

        let resolved = cfg.resolve_with_env(Some("ENV_KEY".into()));
        assert_eq!(resolved.api_key, "ENV_KEY");
    }

    #[test]
    fn blank_env_key_falls_back_to_file() {
        let cfg = Config { api_key: Some("FILE_KEY".into()), ..Config::default() };

        let resolved = cfg.resolve_with_env(Some("  ".into()));
        assert_eq!(resolved.api_key, "FILE_KEY");
    }

    #[test]
    fn units_default_to_metric() {
        assert_eq!(Config::default().units_or_default(), UnitSystem::Metric);

        let cfg = Config { default_units: Some(UnitSystem::Imperial), ..Config::default() };
        assert_eq!(cfg.units_or_default(), UnitSystem::Imperial);
    }

    #[test]
    fn parses_toml_with_lowercase_units() {
        let cfg: Config = toml::from_str(
            r#"
            api_key = "abc"
            default_units = "imperial"
            default_location = "Oslo"
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.api_key.as_deref(), Some("abc"));
        assert_eq!(cfg.default_units, Some(UnitSystem::Imperial));
        assert_eq!(cfg.default_location.as_deref(), Some("Oslo"));
        assert_eq!(cfg.base_url, None);
    }

    #[test]
    fn missing_file_loads_default() {
        let path = std::env::temp_dir().join("weatherdash-test-does-not-exist/config.toml");
        let cfg = Config::load_from(&path).expect("missing file is not an error");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = std::env::temp_dir().join(format!("weatherdash-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");

        let cfg = Config {
            api_key: Some("KEY".into()),
            default_units: Some(UnitSystem::Imperial),
            ..Config::default()
        };
        cfg.save_to(&path).expect("save should succeed");

        let loaded = Config::load_from(&path).expect("load should succeed");
        assert_eq!(loaded, cfg);

        let _ = fs::remove_dir_all(&dir);
    }
}
