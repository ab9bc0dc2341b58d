use crate::error::{CeleritasError, CeleritasResult};
use crate::utils::{SuggestionMatcher, DEFAULT_MAX_DISTANCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "CELERITAS_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Suggestions
    pub suggestion_threshold: usize,
    pub case_sensitive: bool,

    // Arithmetic
    pub zero_on_failure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestion_threshold: DEFAULT_MAX_DISTANCE,
            case_sensitive: true,
            zero_on_failure: false,
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> CeleritasResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`
    pub fn load_from(path: &Path) -> CeleritasResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        reject_directory(path)?;

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Keep the broken file around for inspection
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> CeleritasResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> CeleritasResult<()> {
        reject_directory(path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Suggestion matcher tuned by this config
    pub fn matcher(&self) -> SuggestionMatcher {
        SuggestionMatcher::new(self.suggestion_threshold, self.case_sensitive)
    }
}

fn reject_directory(path: &Path) -> CeleritasResult<()> {
    if path.is_dir() {
        return Err(CeleritasError::Config(format!(
            "{} is a directory, not a config file",
            path.display()
        )));
    }
    Ok(())
}

pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("celeritas")
        .join("config.json")
}
