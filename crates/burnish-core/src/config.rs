//! Configuration file loading for burnish.
//!
//! Reads `.burnish/burnish.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the config file inside the burnish directory.
pub const CONFIG_FILE: &str = "burnish.json";

/// Top-level burnish configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnishConfig {
    /// Upper bound on convergence passes per file.
    #[serde(default = "default_max_passes")]
    pub max_passes: u32,
    /// Violation codes that are neither reported nor fixed.
    #[serde(default)]
    pub suppress: Vec<String>,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default = "default_banned_date_classes")]
    pub banned_date_classes: Vec<String>,
    /// Glob patterns excluded from directory walks.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Per-rule enable toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_true")]
    pub opening_brace: bool,
    #[serde(default = "default_true")]
    pub require_strict_types: bool,
    #[serde(default = "default_true")]
    pub short_function_spacing: bool,
    #[serde(default = "default_true")]
    pub banned_date_instantiation: bool,
    #[serde(default = "default_true")]
    pub function_comment: bool,
}

/// Errors from explicit config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn default_true() -> bool {
    true
}
fn default_max_passes() -> u32 {
    10
}
fn default_banned_date_classes() -> Vec<String> {
    ["Carbon", "CarbonImmutable", "DateTime", "DateTimeImmutable"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            opening_brace: true,
            require_strict_types: true,
            short_function_spacing: true,
            banned_date_instantiation: true,
            function_comment: true,
        }
    }
}

impl Default for BurnishConfig {
    fn default() -> Self {
        Self {
            max_passes: default_max_passes(),
            suppress: vec![],
            rules: RulesConfig::default(),
            banned_date_classes: default_banned_date_classes(),
            ignore_patterns: vec![],
        }
    }
}

impl BurnishConfig {
    /// Load configuration from `burnish.json` inside the given burnish directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(burnish_dir: &Path) -> Self {
        let config_path = burnish_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::from_file(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file, surfacing every failure.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pass ceiling, never below one.
    pub fn effective_max_passes(&self) -> u32 {
        self.max_passes.max(1)
    }
}
