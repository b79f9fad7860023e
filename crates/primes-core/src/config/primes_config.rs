//! Top-level configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ReportConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the root directory.
pub const PROJECT_CONFIG_FILE: &str = "primes.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PRIMES_*`)
/// 3. Project config (`primes.toml` in project root)
/// 4. User config (`~/.primes/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrimesConfig {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_bound: Option<u64>,
    pub gap_chart_limit: Option<usize>,
    pub twin_display_limit: Option<usize>,
}

impl PrimesConfig {
    /// Load configuration with 4-layer resolution, reading the user layer
    /// from `~/.primes/config.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_user_dir(root, dirs_path().as_deref(), cli_overrides)
    }

    /// Same as [`PrimesConfig::load`] with an explicit user config directory.
    /// `None` skips the user layer.
    pub fn load_with_user_dir(
        root: &Path,
        user_dir: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_dir.map(|d| d.join("config.toml")) {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        // Unreadable user config is not fatal.
                        tracing::warn!(error = %err, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            max_bound = config.analysis.effective_max_bound(),
            gap_chart_limit = config.report.effective_gap_chart_limit(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PrimesConfig) -> Result<(), ConfigError> {
        if config.analysis.max_bound == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.max_bound".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.report.gap_chart_limit == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.gap_chart_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.report.min_buckets == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.min_buckets".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let (min, max) = (
            config.report.effective_min_buckets(),
            config.report.effective_max_buckets(),
        );
        if min > max {
            return Err(ConfigError::ValidationFailed {
                field: "report.max_buckets".to_string(),
                message: format!("must be at least min_buckets ({min}), got {max}"),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PrimesConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PrimesConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut PrimesConfig, other: &PrimesConfig) {
        // Analysis
        if other.analysis.max_bound.is_some() {
            base.analysis.max_bound = other.analysis.max_bound;
        }

        // Report
        if other.report.gap_chart_limit.is_some() {
            base.report.gap_chart_limit = other.report.gap_chart_limit;
        }
        if other.report.min_buckets.is_some() {
            base.report.min_buckets = other.report.min_buckets;
        }
        if other.report.max_buckets.is_some() {
            base.report.max_buckets = other.report.max_buckets;
        }
        if other.report.twin_display_limit.is_some() {
            base.report.twin_display_limit = other.report.twin_display_limit;
        }
        if other.report.cumulative_points.is_some() {
            base.report.cumulative_points = other.report.cumulative_points;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PRIMES_ANALYSIS_MAX_BOUND`, `PRIMES_REPORT_GAP_CHART_LIMIT`, etc.
    fn apply_env_overrides(config: &mut PrimesConfig) {
        if let Ok(val) = std::env::var("PRIMES_ANALYSIS_MAX_BOUND") {
            if let Ok(v) = val.parse::<u64>() {
                config.analysis.max_bound = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PRIMES_REPORT_GAP_CHART_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.report.gap_chart_limit = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PRIMES_REPORT_TWIN_DISPLAY_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.report.twin_display_limit = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PrimesConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_bound {
            config.analysis.max_bound = Some(v);
        }
        if let Some(v) = cli.gap_chart_limit {
            config.report.gap_chart_limit = Some(v);
        }
        if let Some(v) = cli.twin_display_limit {
            config.report.twin_display_limit = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.primes/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".primes"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
