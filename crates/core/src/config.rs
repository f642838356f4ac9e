//! Application configuration.
//!
//! Settings come from an optional TOML file under the user's config
//! directory, then `VEHICLE_DEMO_*` environment variables. A missing file is
//! not an error; nothing is ever written back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::fleet::{default_fleet, VehicleSpec};

/// Location of the config file relative to the platform config directory.
pub const DEFAULT_CONFIG_PATH: &str = "vehicle-demo/config.toml";

/// Prefix for environment overrides, e.g. `VEHICLE_DEMO_OUTPUT=json`.
pub const ENV_PREFIX: &str = "VEHICLE_DEMO";

/// How the transcript is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Runtime settings for the demonstration binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Transcript format.
    pub output: OutputFormat,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Append diagnostics to this file in addition to stderr.
    pub log_file: Option<PathBuf>,
    /// Vehicles to exercise. Empty means the built-in fleet.
    pub fleet: Vec<VehicleSpec>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            log_filter: "warn".to_string(),
            log_file: None,
            fleet: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Default config file path under the user's config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_CONFIG_PATH)
    }

    /// Load from [`AppConfig::default_path`] plus environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load from `path` (if it exists) plus environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path.as_ref(), Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with(path: &Path, env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Vehicles to run: the configured list, or the built-in fleet when none is set.
    pub fn fleet_specs(&self) -> Vec<VehicleSpec> {
        if self.fleet.is_empty() {
            default_fleet()
        } else {
            self.fleet.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, fs};
    use tempfile::tempdir;

    use crate::vehicle::VehicleKind;

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_from(dir.path().join("absent.toml"))?;

        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_filter, "warn");
        assert!(config.log_file.is_none());
        assert_eq!(config.fleet_specs(), default_fleet());
        Ok(())
    }

    #[test]
    fn file_overrides_output_and_fleet() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"output = "json"
log_filter = "vehicles_core=debug"

[[fleet]]
kind = "motorcycle"
brand = "Ducati"
model = "Monster"
year = 2024
max_speed = 240
engine_size = 937
style = "Naked"
"#,
        )?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "vehicles_core=debug");

        let specs = config.fleet_specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].kind(), VehicleKind::Motorcycle);
        assert_eq!(
            specs[0].build().info(),
            "🏍️ 2024 Ducati Monster (Max Speed: 240 km/h) | Engine: 937cc | Style: Naked"
        );
        Ok(())
    }

    fn env_overrides(pairs: &[(&str, &str)]) -> Environment {
        let vars = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn environment_overrides_defaults() -> Result<()> {
        let dir = tempdir()?;
        let env = env_overrides(&[
            ("VEHICLE_DEMO_OUTPUT", "json"),
            ("VEHICLE_DEMO_LOG_FILTER", "debug"),
        ]);

        let config = AppConfig::load_with(&dir.path().join("absent.toml"), env)?;
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.fleet_specs(), default_fleet());
        Ok(())
    }

    #[test]
    fn environment_wins_over_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = \"json\"\nlog_filter = \"info\"\n")?;
        let env = env_overrides(&[("VEHICLE_DEMO_OUTPUT", "text")]);

        let config = AppConfig::load_with(&path, env)?;
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_filter, "info");
        Ok(())
    }

    #[test]
    fn unrelated_variables_are_ignored() -> Result<()> {
        let dir = tempdir()?;
        let env = env_overrides(&[("OTHER_OUTPUT", "json")]);

        let config = AppConfig::load_with(&dir.path().join("absent.toml"), env)?;
        assert_eq!(config.output, OutputFormat::Text);
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = [unterminated")?;

        assert!(AppConfig::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn unknown_output_format_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = \"yaml\"\n")?;

        assert!(AppConfig::load_from(&path).is_err());
        Ok(())
    }
}
