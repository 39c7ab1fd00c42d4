use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const SEED_ENV_VAR: &str = "SHOWCASE_SEED";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional TOML settings for the showcase runs. Every section has a
/// default so an empty file is valid.
#[derive(Debug, Default, Deserialize)]
pub struct ShowcaseSettings {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

impl ShowcaseSettings {
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        let settings = toml::from_str(&data)?;
        Ok(settings)
    }

    /// Seed precedence: CLI flag, then the environment, then the settings
    /// file, then the built-in default.
    pub fn resolve_seed(&self, cli_seed: Option<u64>) -> u64 {
        cli_seed
            .or_else(|| {
                std::env::var(SEED_ENV_VAR)
                    .ok()
                    .and_then(|val| val.parse().ok())
            })
            .or(self.seed)
            .unwrap_or(vehicle_core::DEFAULT_SEED)
    }

    pub fn trace_filter(&self) -> Option<&str> {
        self.telemetry
            .as_ref()
            .and_then(|t| t.trace_filter.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub include_transcript: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub trace_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_parse_with_defaults() {
        let settings: ShowcaseSettings = toml::from_str("").unwrap();
        assert!(settings.seed.is_none());
        assert!(settings.report.is_none());
        assert!(settings.trace_filter().is_none());
    }

    #[test]
    fn sections_parse_when_present() {
        let settings: ShowcaseSettings = toml::from_str(
            r#"
            seed = 7

            [report]
            path = "reports/run.json"
            include_transcript = true

            [telemetry]
            trace_filter = "vehicle_core=debug"
            "#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.report.as_ref().unwrap().include_transcript);
        assert_eq!(settings.trace_filter(), Some("vehicle_core=debug"));
    }

    #[test]
    fn cli_seed_wins_over_file_seed() {
        let settings = ShowcaseSettings {
            seed: Some(9),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(Some(3)), 3);
        assert_eq!(settings.resolve_seed(None), 9);
    }
}
