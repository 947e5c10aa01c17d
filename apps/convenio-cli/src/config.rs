//! Batch configuration file.
//!
//! ```toml
//! [engine]
//! min_text_chars = 50
//!
//! [engine.geography]
//! provincia = "Salta"
//!
//! [output]
//! dependencias = "Rectorado|UNSa|rectorado|Argentina|Salta|Salta|true"
//! ```

use anyhow::{bail, Context};
use convenio_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Value written to the `dependencias` column of every row
    #[serde(default = "default_dependencias")]
    pub dependencias: String,
}

fn default_dependencias() -> String {
    "Rectorado|UNSa|rectorado|Argentina|Salta|Salta|true".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dependencias: default_dependencias(),
        }
    }
}

impl CliConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.engine.validate()?;
        if config.output.dependencias.trim().is_empty() {
            bail!("output.dependencias must not be empty");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(
            config.output.dependencias,
            "Rectorado|UNSa|rectorado|Argentina|Salta|Salta|true"
        );
    }

    #[test]
    fn test_engine_and_output_tables() {
        let config = CliConfig::from_str(
            r#"
            [engine]
            min_text_chars = 120

            [engine.geography]
            localidad = "Orán"

            [output]
            dependencias = "Facultad|FCEx|facultad|Argentina|Salta|Salta|true"
            "#,
        )
        .unwrap();

        assert_eq!(config.engine.min_text_chars, 120);
        assert_eq!(config.engine.geography.localidad, "Orán");
        assert_eq!(config.engine.geography.provincia, "Salta");
        assert!(config.output.dependencias.starts_with("Facultad|"));
    }

    #[test]
    fn test_invalid_engine_settings_are_rejected() {
        assert!(CliConfig::from_str("[engine]\nmin_text_chars = 0").is_err());
        assert!(CliConfig::from_str("[output]\ndependencias = \"\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file("/nonexistent/convenios.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
