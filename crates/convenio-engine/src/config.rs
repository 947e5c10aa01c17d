//! Engine configuration, loadable from TOML.
//!
//! Every key is optional; an empty document yields the defaults.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum trimmed character count for a document to be processed (default: 50)
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,
    /// Input is cut to this many bytes before extraction (default: 2 MB)
    #[serde(default = "default_max_text_bytes")]
    pub max_text_bytes: usize,
    /// Optional wall-clock budget for a single extraction call
    #[serde(default)]
    pub time_budget_ms: Option<u64>,
    /// Location stamped on every institution
    #[serde(default)]
    pub geography: Geography,
}

fn default_min_text_chars() -> usize {
    50
}

fn default_max_text_bytes() -> usize {
    2_000_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_text_chars: default_min_text_chars(),
            max_text_bytes: default_max_text_bytes(),
            time_budget_ms: None,
            geography: Geography::default(),
        }
    }
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min_text_chars == 0 {
            bail!("min_text_chars must be at least 1");
        }
        if self.max_text_bytes < self.min_text_chars {
            bail!(
                "max_text_bytes ({}) is smaller than min_text_chars ({})",
                self.max_text_bytes,
                self.min_text_chars
            );
        }
        if self.time_budget_ms == Some(0) {
            bail!("time_budget_ms must be positive when set");
        }
        self.geography.validate()
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }
}

/// Country, province and locality assigned to every extracted institution.
///
/// The corpus comes from a single province, so the text is never consulted
/// for these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geography {
    #[serde(default = "default_pais")]
    pub pais: String,
    #[serde(default = "default_provincia")]
    pub provincia: String,
    #[serde(default = "default_localidad")]
    pub localidad: String,
}

fn default_pais() -> String {
    "Argentina".to_string()
}

fn default_provincia() -> String {
    "Salta".to_string()
}

fn default_localidad() -> String {
    "Salta".to_string()
}

impl Default for Geography {
    fn default() -> Self {
        Self {
            pais: default_pais(),
            provincia: default_provincia(),
            localidad: default_localidad(),
        }
    }
}

impl Geography {
    fn validate(&self) -> anyhow::Result<()> {
        for (key, value) in [
            ("pais", &self.pais),
            ("provincia", &self.provincia),
            ("localidad", &self.localidad),
        ] {
            if value.trim().is_empty() {
                bail!("geography.{} must not be empty", key);
            }
        }
        Ok(())
    }
}
