//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in a
//! config file; command-line flags take precedence over it:
//!
//! ```toml
//! # eegplot.toml
//! [plot]
//! title = "Session 02"
//! height = 900
//! downsample = 4
//! time_column = "Time"
//! ecg_millivolts = true
//! delimiter = ";"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for eegplot.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Plot-specific settings.
    #[serde(default)]
    pub plot: PlotConfig,
}

/// Settings for loading and plotting.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
    /// Figure title.
    pub title: Option<String>,

    /// Figure height in pixels.
    pub height: Option<usize>,

    /// Keep every N-th row.
    pub downsample: Option<usize>,

    /// Column to use as the time axis.
    pub time_column: Option<String>,

    /// Plot ECG and common-mode channels in mV.
    pub ecg_millivolts: Option<bool>,

    /// Field delimiter (a single ASCII character).
    pub delimiter: Option<String>,
}

impl PlotConfig {
    /// Delimiter as a byte, if one is configured.
    pub fn delimiter_byte(&self) -> Result<Option<u8>> {
        match self.delimiter.as_deref() {
            None => Ok(None),
            Some("\\t") => Ok(Some(b'\t')),
            Some(d) if d.len() == 1 && d.is_ascii() => Ok(Some(d.as_bytes()[0])),
            Some(d) => bail!("Delimiter must be a single ASCII character, got {:?}", d),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
