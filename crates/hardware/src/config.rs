//! Configuration system for the CISC-16-A machine model.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline values reproducing the stock boot routine.
//! 2. **Structures:** Hierarchical config for general, display, and boot settings.
//! 3. **Loading:** Parsing from a JSON string or file.
//!
//! The hardware itself (address space, MMIO window, reset values) is fixed and
//! lives in [`crate::common::constants`]; only the observable boot script and
//! logging are configurable. Use `Config::default()` for the stock machine.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;
use crate::common::constants::{DISPLAY_COLUMNS, DISPLAY_ROWS};

/// Default configuration constants.
mod defaults {
    /// Banner written to the first display row at boot.
    pub const BANNER: &str = "CISC-16-A OS";

    /// Shell prompt written to the second display row at boot.
    pub const PROMPT: &str = "> ";
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Display geometry.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Boot routine text.
    #[serde(default)]
    pub boot: BootConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the text is not valid JSON for `Config`.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigUnavailable`] if the file cannot be read, or
    /// [`SimError::InvalidConfig`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log every display write at `debug` level instead of `trace`.
    #[serde(default)]
    pub trace_writes: bool,
}

/// Text display geometry.
///
/// The grid always starts at `0x8000`; a grid larger than the mapped window is
/// clamped to it.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Characters per row.
    #[serde(default = "DisplayConfig::default_columns")]
    pub columns: usize,
    /// Number of rows.
    #[serde(default = "DisplayConfig::default_rows")]
    pub rows: usize,
}

impl DisplayConfig {
    const fn default_columns() -> usize {
        DISPLAY_COLUMNS
    }

    const fn default_rows() -> usize {
        DISPLAY_ROWS
    }

    /// Number of character cells in the grid.
    pub const fn cells(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: DISPLAY_COLUMNS,
            rows: DISPLAY_ROWS,
        }
    }
}

/// Text written by the boot routine.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BootConfig {
    /// Welcome banner, written at the start of row 0.
    #[serde(default = "BootConfig::default_banner")]
    pub banner: String,
    /// Shell prompt, written at the start of row 1.
    #[serde(default = "BootConfig::default_prompt")]
    pub prompt: String,
}

impl BootConfig {
    fn default_banner() -> String {
        defaults::BANNER.to_string()
    }

    fn default_prompt() -> String {
        defaults::PROMPT.to_string()
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            banner: Self::default_banner(),
            prompt: Self::default_prompt(),
        }
    }
}
