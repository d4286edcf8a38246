//! Configuration types for the lcdsim monitor.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Dimensions;

/// Monitor configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Emulated panel settings
    pub display: DisplaySettings,
    /// Command log settings
    pub log: LogSettings,
    /// Serial link settings (consumed by the transport, not the core)
    pub link: LinkSettings,
}

impl MonitorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: MonitorConfig =
            serde_yaml::from_str(yaml).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.display.rows == 0 || self.display.cols == 0 {
            return Err(crate::Error::InvalidDimensions {
                rows: self.display.rows,
                cols: self.display.cols,
            });
        }

        if self.link.baud_rate == 0 {
            return Err(crate::Error::Config("link.baud_rate must be > 0".to_string()));
        }

        match self.link.parity.as_str() {
            "none" | "even" | "odd" => {}
            other => {
                return Err(crate::Error::Config(format!(
                    "link.parity must be none, even or odd (got '{other}')"
                )));
            }
        }

        Ok(())
    }
}

/// Emulated panel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Panel rows
    pub rows: u16,
    /// Panel columns
    pub cols: u16,
}

impl DisplaySettings {
    /// The configured panel dimensions.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let dims = Dimensions::default();
        Self {
            rows: dims.rows,
            cols: dims.cols,
        }
    }
}

/// Command log settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Retention capacity per log; oldest entries are dropped first.
    /// 0 keeps every entry for the life of the session.
    pub max_entries: usize,
}

/// Serial link settings.
///
/// Descriptive only from the core's point of view: the transport layer opens
/// the port with these values, the decoder never looks at them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Line speed in baud
    pub baud_rate: u32,
    /// Data bits per character
    pub data_bits: u8,
    /// Stop bits
    pub stop_bits: u8,
    /// Parity: none, even or odd
    pub parity: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            baud_rate: 460_800,
            data_bits: 8,
            stop_bits: 1,
            parity: "none".to_string(),
        }
    }
}
