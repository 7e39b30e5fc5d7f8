//! Configuration for flatkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a flatkv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the flat data file, one `key value` pair per line
    pub data_path: PathBuf,

    // -------------------------------------------------------------------------
    // Auto-save Configuration
    // -------------------------------------------------------------------------
    /// Save the table every N processed input lines (0 disables auto-save)
    pub autosave_interval: u64,

    // -------------------------------------------------------------------------
    // Pattern Matching Configuration
    // -------------------------------------------------------------------------
    /// Treat a bare literal KEYS pattern (no `*` anywhere) as an exact key
    /// match instead of matching nothing
    pub literal_exact_match: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./flatkv.db"),
            autosave_interval: 5,
            literal_exact_match: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    /// Set the auto-save interval in processed lines (0 disables)
    pub fn autosave_interval(mut self, lines: u64) -> Self {
        self.config.autosave_interval = lines;
        self
    }

    /// Treat bare literal KEYS patterns as exact key matches
    pub fn literal_exact_match(mut self, enabled: bool) -> Self {
        self.config.literal_exact_match = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
