//! Quiz settings stored in `{data_dir}/settings.yaml`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use densquiz_core::RoundConfig;
use densquiz_core::kde::DEFAULT_BANDWIDTH;
use densquiz_core::sampling::DEFAULT_SAMPLE_SIZE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "Settings::default_bandwidth")]
    pub bandwidth: f64,
    /// Fixed session seed; a fresh one is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_size: Self::default_sample_size(),
            bandwidth: Self::default_bandwidth(),
            seed: None,
        }
    }
}

/// Error types for settings file operations
#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "IO error: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SettingsError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    fn default_sample_size() -> usize {
        DEFAULT_SAMPLE_SIZE
    }

    fn default_bandwidth() -> f64 {
        DEFAULT_BANDWIDTH
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("settings.yaml")
    }

    /// Read settings; a missing file yields the defaults.
    pub fn load(data_dir: &Path) -> Result<Self, SettingsError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| SettingsError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| SettingsError::Parse(format!("Failed to parse settings: {}", e)))
    }

    /// Load settings, falling back to defaults on any error.
    ///
    /// When no settings file exists yet, the defaults are written out so the
    /// player has a file to edit.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let first_run = !Self::path(data_dir).exists();
        let settings = Self::load(data_dir).unwrap_or_else(|e| {
            tracing::warn!("Using default settings: {e}");
            Self::default()
        });

        if first_run {
            if let Err(e) = settings.save(data_dir) {
                tracing::warn!("Could not write default settings: {e}");
            }
        }
        settings
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), SettingsError> {
        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| SettingsError::Serialize(format!("Failed to serialize settings: {}", e)))?;
        fs::create_dir_all(data_dir)
            .and_then(|_| write_atomic(&Self::path(data_dir), &yaml))
            .map_err(|e| SettingsError::Io(format!("Failed to write settings: {}", e)))
    }

    /// Apply command-line overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        sample_size: Option<usize>,
        bandwidth: Option<f64>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(n) = sample_size {
            self.sample_size = n;
        }
        if let Some(h) = bandwidth {
            self.bandwidth = h;
        }
        self
    }

    pub fn round_config(&self) -> RoundConfig {
        RoundConfig {
            sample_size: self.sample_size,
            bandwidth: self.bandwidth,
        }
    }
}

/// Write to a sibling temp file, then rename over the target.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("yaml.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)
}
