use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cartpolar_core::transform::WarpOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transform: WarpOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Quality used when the output file name ends in .jpg or .jpeg
    pub jpeg_quality: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { jpeg_quality: 90 }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Get the default config path (~/.config/cartpolar/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cartpolar").join("config.toml"))
    }

    /// Load the config named on the command line, else the default path if
    /// it exists, else defaults.
    ///
    /// An explicit path must load. A broken file at the default path only
    /// logs a warning.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) => {
                warn!("{e:#}; using defaults");
                Ok(Self::default())
            }
        }
    }
}
