use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::HeatmapConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads and saves [`HeatmapConfig`] as TOML.
pub struct ConfigService;

impl ConfigService {
    /// Platform config location, e.g. `~/.config/change-heatmap/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "change-heatmap")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<HeatmapConfig> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(HeatmapConfig::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        Self::parse(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))
    }

    /// Load from the platform location, or defaults when there is none.
    pub fn load_default() -> Result<HeatmapConfig> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(HeatmapConfig::default()),
        }
    }

    pub fn parse(data: &str) -> Result<HeatmapConfig> {
        let config: HeatmapConfig = toml::from_str(data).context("invalid heatmap config")?;
        Ok(config.sanitized())
    }

    pub fn save(path: &Path, config: &HeatmapConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config).context("failed to serialise config")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }
}
