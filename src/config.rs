use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::slots::AcceptanceWindow;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
}

/// Acceptable local hours, inclusive at both ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { start_hour: 9, end_hour: 20 }
    }
}

impl WindowConfig {
    pub fn to_window(&self) -> Result<AcceptanceWindow> {
        AcceptanceWindow::new(self.start_hour, self.end_hour)
            .context("Invalid acceptance window in config file")
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        // Read and parse config file
        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Serialize and save config
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "meetfind", "meetfind")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.window.start_hour, 9);
        assert_eq!(config.window.end_hour, 20);
    }

    #[test]
    fn test_window_config_validation() {
        let config = WindowConfig { start_hour: 22, end_hour: 8 };
        assert!(config.to_window().is_err());

        let config = WindowConfig::default();
        let window = config.to_window().unwrap();
        assert_eq!(window.start(), 9);
        assert_eq!(window.end(), 20);
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        // Create temporary directory
        let temp_dir = tempdir()?;

        // Set up temporary config directory
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        // Create and save config
        let config = Config { window: WindowConfig { start_hour: 8, end_hour: 18 } };
        config.save()?;

        // Load config
        let loaded = Config::load()?;

        // Verify loaded config matches saved config
        assert_eq!(loaded.window.start_hour, 8);
        assert_eq!(loaded.window.end_hour, 18);

        Ok(())
    }
}
