use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "promptforge";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Directory holding the dropdown state file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Ask before deleting a dropdown from an interactive terminal
    #[serde(default = "default_true")]
    pub confirm_deletes: bool,
    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            confirm_deletes: true,
            color: true,
        }
    }
}

/// Names accepted by the settings commands
pub const SETTING_NAMES: &[&str] = &["data-dir", "confirm-deletes", "color"];

impl Settings {
    pub fn get(&self, name: &str) -> Result<String> {
        match name {
            "data-dir" => Ok(self
                .data_dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default()),
            "confirm-deletes" => Ok(self.confirm_deletes.to_string()),
            "color" => Ok(self.color.to_string()),
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "data-dir" => {
                let value = value.trim();
                self.data_dir = if value.is_empty() { None } else { Some(PathBuf::from(value)) };
            }
            "confirm-deletes" => self.confirm_deletes = parse_bool(name, value)?,
            "color" => self.color = parse_bool(name, value)?,
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }

    pub fn reset(&mut self, name: &str) -> Result<()> {
        let defaults = Settings::default();
        match name {
            "data-dir" => self.data_dir = defaults.data_dir,
            "confirm-deletes" => self.confirm_deletes = defaults.confirm_deletes,
            "color" => self.color = defaults.color,
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => anyhow::bail!("Invalid value for {}: '{}'. Must be true or false.", name, value),
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join(APP_DIR)
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(format!(".{}", APP_DIR))
        };
        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Default location of the state file when no data dir is configured
    pub fn default_data_dir() -> Result<PathBuf> {
        match dirs::data_dir() {
            Some(dir) => Ok(dir.join(APP_DIR)),
            None => Self::config_dir(),
        }
    }

    /// Resolve the data directory: explicit override, then settings, then default
    pub fn data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        match &self.settings.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::default_data_dir(),
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
                info!("Created config directory: {:?}", parent);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }
}
