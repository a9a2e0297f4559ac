//! Global gameday configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/gameday";
static DEFAULT_WIDGET_API_BASE: &str = "https://discord.com/api";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_widget_api_base() -> String {
    DEFAULT_WIDGET_API_BASE.to_string()
}

fn is_default_widget_api_base(s: &String) -> bool {
    s == DEFAULT_WIDGET_API_BASE
}

/// Global configuration at ~/.config/gameday/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct GamedayConfig {
    /// Directory holding the appointment slot file.
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Base URL for the guild widget endpoint.
    #[serde(
        default = "default_widget_api_base",
        skip_serializing_if = "is_default_widget_api_base"
    )]
    pub widget_api_base: String,
}

impl GamedayConfig {
    pub fn config_path() -> StoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StoreError::Config("Could not determine config directory".into()))?
            .join("gameday");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented-out default file on first run.
    pub fn load() -> StoreResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: GamedayConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data directory in usable form, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Path of the appointment slot file.
    pub fn slot_path(&self) -> PathBuf {
        self.data_path().join("appointments.json")
    }

    /// Save the current config to ~/.config/gameday/config.toml
    pub fn save(&self) -> StoreResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| StoreError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| StoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> StoreResult<()> {
        let contents = format!(
            "\
# gameday configuration

# Where your appointments are stored:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Base URL for the guild widget endpoint:
# widget_api_base = \"{DEFAULT_WIDGET_API_BASE}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| StoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

impl Default for GamedayConfig {
    fn default() -> Self {
        GamedayConfig {
            data_dir: default_data_dir(),
            widget_api_base: default_widget_api_base(),
        }
    }
}
