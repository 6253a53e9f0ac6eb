use std::path::PathBuf;

use seven_row_common::config::Validate;
use seven_row_common::game::Difficulty;
use seven_row_common::session::{GameMode, PacingSettings};
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "seven_row_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// `path` overrides the default location next to the executable.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub pacing: PacingSettings,
    #[serde(default)]
    pub last_mode: Option<GameMode>,
    #[serde(default)]
    pub last_difficulty: Option<Difficulty>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.pacing.validate()
    }
}
