mod config;

pub(crate) use seven_row_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{Config, get_config_manager};
