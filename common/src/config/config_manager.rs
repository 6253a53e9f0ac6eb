use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config; writes go through validation first.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    /// Returns the cached config, loading it on first use. A missing source yields the default.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PacingSettings;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager() -> ConfigManager<MemoryProvider, PacingSettings> {
        ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_gives_default() {
        assert_eq!(manager().get_config().unwrap(), PacingSettings::default());
    }

    #[test]
    fn test_set_then_get_returns_saved_value() {
        let manager = manager();
        let pacing = PacingSettings::immediate();
        manager.set_config(&pacing).unwrap();
        assert_eq!(manager.get_config().unwrap(), pacing);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let manager = manager();
        let pacing = PacingSettings {
            human_vs_computer_delay_ms: 0,
            computer_vs_computer_delay_ms: u64::MAX,
        };
        let err = manager.set_config(&pacing).unwrap_err();
        assert!(err.starts_with("Config validation error"));
        assert!(manager.config_content_provider.content.borrow().is_none());
    }

    #[test]
    fn test_invalid_stored_content_is_rejected() {
        let manager = manager();
        manager
            .config_content_provider
            .set_config_content("human_vs_computer_delay_ms: 10\ncomputer_vs_computer_delay_ms: 99999999\n")
            .unwrap();
        assert!(manager.get_config().is_err());
    }
}
