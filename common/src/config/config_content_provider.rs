use std::io::ErrorKind;
use std::path::PathBuf;

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is nothing stored yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("seven_row_{}_{}.yaml", tag, random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(temp_path("missing"));
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_written_content_is_read_back() {
        let path = temp_path("written");
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("seed: 5\n").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("seed: 5\n".to_string())));
        let _ = std::fs::remove_file(path);
    }
}
