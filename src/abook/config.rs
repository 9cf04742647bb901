use crate::error::{AbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_BOOK_FILE: &str = "filename.json";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for abook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// Where the address book lives. Relative paths resolve against the working directory.
    #[serde(default = "default_book_file")]
    pub book_file: PathBuf,

    /// Records per page for `list`
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_book_file() -> PathBuf {
    PathBuf::from(DEFAULT_BOOK_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            book_file: default_book_file(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Keys accepted by `abook config`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    BookFile,
    PageSize,
}

impl ConfigKey {
    pub fn all() -> &'static [ConfigKey] {
        &[ConfigKey::BookFile, ConfigKey::PageSize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::BookFile => "book-file",
            ConfigKey::PageSize => "page-size",
        }
    }

    pub fn parse(key: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == key)
            .ok_or_else(|| AbookError::InvalidConfig(format!("unknown key '{}'", key)))
    }
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AbookError::Io)?;
        let config: AbookConfig =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        if config.page_size == 0 {
            return Err(AbookError::InvalidConfig(
                "page-size must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AbookError::Serialization)?;
        fs::write(config_path, content).map_err(AbookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::BookFile => self.book_file.display().to_string(),
            ConfigKey::PageSize => self.page_size.to_string(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::BookFile => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(AbookError::InvalidConfig(
                        "book-file cannot be empty".to_string(),
                    ));
                }
                self.book_file = PathBuf::from(value);
            }
            ConfigKey::PageSize => {
                self.page_size = match value.trim().parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        return Err(AbookError::InvalidConfig(format!(
                            "page-size must be a positive integer, got '{}'",
                            value
                        )))
                    }
                };
            }
        }
        Ok(())
    }
}
