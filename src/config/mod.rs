use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;

use paths::get_config_path;
pub use paths::get_log_dir_path;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory that is scanned for city CSV datasets.
    pub data_dir: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: ".".to_string(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location. A
    /// missing config file is not an error; the defaults apply.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `RIDESTATS_DATA_DIR` - Override the dataset directory
    /// - `RIDESTATS_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(data_dir) = std::env::var("RIDESTATS_DATA_DIR") {
            config.data_dir = data_dir;
        }

        if let Ok(log_file_path) = std::env::var("RIDESTATS_LOG_FILE") {
            config.log_file_path = Some(log_file_path);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.data_dir.trim().is_empty() {
            return Err(AppError::config_error("data_dir must not be empty"));
        }
        if let Some(log_path) = &self.log_file_path
            && log_path.trim().is_empty()
        {
            return Err(AppError::config_error("log_file_path must not be empty when set"));
        }
        Ok(())
    }

    /// Saves the configuration to the default config file location,
    /// creating the parent directory when needed.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();

        if let Some(parent) = Path::new(&config_path).parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(&config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Prints the current configuration and its file location.
    pub async fn display() -> Result<(), AppError> {
        let config = Self::load().await?;
        println!("Config file location: {}", get_config_path());
        println!("Dataset directory: {}", config.data_dir);
        match &config.log_file_path {
            Some(path) => println!("Log file: {path}"),
            None => println!("Log file: <default> ({}/ridestats.log)", get_log_dir_path()),
        }
        Ok(())
    }
}
