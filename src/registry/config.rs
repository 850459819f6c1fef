use crate::registry::types::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("orgadmin");
    Ok(app_config_dir.join("config.jsonc"))
}

pub fn load_config() -> Result<AppConfig> {
    read_config(&get_config_path()?)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    Ok(config)
}
