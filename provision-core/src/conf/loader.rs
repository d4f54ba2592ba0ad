use crate::conf::ConfigError;
use crate::conf::types::{ApiConfig, ConfigFile, MongoConfig, ServerConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Everything a configuration directory holds once setup has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub mongo: MongoConfig,
}

pub fn load_config(dir: &Path) -> Result<GeneratedConfig, ConfigError> {
    Ok(GeneratedConfig {
        server: read_document(dir, ConfigFile::Server)?,
        api: read_document(dir, ConfigFile::Api)?,
        mongo: read_document(dir, ConfigFile::Mongo)?,
    })
}

fn read_document<T: DeserializeOwned>(dir: &Path, file: ConfigFile) -> Result<T, ConfigError> {
    let path = dir.join(file.file_name());

    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;

    tracing::debug!(path = %path.display(), "loaded config document");
    serde_json::from_str(&contents).map_err(|e| ConfigError::parse(&path, e))
}
