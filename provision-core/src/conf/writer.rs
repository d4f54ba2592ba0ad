use crate::conf::ConfigError;
use crate::conf::types::ConfigFile;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Make sure the config directory exists. Returns `true` if it had to be created.
pub fn ensure_config_dir(dir: &Path) -> Result<bool, ConfigError> {
    if dir.is_dir() {
        return Ok(false);
    }

    if dir.exists() {
        return Err(ConfigError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    tracing::info!(dir = %dir.display(), "created config directory");
    Ok(true)
}

/// Serialize `value` as JSON into `dir/<file>`, replacing whatever was there.
pub fn write_document<T: Serialize>(
    dir: &Path,
    file: ConfigFile,
    value: &T,
) -> Result<PathBuf, ConfigError> {
    let path = dir.join(file.file_name());

    let json = serde_json::to_string_pretty(value).map_err(|source| ConfigError::Serialize {
        file: file.file_name(),
        source,
    })?;

    fs::write(&path, json).map_err(|source| ConfigError::write_file(&path, source))?;

    tracing::info!(path = %path.display(), "wrote config document");
    Ok(path)
}
