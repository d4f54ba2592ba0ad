use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // Filesystem
    //-------------------------------------------------------------------------
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} exists and is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Serialization
    //-------------------------------------------------------------------------
    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {file}: {source}")]
    Serialize {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    //-------------------------------------------------------------------------
    // Operator input
    //-------------------------------------------------------------------------
    #[error("terminal I/O failed: {source}")]
    Terminal {
        #[source]
        source: std::io::Error,
    },

    #[error("input closed while waiting for '{prompt}'")]
    Cancelled { prompt: String },

    #[error("invalid number for '{prompt}': '{input}'")]
    InvalidNumber { prompt: String, input: String },

    #[error("no valid certificate directory after {attempts} attempts")]
    CertDirAttemptsExhausted { attempts: usize },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn terminal(source: std::io::Error) -> Self {
        Self::Terminal { source }
    }
}
