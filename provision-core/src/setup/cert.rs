use crate::conf::ConfigError;
use crate::console::Console;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const CERT_DIR_PROMPT: &str = "SSL Certificate Directory Location:";
pub const PRIVATE_KEY_FILE: &str = "privkey.pem";
pub const FULLCHAIN_FILE: &str = "fullchain.pem";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertPaths {
    pub dir: PathBuf,
    pub priv_key: PathBuf,
    pub fullchain: PathBuf,
}

/// Outcome of checking one candidate certificate directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertDirStatus {
    Valid(CertPaths),
    DirectoryMissing,
    /// The directory exists but `privkey.pem` or `fullchain.pem` is not in it.
    KeysMissing,
}

/// How many rejected answers [`acquire_cert_dir`] tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptLimit {
    /// Keep asking until a valid directory is given or input closes.
    #[default]
    Unbounded,
    AtMost(usize),
}

impl AttemptLimit {
    fn allows(self, rejected: usize) -> bool {
        match self {
            AttemptLimit::Unbounded => true,
            AttemptLimit::AtMost(max) => rejected < max,
        }
    }
}

pub fn inspect_cert_dir(dir: &Path) -> CertDirStatus {
    if !dir.is_dir() {
        return CertDirStatus::DirectoryMissing;
    }

    let priv_key = dir.join(PRIVATE_KEY_FILE);
    let fullchain = dir.join(FULLCHAIN_FILE);

    if !priv_key.is_file() || !fullchain.is_file() {
        return CertDirStatus::KeysMissing;
    }

    CertDirStatus::Valid(CertPaths {
        dir: dir.to_path_buf(),
        priv_key,
        fullchain,
    })
}

/// Ask for the certificate directory until [`inspect_cert_dir`] accepts it.
///
/// Closing input cancels with [`ConfigError::Cancelled`].
pub fn acquire_cert_dir<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    limit: AttemptLimit,
) -> Result<CertPaths, ConfigError> {
    let mut rejected = 0;

    loop {
        let answer = console.prompt(CERT_DIR_PROMPT)?;
        let dir = PathBuf::from(answer.trim());

        match inspect_cert_dir(&dir) {
            CertDirStatus::Valid(paths) => return Ok(paths),
            CertDirStatus::DirectoryMissing => {
                tracing::debug!(dir = %dir.display(), "certificate directory does not exist");
                console.say("Directory does not exist.")?;
                console.say("Please enter a valid directory.")?;
            }
            CertDirStatus::KeysMissing => {
                tracing::debug!(dir = %dir.display(), "certificate directory is missing pem files");
                console.say("Private and Fullchain Key does not exist in the specified directory.")?;
            }
        }

        rejected += 1;
        if !limit.allows(rejected) {
            return Err(ConfigError::CertDirAttemptsExhausted { attempts: rejected });
        }
    }
}
