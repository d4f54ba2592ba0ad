//! Interactive generation of the configuration directory.
//!
//! Each `collect_*` step asks for one document's worth of answers and returns
//! the finished struct; [`run`] strings them together and writes the files.

mod api;
mod cert;
mod mongo;
mod server;
#[cfg(test)]
mod tests;

pub use api::collect_api_config;
pub use cert::{
    AttemptLimit, CERT_DIR_PROMPT, CertDirStatus, CertPaths, FULLCHAIN_FILE, PRIVATE_KEY_FILE,
    acquire_cert_dir, inspect_cert_dir,
};
pub use mongo::collect_mongo_config;
pub use server::collect_server_config;

use crate::conf::{ConfigError, ConfigFile, ensure_config_dir, write_document};
use crate::console::Console;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_DIR: &str = "config";

const BANNER: &str = "Setting up server configuration files";

#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub config_dir: PathBuf,
    pub cert_attempts: AttemptLimit,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            cert_attempts: AttemptLimit::Unbounded,
        }
    }
}

/// Where each document ended up.
#[derive(Debug, Clone)]
pub struct SetupReport {
    pub created_dir: bool,
    pub server: PathBuf,
    pub api: PathBuf,
    pub mongo: PathBuf,
}

/// Run the whole question sequence and write `server.json`, `api.json` and
/// `mongo.json`, in that order.
///
/// Each document is written as soon as its answers are in, so an error part way
/// through leaves the earlier files on disk.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &SetupOptions,
) -> Result<SetupReport, ConfigError> {
    console.say(BANNER)?;
    console.say("=".repeat(60))?;

    let dir = &options.config_dir;
    let created_dir = ensure_config_dir(dir)?;

    let server = collect_server_config(console, options.cert_attempts)?;
    let server = write_document(dir, ConfigFile::Server, &server)?;

    let api = collect_api_config(console)?;
    let api = write_document(dir, ConfigFile::Api, &api)?;

    let mongo = collect_mongo_config(console)?;
    let mongo = write_document(dir, ConfigFile::Mongo, &mongo)?;

    Ok(SetupReport {
        created_dir,
        server,
        api,
        mongo,
    })
}
