mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Interactively generate server.json, api.json and mongo.json
    Init {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Give up after this many rejected certificate directories
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_cert_attempts: Option<u64>,
    },

    /// Validate a generated config directory and exit
    Check {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Print issues without colors
        #[arg(long, conflicts_with = "json")]
        plain: bool,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the generated configuration
    Dump {
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Init {
            path,
            max_cert_attempts,
        } => init(path, max_cert_attempts),
        ConfigCmd::Check { path, plain, json } => {
            let format = if json {
                ReportFormat::Json
            } else if plain {
                ReportFormat::Plain
            } else {
                ReportFormat::Pretty
            };
            check(path, format)
        }
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
    }
}
