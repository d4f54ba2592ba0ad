use clap::{Parser, Subcommand};
use provision_core::cli::config::{self, ConfigCmd};
use provision_core::logging::init_logging;
use provision_core::setup::DEFAULT_CONFIG_DIR;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "provision",
    version,
    about = "Provision: first-run configuration generator for the API server"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate, validate or print the configuration directory
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Some(Command::Config { cmd }) => config::run(cmd),

        // Bare invocation behaves like `config init` in ./config
        None => config::init(PathBuf::from(DEFAULT_CONFIG_DIR), None),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
