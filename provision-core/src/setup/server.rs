use crate::conf::ConfigError;
use crate::conf::ServerConfig;
use crate::conf::types::{cipher_key, hsts_seconds};
use crate::console::Console;
use crate::setup::cert::{AttemptLimit, acquire_cert_dir};
use std::io::{BufRead, Write};
use uuid::Uuid;

pub fn collect_server_config<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cert_attempts: AttemptLimit,
) -> Result<ServerConfig, ConfigError> {
    let http_port: u16 = console.prompt_number("Http Port:")?;
    let https_port: u16 = console.prompt_number("Https Port:")?;
    let monitor_port: u16 = console.prompt_number("Monitoring UDP Port:")?;

    // Shown once so the operator can record them; never logged.
    let client_id = Uuid::new_v4().to_string();
    console.say(format_args!("Client ID: {client_id}"))?;
    let admin_secret = Uuid::new_v4().to_string();
    console.say(format_args!("Admin Secret: {admin_secret}"))?;

    let hsts_days: u32 =
        console.prompt_number("Time limit for HTTP Strict Transport Security(days):")?;

    let certs = acquire_cert_dir(console, cert_attempts)?;

    tracing::debug!(
        http_port,
        https_port,
        monitor_port,
        hsts_days,
        cert_dir = %certs.dir.display(),
        "collected server configuration"
    );

    Ok(ServerConfig {
        hsts_time_limit: hsts_seconds(hsts_days),
        cipher_key: cipher_key(),
        priv_key_path: certs.priv_key.to_string_lossy().into_owned(),
        fullchain_path: certs.fullchain.to_string_lossy().into_owned(),
        http_port,
        https_port,
        monitor_port,
        client_id,
        admin_secret,
    })
}
