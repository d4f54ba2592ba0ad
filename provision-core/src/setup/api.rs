use crate::conf::{ApiConfig, ConfigError};
use crate::console::Console;
use std::io::{BufRead, Write};

/// Third-party credentials are taken verbatim; nothing checks them.
pub fn collect_api_config<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<ApiConfig, ConfigError> {
    Ok(ApiConfig {
        words_key: console.prompt("Words API Key :")?,
        google_project_id: console.prompt("Google Project ID:")?,
        azure_key: console.prompt("Azure Key:")?,
        yandex_key: console.prompt("Yandex Key:")?,
    })
}
