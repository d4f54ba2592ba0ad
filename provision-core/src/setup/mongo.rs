use crate::conf::{ConfigError, MongoConfig};
use crate::console::Console;
use std::io::{BufRead, Write};

pub fn collect_mongo_config<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<MongoConfig, ConfigError> {
    let port: u16 = console.prompt_number("Mongo Port:")?;

    tracing::debug!(port, "collected mongo configuration");
    Ok(MongoConfig::for_local_port(port))
}
