use crate::console::Console;
use crate::setup::{self, AttemptLimit, SetupOptions};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn init(path: PathBuf, max_cert_attempts: Option<u64>) -> Result<()> {
    let cert_attempts = match max_cert_attempts {
        Some(max) => AttemptLimit::AtMost(usize::try_from(max).unwrap_or(usize::MAX)),
        None => AttemptLimit::Unbounded,
    };

    let options = SetupOptions {
        config_dir: path,
        cert_attempts,
    };

    let mut console = Console::stdio();
    let report = setup::run(&mut console, &options).with_context(|| {
        format!(
            "failed to set up configuration in {}",
            options.config_dir.display()
        )
    })?;

    // User feedback
    println!();
    if report.created_dir {
        println!("✔ Created {}", options.config_dir.display());
    }
    println!("✔ Wrote:");
    println!("  - {}", report.server.display());
    println!("  - {}", report.api.display());
    println!("  - {}", report.mongo.display());
    println!();
    println!("Next steps:");
    println!("  provision config check {}", options.config_dir.display());

    Ok(())
}
