use crate::conf::load_config;
use crate::validation::validate;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pretty,
    Plain,
    Json,
}

pub fn check(path: PathBuf, format: ReportFormat) -> Result<()> {
    let cfg = load_config(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    let report = validate(&cfg, &path);

    match format {
        ReportFormat::Json => report.render_json()?,
        ReportFormat::Plain => report.render_plain(),
        ReportFormat::Pretty => {
            report.render_pretty();
            if !report.has_errors() {
                println!("✔ Config loaded successfully");
                println!("✔ http {} / https {}", cfg.server.http_port, cfg.server.https_port);
                println!("✔ monitor udp {}", cfg.server.monitor_port);
                println!("✔ hsts {}s", cfg.server.hsts_time_limit);
                println!("✔ mongo {}", cfg.mongo.url);
            }
        }
    }

    if report.has_errors() {
        bail!(
            "configuration in {} has {} errors",
            path.display(),
            report.errors.len()
        );
    }

    Ok(())
}
