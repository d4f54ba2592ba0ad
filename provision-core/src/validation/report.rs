use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The document an issue was found in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Origin {
    pub file: PathBuf,
}

impl Origin {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub origin: Origin,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub(crate) fn error(&mut self, message: String, origin: &Origin, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            origin: origin.clone(),
            help,
        });
    }

    fn warning(&mut self, message: String, origin: &Origin, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            origin: origin.clone(),
            help,
        });
    }

    pub fn render_json(&self) -> serde_json::Result<()> {
        let json = ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        };

        println!("{}", serde_json::to_string_pretty(&json)?);
        Ok(())
    }

    pub fn render_plain(&self) {
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            println!(
                "{}:{}: {}",
                issue.origin.file.display(),
                severity,
                issue.message
            );

            if let Some(help) = &issue.help {
                println!("  help: {}", help);
            }
        }
    }

    pub fn render_pretty(&self) {
        if self.has_violations() {
            println!(
                "configuration check found {} errors, {} warnings\n",
                self.errors.len(),
                self.warnings.len()
            );
        }

        let mut by_file = std::collections::BTreeMap::new();
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            by_file
                .entry(&issue.origin.file)
                .or_insert(Vec::new())
                .push(issue);
        }

        for (file, issues) in by_file {
            println!("{}", file.display());

            for issue in issues {
                match issue.severity {
                    Severity::Error => {
                        println!("  {}: {}", "error".red().bold(), issue.message);
                    }
                    Severity::Warning => {
                        println!("  {}: {}", "warning".yellow().bold(), issue.message);
                    }
                }

                if let Some(help) = &issue.help {
                    println!("  {}: {}", "help".cyan(), help);
                }

                println!();
            }
        }
    }
}

/// Server document
impl ValidationReport {
    pub fn missing_cert_file(&mut self, path: &str, origin: &Origin) {
        self.error(
            format!("certificate file does not exist: {}", path),
            origin,
            Some("Run `provision config init` again with a complete certificate directory.".to_string()),
        );
    }

    pub fn cert_path_not_a_file(&mut self, path: &str, origin: &Origin) {
        self.error(format!("certificate path is not a file: {}", path), origin, None);
    }

    pub fn invalid_identifier(&mut self, field: &str, origin: &Origin) {
        // The value is a secret, so only the field name is reported.
        self.error(format!("{} is not a version 4 UUID", field), origin, None);
    }

    pub fn unexpected_cipher_key(&mut self, origin: &Origin) {
        self.error(
            "cipherKey does not match the built-in cipher list".to_string(),
            origin,
            None,
        );
    }

    pub fn zero_port(&mut self, field: &str, origin: &Origin) {
        self.warning(
            format!("{} is 0, the OS will pick a random port", field),
            origin,
            None,
        );
    }

    pub fn http_and_https_share_port(&mut self, port: u16, origin: &Origin) {
        self.warning(
            format!("httpPort and httpsPort are both {}", port),
            origin,
            None,
        );
    }

    pub fn hsts_disabled(&mut self, origin: &Origin) {
        self.warning(
            "hstsTimeLimit is 0, browsers will not remember the HTTPS policy".to_string(),
            origin,
            None,
        );
    }
}

/// Api document
impl ValidationReport {
    pub fn empty_api_key(&mut self, field: &str, origin: &Origin) {
        self.warning(format!("{} is empty", field), origin, None);
    }
}

/// Mongo document
impl ValidationReport {
    pub fn invalid_mongo_url(&mut self, url: &str, origin: &Origin) {
        self.error(
            format!("mongo url must start with mongodb://: {}", url),
            origin,
            None,
        );
    }
}
