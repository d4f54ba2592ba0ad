mod report;
mod validate;

pub use report::{Origin, Severity, ValidationIssue, ValidationReport};
pub use validate::validate;
