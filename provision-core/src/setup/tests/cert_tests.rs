use super::{answers, write_pem_files};
use crate::conf::ConfigError;
use crate::console::Console;
use crate::setup::{AttemptLimit, CertDirStatus, acquire_cert_dir, inspect_cert_dir};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const DIR_MISSING: &str = "Directory does not exist.\nPlease enter a valid directory.\n";
const KEYS_MISSING: &str = "Private and Fullchain Key does not exist in the specified directory.\n";
const PROMPT: &str = "SSL Certificate Directory Location: ";

#[test]
fn inspect_cert_dir_reports_missing_directory() {
    let dir = tempdir().unwrap();

    let status = inspect_cert_dir(&dir.path().join("missing"));

    assert_eq!(status, CertDirStatus::DirectoryMissing);
}

#[test]
fn inspect_cert_dir_treats_a_file_as_missing_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("certs");
    fs::write(&file, "").unwrap();

    assert_eq!(inspect_cert_dir(&file), CertDirStatus::DirectoryMissing);
}

#[test]
fn inspect_cert_dir_requires_private_key() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("fullchain.pem"), "").unwrap();

    // Act
    let status = inspect_cert_dir(dir.path());

    // Assert
    assert_eq!(status, CertDirStatus::KeysMissing);
}

#[test]
fn inspect_cert_dir_requires_fullchain() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("privkey.pem"), "").unwrap();

    assert_eq!(inspect_cert_dir(dir.path()), CertDirStatus::KeysMissing);
}

#[test]
fn inspect_cert_dir_ignores_pem_files_in_subdirectories() {
    // Arrange
    let dir = tempdir().unwrap();
    let nested = dir.path().join("live");
    fs::create_dir(&nested).unwrap();
    write_pem_files(&nested);

    // Act
    let status = inspect_cert_dir(dir.path());

    // Assert
    assert_eq!(status, CertDirStatus::KeysMissing);
}

#[test]
fn inspect_cert_dir_accepts_complete_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    write_pem_files(dir.path());

    // Act
    let status = inspect_cert_dir(dir.path());

    // Assert
    match status {
        CertDirStatus::Valid(paths) => {
            assert_eq!(paths.dir, dir.path());
            assert_eq!(paths.priv_key, dir.path().join("privkey.pem"));
            assert_eq!(paths.fullchain, dir.path().join("fullchain.pem"));
        }
        other => panic!("expected valid cert dir, got {other:?}"),
    }
}

#[test]
fn acquire_cert_dir_proceeds_after_one_prompt_for_valid_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    write_pem_files(dir.path());
    let input = answers(&[dir.path().to_str().unwrap(), "unused"]);
    let mut out = Vec::new();
    let mut console = Console::new(input.as_bytes(), &mut out);

    // Act
    let paths = acquire_cert_dir(&mut console, AttemptLimit::Unbounded).unwrap();

    // Assert
    assert_eq!(paths.dir, dir.path());
    assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
}

#[test]
fn acquire_cert_dir_reprompts_until_directory_is_complete() {
    // Arrange
    let missing = tempdir().unwrap();
    let incomplete = tempdir().unwrap();
    let complete = tempdir().unwrap();
    write_pem_files(complete.path());

    let input = answers(&[
        missing.path().join("gone").to_str().unwrap(),
        incomplete.path().to_str().unwrap(),
        complete.path().to_str().unwrap(),
    ]);
    let mut out = Vec::new();
    let mut console = Console::new(input.as_bytes(), &mut out);

    // Act
    let paths = acquire_cert_dir(&mut console, AttemptLimit::Unbounded).unwrap();

    // Assert
    assert_eq!(paths.dir, complete.path());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{PROMPT}{DIR_MISSING}{PROMPT}{KEYS_MISSING}{PROMPT}")
    );
}

#[test]
fn acquire_cert_dir_trims_whitespace_around_path() {
    let dir = tempdir().unwrap();
    write_pem_files(dir.path());
    let input = format!("  {}  \n", dir.path().display());
    let mut out = Vec::new();
    let mut console = Console::new(input.as_bytes(), &mut out);

    let paths = acquire_cert_dir(&mut console, AttemptLimit::Unbounded).unwrap();

    assert_eq!(paths.dir, dir.path());
}

#[test]
fn acquire_cert_dir_gives_up_after_attempt_limit() {
    // Arrange
    let dir = tempdir().unwrap();
    let complete = tempdir().unwrap();
    write_pem_files(complete.path());
    let input = answers(&[
        dir.path().to_str().unwrap(),
        dir.path().to_str().unwrap(),
        complete.path().to_str().unwrap(),
    ]);
    let mut out = Vec::new();
    let mut console = Console::new(input.as_bytes(), &mut out);

    // Act
    let err = acquire_cert_dir(&mut console, AttemptLimit::AtMost(2)).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ConfigError::CertDirAttemptsExhausted { attempts: 2 }
    ));
}

#[test]
fn acquire_cert_dir_is_cancelled_by_closed_input() {
    // Arrange
    let input = answers(&["/definitely/not/here"]);
    let mut out = Vec::new();
    let mut console = Console::new(input.as_bytes(), &mut out);

    // Act
    let err = acquire_cert_dir(&mut console, AttemptLimit::Unbounded).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Cancelled { .. }));
    assert!(String::from_utf8(out).unwrap().contains(DIR_MISSING));
}
