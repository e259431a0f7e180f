/*!
 * Tests for error types and conversions
 */

use cardshift::errors::{AppError, ConfigError, RewriteError};

#[test]
fn test_rewriteError_readFailed_shouldDisplayCorrectly() {
    let error = RewriteError::ReadFailed("dia1.html".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to read target"));
    assert!(display.contains("dia1.html"));
}

#[test]
fn test_configError_invalid_shouldDisplayCorrectly() {
    let error = ConfigError::Invalid("empty target list".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid configuration"));
    assert!(display.contains("empty target list"));
}

#[test]
fn test_appError_fromRewriteError_shouldWrap() {
    let error: AppError = RewriteError::WriteFailed("dia2.html".to_string()).into();
    let display = format!("{}", error);
    assert!(display.contains("Rewrite error"));
    assert!(display.contains("dia2.html"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error: AppError = io_error.into();
    let display = format!("{}", error);
    assert!(display.contains("File error"));
    assert!(display.contains("no such file"));
}
