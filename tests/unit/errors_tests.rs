/*!
 * Tests for error types and conversions
 */

use explainofun::errors::{AppError, GenerationError};

#[test]
fn test_generationError_invalidMode_shouldDisplayCorrectly() {
    let error = GenerationError::InvalidMode("eli99".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Unknown explanation mode"));
    assert!(display.contains("eli99"));
}

#[test]
fn test_generationError_invalidPersona_shouldDisplayCorrectly() {
    let error = GenerationError::InvalidPersona("pirate".to_string());
    assert_eq!(format!("{}", error), "Unknown persona: pirate");
}

#[test]
fn test_appError_fromGenerationError_shouldWrapCorrectly() {
    let app_error: AppError = GenerationError::Unavailable("offline".to_string()).into();
    let display = format!("{}", app_error);
    assert!(display.contains("Generation error"));
    assert!(display.contains("offline"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref msg) if msg == "something odd"));
}
