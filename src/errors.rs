/*!
 * Error types for the vetreport library.
 *
 * This module contains custom error types for the different parts of the
 * report pipeline, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that abort report compilation entirely.
///
/// Per-item problems (an undecodable image, a structure with no stored
/// entry) never surface here; they degrade inside the compiled document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompilationError {
    /// No patient record was supplied
    #[error("Cannot compile report: patient record is missing")]
    MissingPatient,

    /// No exam record was supplied
    #[error("Cannot compile report: exam record is missing")]
    MissingExam,
}

/// Error raised when a language tag is outside the supported pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported report language: '{tag}' (expected 'pt' or 'en')")]
pub struct UnsupportedLanguageError {
    /// The tag exactly as it was received
    pub tag: String,
}

impl UnsupportedLanguageError {
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_string() }
    }
}

/// Errors that can occur when parsing an image data URL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageDataError {
    /// The string does not start with `data:` or lacks the payload separator
    #[error("Not a data URL")]
    NotDataUrl,

    /// The data URL payload is not base64 encoded
    #[error("Unsupported data URL encoding: {0}")]
    UnsupportedEncoding(String),

    /// The base64 payload could not be decoded
    #[error("Invalid base64 payload: {0}")]
    Base64(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from report compilation
    #[error("Compilation error: {0}")]
    Compilation(#[from] CompilationError),

    /// Error from language selection
    #[error("Language error: {0}")]
    Language(#[from] UnsupportedLanguageError),

    /// Error from image payload parsing
    #[error("Image error: {0}")]
    Image(#[from] ImageDataError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
