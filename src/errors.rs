/*!
 * Error types for the explainofun application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions. The template selection
 * engine itself is total and never produces these.
 */

use thiserror::Error;

/// Errors that can occur while building or running a generation request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The topic was empty or only whitespace
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// A reading level identifier that is not one of the known modes
    #[error("Unknown explanation mode: {0}")]
    InvalidMode(String),

    /// A persona identifier that is not one of the known personas
    #[error("Unknown persona: {0}")]
    InvalidPersona(String),

    /// The generator could not produce a result
    #[error("Generator unavailable: {0}")]
    Unavailable(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error in the configuration file or its values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the generator
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// The caller tried to explain an empty topic
    #[error("Please enter a topic to explain")]
    EmptyTopic,

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

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
