//! Error types for vtstyle.

use thiserror::Error;

/// Main error type for vtstyle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Unrecognized format name
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Unrecognized color name
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// Input line was not valid UTF-8
    #[error("Invalid UTF-8 in input: {0}")]
    Decoding(#[from] std::string::FromUtf8Error),

    /// Input stream ended before any byte was read
    #[error("Input stream closed with no data")]
    EmptyInput,

    /// Geometry was requested but the stream is not an interactive terminal
    #[error("Not a terminal")]
    NoTerminal,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
