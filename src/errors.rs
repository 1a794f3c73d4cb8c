//! Custom error types for coordinate handling

use std::fmt;
use std::io;

/// Geodesy-specific error types
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Input text did not contain two well-formed DMS tokens
    InvalidDms(String),
    /// A captured numeric field could not be parsed
    InvalidNumber(String),
    /// Hemisphere letter does not match the token position
    HemisphereMismatch(String),
    /// Latitude or longitude outside its valid range
    OutOfRange {
        /// Which angle was out of range ("latitude" or "longitude")
        what: &'static str,
        /// The offending value in decimal degrees
        value: f64,
    },
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidDms(text) => write!(f, "Invalid DMS coordinate: {}", text),
            GeoError::InvalidNumber(field) => write!(f, "Invalid numeric field: {}", field),
            GeoError::HemisphereMismatch(msg) => write!(f, "Hemisphere mismatch: {}", msg),
            GeoError::OutOfRange { what, value } => write!(f, "{} out of range: {}", what, value),
            GeoError::GenericError(msg) => write!(f, "Geodesy error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for geodesy operations
pub type GeoResult<T> = Result<T, GeoError>;
