//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbita crate.
///
/// Camera geometry never fails: degenerate inputs are corrected locally
/// (clamping, NaN substitution). Only the configuration surface is fallible.
#[derive(Debug)]
pub enum OrbitaError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for OrbitaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbitaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for OrbitaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
