//! Error types for color parsing and validation.

use thiserror::Error;

/// Color validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("{component} out of range: {value} (max {max})")]
    OutOfRange {
        component: &'static str,
        value: u32,
        max: u32,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
