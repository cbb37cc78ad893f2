//! Error type for scene generation
//!
//! Generation is pure and performs no I/O, so the only failure is a
//! malformed scene or group parameter

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// A group or scene parameter that cannot describe a particle set
    /// (negative count, non-finite radius/speed, wrong vector length, ...)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl GenerationError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Fail with `InvalidParameter` unless `value` is finite
pub(crate) fn ensure_finite(what: &str, value: f64) -> Result<(), GenerationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GenerationError::invalid(format!("{what} must be finite, got {value}")))
    }
}
