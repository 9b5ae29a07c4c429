//! Configuration error types.
//!
//! The simulation itself never fails: bad commands are ignored and
//! out-of-range motion is clamped. Only loading a [`crate::Tuning`] or
//! parsing runner arguments can go wrong.

use std::fmt;

/// Errors raised while loading or validating game configuration
#[derive(Debug)]
pub enum TuningError {
    /// The JSON document could not be parsed
    Parse(serde_json::Error),

    /// A constant is outside the range the simulation is stable in.
    UnsafeConstant {
        /// Field name (for logging)
        name: &'static str,
        /// The rejected value
        value: f32,
        /// Human-readable description of the safe range
        safe_range: &'static str,
    },

    /// A command-line argument was missing its value or malformed
    BadArgument { flag: String, reason: String },

    /// The configuration file could not be read
    Io(std::io::Error),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {}", e),
            TuningError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "tuning value '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            TuningError::BadArgument { flag, reason } => {
                write!(f, "bad argument '{}': {}", flag, reason)
            }
            TuningError::Io(e) => write!(f, "could not read tuning file: {}", e),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

/// Convenience alias
pub type TuningResult<T> = Result<T, TuningError>;
