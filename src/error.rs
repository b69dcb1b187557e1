//! Error types for the threshold crate.
//!
//! The detector itself never fails: every sample of the value type is a
//! valid input.  Errors only come from the layers around it, i.e. loading a
//! [`ThresholdConfig`](crate::config::ThresholdConfig) and driving output
//! pins.  All variants are `Copy` so they can be passed around a control
//! loop without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A threshold configuration was rejected.
    Config(ConfigError),
    /// An output adapter failed to apply a state change.
    Output(OutputError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A bound does not compare equal to itself (e.g. a NaN float), so no
    /// sample could ever be ordered against it.
    Unordered { field: &'static str },
    /// The two bounds cannot be compared with each other.
    InvalidBand,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unordered { field } => write!(f, "`{field}` is not an ordered value"),
            Self::InvalidBand => write!(f, "low and high bounds are not comparable"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    /// The output pin rejected a level change.
    PinWriteFailed,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinWriteFailed => write!(f, "pin write failed"),
        }
    }
}

impl From<OutputError> for Error {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
