//! Error types for mapping configuration

use thiserror::Error;

/// A configuration value was rejected when it was accepted, never later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The mapping token is not one of the eight known selector values.
    #[error("unknown channel mapping '{0}' (expected one of: none, cyan, magenta, yellow, cyan+magenta, cyan+yellow, magenta+yellow, black)")]
    UnknownMapping(String),

    /// Export quality outside the accepted range.
    #[error("quality {value} out of range (expected {min}..={max})")]
    InvalidQuality { value: u32, min: u32, max: u32 },
}
