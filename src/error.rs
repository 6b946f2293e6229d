//! Error handling module for the IOPS calculator
//!
//! Provides centralized error types using thiserror. Validation failures
//! (`InputError`) are recoverable and drive the re-prompt loops; everything
//! else surfaces as an `IopsCalcError`.

use thiserror::Error;

/// A rejected answer to one prompt.
///
/// The `hint` carries the rule the user broke, e.g.
/// "You must enter a number between 1 and 6."
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not a whole number (letters, signs, decimals, empty when required)
    #[error("Not a whole number - {hint}")]
    Malformed { hint: String },

    /// A number, but outside the allowed interval
    #[error("Out of range - {hint}")]
    OutOfRange { hint: String },

    /// In range, but not a multiple of the required increment
    #[error("Not a multiple of {increment} - {hint}")]
    NotIncrement { increment: u32, hint: String },
}

impl InputError {
    pub fn malformed(hint: impl Into<String>) -> Self {
        Self::Malformed { hint: hint.into() }
    }

    pub fn out_of_range(hint: impl Into<String>) -> Self {
        Self::OutOfRange { hint: hint.into() }
    }

    pub fn not_increment(increment: u32, hint: impl Into<String>) -> Self {
        Self::NotIncrement {
            increment,
            hint: hint.into(),
        }
    }

    /// The rule that was broken, without the classification prefix
    pub fn hint(&self) -> &str {
        match self {
            Self::Malformed { hint } | Self::OutOfRange { hint } | Self::NotIncrement { hint, .. } => {
                hint
            }
        }
    }
}

/// Engine catalog lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No engine with menu number {0}")]
    NotFound(u32),
}

/// Main error type for the IOPS calculator
///
/// Wrapping variants keep the wrapped error as their `source()` and do not
/// repeat its text, so `{:#}` chains print each message once.
#[derive(Error, Debug)]
pub enum IopsCalcError {
    /// IO errors (terminal reads and writes)
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// A rejected parameter in a non-interactive run
    #[error(transparent)]
    Input(#[from] InputError),

    /// JSON serialization errors
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Standard input reached EOF before a selection was complete
    #[error("Input closed before all answers were given")]
    InputClosed,
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, IopsCalcError>;
