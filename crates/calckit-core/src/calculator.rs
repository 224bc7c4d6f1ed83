//! Error type for the hardened calculator paths.
//!
//! The pure functions in [`crate::geometry`] and [`crate::arithmetic`] are
//! total and never produce a `CalcError`. Errors only arise when a caller
//! opts into strict validation or checked overflow through
//! [`crate::options::Options`], or asks for an operation by an unknown name.

use crate::constants::exit_codes;

/// Error type for calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// A geometric dimension was negative or not finite under strict validation.
    #[error("invalid dimension: {name} must be a finite, non-negative number (got {value})")]
    InvalidDimension {
        /// Parameter name (`side`, `base`, `height`, `radius`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Checked integer arithmetic overflowed `i32`.
    #[error("integer overflow: {op}({a}, {b}) does not fit in i32")]
    Overflow {
        /// Operation name.
        op: &'static str,
        /// Left operand.
        a: i32,
        /// Right operand.
        b: i32,
    },

    /// No operation is registered under this name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl CalcError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::InvalidDimension { .. } | CalcError::UnknownOperation(_) => {
                exit_codes::ERROR_INVALID_INPUT
            }
            CalcError::Overflow { .. } => exit_codes::ERROR_OVERFLOW,
        }
    }
}
