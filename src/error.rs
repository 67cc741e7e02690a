//! Error types for qudit circuit construction
//!
//! Every failure here is a construction-time failure: the call that hit it
//! returns immediately and no circuit value is produced.

use thiserror::Error;

/// Errors raised while building, differentiating or evaluating circuits.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CircuitError {
    /// An object expected to be a qudit is of another kind.
    #[error("Expected a qudit, found {found}")]
    Kind { found: String },

    /// A type was expected to hold exactly one object.
    #[error("Expected exactly one object in {ty}, found {found}")]
    Arity { ty: String, found: usize },

    /// A type does not have the arity that was asked for.
    #[error("Expected {expected} qudits in {ty}, found {found}")]
    SizeMismatch {
        ty: String,
        expected: usize,
        found: usize,
    },

    /// A qudit dimension is below the configured minimum.
    #[error("Dimension {dim} less than the expected {min_dim}")]
    Dimension { dim: usize, min_dim: usize },

    /// Boundaries disagree at a composition point or inside a sum.
    #[error("Boundary mismatch: expected {expected}, found {found}")]
    BoundaryMismatch { expected: String, found: String },

    /// The parameter is free in a box that has no derivative rule.
    #[error("Differentiation of {name} with respect to {var} is not supported")]
    NotSupported { name: String, var: String },

    /// A cup or cap cannot be built between the given wires.
    #[error("Cannot build a cup between {left} and {right}: {reason}")]
    InvalidCup {
        left: String,
        right: String,
        reason: String,
    },

    /// A basis digit does not fit in its qudit.
    #[error("Digit {digit} out of range for a qudit of dimension {dim}")]
    InvalidDigit { digit: usize, dim: usize },

    /// A symbolic expression was evaluated without a value for a symbol.
    #[error("No value bound for symbol {0}")]
    UnboundSymbol(String),

    /// A box cannot be turned into a tensor.
    #[error("Cannot evaluate {name}: {reason}")]
    Evaluation { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CircuitError>;

impl CircuitError {
    pub(crate) fn boundary(expected: impl ToString, found: impl ToString) -> Self {
        CircuitError::BoundaryMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
