//! Error types for polynomial values.

use strata_domains::RingError;
use thiserror::Error;

/// Errors raised by polynomial construction, arithmetic and algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// An argument of the wrong kind.
    #[error("type error: {0}")]
    TypeKind(String),

    /// The domain lacks a property the operation needs.
    #[error("domain error: {0}")]
    Domain(String),

    /// A structurally invalid numeric argument.
    #[error("value error: {0}")]
    Value(String),

    /// An operand that cannot be coerced to a polynomial.
    #[error("unsupported operand type(s) for {0}")]
    UnsupportedOperand(String),

    /// A deliberately unimplemented branch.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Randomized factorization hit its attempt cap.
    #[error("no complete splitting found after {0} attempts")]
    Exhausted(usize),
}

impl From<RingError> for PolyError {
    fn from(e: RingError) -> Self {
        PolyError::Domain(e.to_string())
    }
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
