//! Errors raised by domain construction and enumeration.

use strata_poly::Symbol;
use thiserror::Error;

/// Errors from building or querying a domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// The leading coefficient of a relation is not invertible.
    #[error("leading coefficient of `{0}` is not a unit")]
    NonUnitLeadingCoefficient(String),

    /// A relation has no variable of positive degree.
    #[error("relation `{0}` is constant")]
    ConstantRelation(String),

    /// The domain has no element enumeration (free parameters or an
    /// infinite algebraic extension).
    #[error("elements of {0} cannot be enumerated")]
    NotEnumerable(String),

    /// The operation needs a finite domain.
    #[error("{0} is not finite")]
    NotFinite(String),

    /// A coefficient relation binds a variable that is an indeterminate.
    #[error("relation variable `{0}` is an indeterminate of the ring")]
    RelationOverIndeterminate(Symbol),
}
