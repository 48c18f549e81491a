//! Differentiation.

use strata_poly::Symbol;

use crate::{Poly, PolyError, Result};

/// Differentiates `f` with respect to one variable.
///
/// With no variable, differentiates with respect to the first
/// indeterminate; a value without indeterminates differentiates to zero.
///
/// # Errors
///
/// Returns `Value` if more than one variable is given.
pub fn diff(f: &Poly, vars: &[Symbol]) -> Result<Poly> {
    let var = match vars {
        [] => match f.indet_vars().first() {
            Some(v) => v.clone(),
            None => return Ok(f.scalar(0)),
        },
        [v] => v.clone(),
        _ => {
            return Err(PolyError::Value(format!(
                "can differentiate in one variable at a time, not {}",
                vars.len()
            )))
        }
    };
    let rep = f.as_dp().sort_vars(std::slice::from_ref(&var)).diff(&var);
    Ok(f.wrap(&rep))
}
