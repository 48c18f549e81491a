//! Point substitution.

use std::iter;

use rustc_hash::FxHashMap;
use strata_poly::{DistPoly, Symbol};

use crate::{Poly, PolyError, Result, Substitution};

impl Poly {
    /// Substitutes values for the indeterminates.
    ///
    /// A sequence is padded with zeros or truncated to the number of
    /// indeterminates; a mapping or point binds missing indeterminates to
    /// zero and ignores other variables. Parameters are never substituted.
    ///
    /// # Errors
    ///
    /// Returns `TypeKind` for `Constant` and `Integer` values, which have
    /// no indeterminates to bind.
    pub fn subs(&self, point: impl Into<Substitution>) -> Result<Poly> {
        if self.kind().is_scalar() {
            return Err(PolyError::TypeKind(format!(
                "cannot substitute points to {}",
                self.kind()
            )));
        }
        let zero = || DistPoly::zero(Vec::new());
        let indets = self.indet_vars().iter().cloned();
        let values: FxHashMap<Symbol, DistPoly> = match point.into() {
            Substitution::Sequence(vals) => indets
                .zip(vals.into_iter().chain(iter::repeat_with(zero)))
                .collect(),
            Substitution::Mapping(map) => indets
                .map(|v| {
                    let value = map.get(&v).cloned().unwrap_or_else(zero);
                    (v, value)
                })
                .collect(),
            Substitution::Point(p) => indets
                .map(|v| {
                    let value = p.get(&v).cloned().unwrap_or_else(zero);
                    (v, value)
                })
                .collect(),
        };
        Ok(self.wrap(&self.as_dp().subs(&values)))
    }
}
