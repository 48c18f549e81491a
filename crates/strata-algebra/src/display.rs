//! Term iteration and rendering.

use std::fmt;

use num_traits::{One, Zero};
use strata_poly::{monomial, DistPoly, Symbol, TermOrder};

use crate::{Poly, PolyError, Result};

/// Iterator over `(exponents, coefficient)` pairs of a polynomial value in
/// lex order, greatest first.
///
/// Exponents are over the indeterminates; coefficients are raw polynomials
/// over the parameters. Every exponent vector below the degree bounds is
/// visited, so zero coefficients appear unless they are skipped.
#[derive(Clone, Debug)]
pub struct DistIter<'a> {
    rep: &'a DistPoly,
    degs: Vec<u32>,
    next: Option<Vec<u32>>,
    zero_skip: bool,
}

impl<'a> DistIter<'a> {
    fn lex(poly: &'a Poly, zero_skip: bool) -> Self {
        let degs: Vec<u32> = poly
            .indet_vars()
            .iter()
            .map(|v| u32::try_from(poly.rep.degree(v)).unwrap_or(0))
            .collect();
        Self {
            rep: &poly.rep,
            next: Some(degs.clone()),
            degs,
            zero_skip,
        }
    }

    /// Steps the odometer down, last variable fastest.
    fn advance(&self, exps: &[u32]) -> Option<Vec<u32>> {
        let i = exps.iter().rposition(|&e| e > 0)?;
        let mut next = exps.to_vec();
        next[i] -= 1;
        next[i + 1..].copy_from_slice(&self.degs[i + 1..]);
        Some(next)
    }
}

impl Iterator for DistIter<'_> {
    type Item = (Vec<u32>, DistPoly);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let exps = self.next.take()?;
            self.next = self.advance(&exps);
            let c = self.rep.coefficient(&exps);
            if self.zero_skip && c.is_zero() {
                continue;
            }
            return Some((exps, c));
        }
    }
}

fn parse_order(order: &str) -> Result<TermOrder> {
    order
        .parse()
        .map_err(|_| PolyError::TypeKind(format!("given unsupported termorder '{order}'")))
}

impl Poly {
    /// Iterates over the terms in the named order.
    ///
    /// # Errors
    ///
    /// Returns `TypeKind` for an unknown order name and `NotImplemented`
    /// for orders other than `lex`.
    pub fn it_dist(&self, order: &str, zero_skip: bool) -> Result<DistIter<'_>> {
        match parse_order(order)? {
            TermOrder::Lex => Ok(DistIter::lex(self, zero_skip)),
            other => Err(PolyError::NotImplemented(format!(
                "term iteration in '{other}' order"
            ))),
        }
    }

    /// Iterates over the terms in the named order, smallest first.
    ///
    /// # Errors
    ///
    /// Always returns `NotImplemented` for known orders.
    pub fn it_reversed_dist(&self, order: &str) -> Result<DistIter<'_>> {
        let order = parse_order(order)?;
        Err(PolyError::NotImplemented(format!(
            "reversed '{order}' iteration over {}",
            self.kind
        )))
    }

    /// Renders the value with its terms in the named order.
    ///
    /// # Errors
    ///
    /// As [`Poly::it_dist`].
    pub fn as_dist(&self, order: &str) -> Result<String> {
        Ok(render(self.it_dist(order, true)?, self.indet_vars()))
    }

    /// Renders the raw representation over all variables in the named
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `TypeKind` for an unknown order name.
    pub fn as_dist_total(&self, order: &str) -> Result<String> {
        Ok(self.rep.as_dist(parse_order(order)?))
    }
}

fn render(terms: DistIter<'_>, indets: &[Symbol]) -> String {
    let mut out = String::new();
    for (exps, c) in terms {
        let mono = monomial::render(&exps, indets);
        let negative = c
            .leading_term(TermOrder::Lex)
            .is_some_and(|(_, a)| a.is_negative());
        let c = if negative { -&c } else { c };

        let body = if mono.is_empty() {
            c.as_dist(TermOrder::Lex)
        } else if c.get_constant().is_some_and(|k| k.is_one()) {
            mono
        } else if c.is_monomial() {
            format!("{}*{mono}", c.as_dist(TermOrder::Lex))
        } else {
            format!("({})*{mono}", c.as_dist(TermOrder::Lex))
        };

        match (out.is_empty(), negative) {
            (true, true) => out.push_str("- "),
            (true, false) => {}
            (false, true) => out.push_str(" - "),
            (false, false) => out.push_str(" + "),
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(DistIter::lex(self, true), self.indet_vars()))
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self}, ", self.kind)?;
        match self.indet_vars() {
            [v] => write!(f, "{v}")?,
            vars => {
                let names: Vec<_> = vars.iter().map(Symbol::name).collect();
                write!(f, "({})", names.join(", "))?;
            }
        }
        if !self.modulus().is_zero() {
            write!(f, ", mod: {}", self.modulus())?;
        }
        if let Some(rel) = self.dom.rel() {
            write!(f, ", rel: {rel}")?;
        }
        if let Some(quo) = self.dom.quo() {
            write!(f, ", quo: {quo}")?;
        }
        f.write_str(")")
    }
}
