//! Coefficient domains.
//!
//! A `Ring` is `Z` or `Z/n`, extended by free parameters and optionally
//! quotiented by a single defining relation:
//!
//! | modulus | relation | ring |
//! |---|---|---|
//! | 0 | none | `Z` |
//! | 6 | none | `Z/6` |
//! | 3 | none | `GF(3)` |
//! | 3 | `a**2 + 1` | `GF(3)[a]/(a**2 + 1)` (the field with 9 elements) |
//!
//! Irreducibility of the relation is the caller's responsibility: a ring
//! with prime modulus whose variables are all bound by the relation is
//! treated as a field.

use std::fmt;

use num_traits::{One, Zero};
use rand::Rng;
use strata_integers::{is_prime, Integer};
use strata_poly::{DistPoly, Symbol};

use crate::{Point, Relation, RingError};

/// Bound on the absolute value of random integers sampled from `Z`.
pub const RANDOM_BOUND: i64 = 100;

/// A coefficient domain.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ring {
    vars: Vec<Symbol>,
    modulus: Integer,
    rel: Option<Relation>,
}

impl Ring {
    /// Creates a ring over the parameters `vars`, with the given modulus
    /// (`0` for none) and optional relation.
    ///
    /// The variables of the relation are added to `vars`.
    #[must_use]
    pub fn new(vars: Vec<Symbol>, modulus: Integer, rel: Option<Relation>) -> Self {
        let mut vars = vars;
        if let Some(rel) = &rel {
            for v in rel.poly().used_vars() {
                if !vars.contains(&v) {
                    vars.push(v);
                }
            }
        }
        Self {
            vars,
            modulus: modulus.abs(),
            rel,
        }
    }

    /// Returns the ring of integers.
    #[must_use]
    pub fn integers() -> Self {
        Self::new(Vec::new(), Integer::zero(), None)
    }

    /// Returns the parameters of this ring.
    #[must_use]
    pub fn vars(&self) -> &[Symbol] {
        &self.vars
    }

    /// Returns the modulus, `0` when there is none.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Returns the defining relation.
    #[must_use]
    pub fn rel(&self) -> Option<&Relation> {
        self.rel.as_ref()
    }

    /// Returns true if every parameter is bound by the relation.
    fn all_bound(&self) -> bool {
        self.vars
            .iter()
            .all(|v| self.rel.as_ref().is_some_and(|r| r.var() == v))
    }

    /// Returns true if this ring is a field.
    #[must_use]
    pub fn is_field(&self) -> bool {
        is_prime(&self.modulus) && self.all_bound()
    }

    /// Returns true if this ring has finitely many elements.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        !self.modulus.is_zero() && self.all_bound()
    }

    /// Returns the number of elements, `p^deg(rel)`.
    ///
    /// # Errors
    ///
    /// Returns `NotFinite` for infinite rings.
    pub fn number(&self) -> Result<Integer, RingError> {
        if !self.is_finite() {
            return Err(RingError::NotFinite(self.to_string()));
        }
        Ok(self.modulus.pow(self.degree()))
    }

    /// Returns the degree of the relation, 1 when there is none.
    fn degree(&self) -> u32 {
        self.rel.as_ref().map_or(1, Relation::degree)
    }

    /// Reduces a raw polynomial into canonical form: coefficients modulo
    /// the modulus, then modulo the relation.
    #[must_use]
    pub fn reduce(&self, rep: &DistPoly) -> DistPoly {
        let r = rep.rem_coeffs(&self.modulus);
        match &self.rel {
            Some(rel) => rel.reduce(&r, &self.modulus),
            None => r,
        }
    }

    /// Enumerates the elements of this ring.
    ///
    /// `Z` is enumerated as `0, 1, -1, 2, -2, ...` without end. Finite rings
    /// yield `p^deg` elements; for an extension the element with index `k`
    /// has the base-`p` digits of `k` as its coefficients in the relation
    /// variable, lowest power first.
    ///
    /// # Errors
    ///
    /// Returns `NotEnumerable` when the ring has free parameters or is an
    /// extension of `Z`.
    pub fn it_elements(&self) -> Result<Elements, RingError> {
        if !self.all_bound() || (self.modulus.is_zero() && self.rel.is_some()) {
            return Err(RingError::NotEnumerable(self.to_string()));
        }
        let state = if self.modulus.is_zero() {
            ElementsState::Integers { k: Integer::zero() }
        } else {
            ElementsState::Finite {
                index: Integer::zero(),
                count: self.modulus.pow(self.degree()),
            }
        };
        Ok(Elements {
            modulus: self.modulus.clone(),
            var: self.rel.as_ref().map(|r| r.var().clone()),
            state,
        })
    }

    /// Enumerates all points over `vars` with coordinates in this ring.
    ///
    /// The first variable varies slowest. With no variables, the single
    /// empty point is produced.
    ///
    /// # Errors
    ///
    /// Returns `NotFinite` for infinite rings.
    pub fn it_points(&self, vars: &[Symbol]) -> Result<Points, RingError> {
        if !self.is_finite() {
            return Err(RingError::NotFinite(self.to_string()));
        }
        Ok(Points {
            elements: self.it_elements()?.collect(),
            vars: vars.to_vec(),
            counters: vec![0; vars.len()],
            done: false,
        })
    }

    /// Samples a random element.
    ///
    /// Integers are drawn from `[-RANDOM_BOUND, RANDOM_BOUND]`, residues
    /// uniformly from `[0, modulus)`, once per power of the relation
    /// variable.
    pub fn random_element<R: Rng>(&self, rng: &mut R) -> DistPoly {
        let sample = |rng: &mut R| {
            if self.modulus.is_zero() {
                Integer::new(rng.gen_range(-RANDOM_BOUND..=RANDOM_BOUND))
            } else {
                random_below(rng, &self.modulus)
            }
        };
        match &self.rel {
            None => DistPoly::from_int(sample(rng), self.vars.clone()),
            Some(rel) => {
                let a = DistPoly::var(rel.var().clone());
                let mut element = DistPoly::zero(self.vars.clone());
                for i in 0..rel.degree() {
                    element = &element + &a.pow(i).mul_scalar(&sample(rng));
                }
                element
            }
        }
    }
}

/// Samples an integer uniformly (up to a negligible bias) from `[0, bound)`.
fn random_below<R: Rng>(rng: &mut R, bound: &Integer) -> Integer {
    if let Some(b) = bound.to_u64() {
        return Integer::from(rng.gen_range(0..b));
    }
    // 64 extra bits keep the bias below 2^-64
    let limbs = bound.bit_len() / 64 + 2;
    let mut acc = Integer::zero();
    let shift = Integer::one() + Integer::from(u64::MAX);
    for _ in 0..limbs {
        acc = acc * &shift + Integer::from(rng.gen::<u64>());
    }
    acc.rem_euclid(bound)
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modulus.is_zero() {
            write!(f, "Z")?;
        } else if is_prime(&self.modulus) {
            write!(f, "GF({})", self.modulus)?;
        } else {
            write!(f, "Z/{}", self.modulus)?;
        }
        if !self.vars.is_empty() {
            let names: Vec<_> = self.vars.iter().map(Symbol::name).collect();
            write!(f, "[{}]", names.join(", "))?;
        }
        if let Some(rel) = &self.rel {
            write!(f, "/({rel})")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
enum ElementsState {
    Integers { k: Integer },
    Finite { index: Integer, count: Integer },
}

/// Iterator over the elements of a ring, see [`Ring::it_elements`].
#[derive(Clone, Debug)]
pub struct Elements {
    modulus: Integer,
    var: Option<Symbol>,
    state: ElementsState,
}

impl Iterator for Elements {
    type Item = DistPoly;

    fn next(&mut self) -> Option<DistPoly> {
        match &mut self.state {
            ElementsState::Integers { k } => {
                // 0, 1, -1, 2, -2, ...
                let two = Integer::new(2);
                let n = if k.is_even() {
                    -(&*k / &two)
                } else {
                    (&*k + &Integer::one()) / two
                };
                *k = &*k + &Integer::one();
                Some(DistPoly::constant(n))
            }
            ElementsState::Finite { index, count } => {
                if *index >= *count {
                    return None;
                }
                let mut digits = index.clone();
                *index = &*index + &Integer::one();

                let Some(var) = &self.var else {
                    return Some(DistPoly::constant(digits));
                };
                let a = DistPoly::var(var.clone());
                let mut element = DistPoly::zero(vec![var.clone()]);
                let mut power = 0u32;
                while !digits.is_zero() {
                    let digit = digits.rem_euclid(&self.modulus);
                    element = &element + &a.pow(power).mul_scalar(&digit);
                    digits = digits / &self.modulus;
                    power += 1;
                }
                Some(element)
            }
        }
    }
}

/// Iterator over the points of a finite ring, see [`Ring::it_points`].
#[derive(Clone, Debug)]
pub struct Points {
    elements: Vec<DistPoly>,
    vars: Vec<Symbol>,
    counters: Vec<usize>,
    done: bool,
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done || (self.elements.is_empty() && !self.vars.is_empty()) {
            return None;
        }
        let point = self
            .vars
            .iter()
            .zip(&self.counters)
            .map(|(v, &i)| (v.clone(), self.elements[i].clone()))
            .collect();

        // Odometer step, last variable fastest
        self.done = true;
        for i in (0..self.counters.len()).rev() {
            self.counters[i] += 1;
            if self.counters[i] < self.elements.len() {
                self.done = false;
                break;
            }
            self.counters[i] = 0;
        }
        Some(point)
    }
}
