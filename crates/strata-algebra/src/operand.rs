//! Inputs accepted by constructors, operators and substitution.

use rustc_hash::FxHashMap;
use strata_domains::Point;
use strata_integers::Integer;
use strata_poly::{DistPoly, Symbol};

use crate::Poly;

/// Anything a polynomial can be built from or combined with.
///
/// `Point` is accepted so that the wrong-kind errors of constructors and
/// operators stay reachable from typed code.
#[derive(Clone, Debug)]
pub enum Operand {
    /// A plain integer.
    Int(Integer),
    /// A bare variable.
    Symbol(Symbol),
    /// A raw polynomial.
    Raw(DistPoly),
    /// A polynomial value.
    Poly(Poly),
    /// A point; never a valid polynomial.
    Point(Point),
}

impl Operand {
    /// Returns a short name for the kind of this operand.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Int(_) => "int",
            Operand::Symbol(_) => "Symbol",
            Operand::Raw(_) => "DistPoly",
            Operand::Poly(p) => p.kind().name(),
            Operand::Point(_) => "Point",
        }
    }

    /// Lifts the operand to a raw polynomial; integers become constants
    /// over `vars`. Points have no raw form.
    pub(crate) fn into_raw(self, vars: &[Symbol]) -> Option<DistPoly> {
        match self {
            Operand::Int(c) => Some(DistPoly::from_int(c, vars.to_vec())),
            Operand::Symbol(s) => Some(DistPoly::var(s)),
            Operand::Raw(r) => Some(r),
            Operand::Poly(p) => Some(p.into_dp()),
            Operand::Point(_) => None,
        }
    }
}

macro_rules! operand_from {
    ($($ty:ty => |$v:ident| $e:expr),* $(,)?) => {$(
        impl From<$ty> for Operand {
            fn from($v: $ty) -> Self {
                $e
            }
        }
    )*};
}

operand_from! {
    i32 => |v| Operand::Int(Integer::from(v)),
    i64 => |v| Operand::Int(Integer::from(v)),
    Integer => |v| Operand::Int(v),
    &Integer => |v| Operand::Int(v.clone()),
    Symbol => |v| Operand::Symbol(v),
    &Symbol => |v| Operand::Symbol(v.clone()),
    DistPoly => |v| Operand::Raw(v),
    &DistPoly => |v| Operand::Raw(v.clone()),
    Poly => |v| Operand::Poly(v),
    &Poly => |v| Operand::Poly(v.clone()),
    Point => |v| Operand::Point(v),
    &Point => |v| Operand::Point(v.clone()),
}

/// A point to substitute into a polynomial.
#[derive(Clone, Debug)]
pub enum Substitution {
    /// Values for the indeterminates in order; padded with zeros or
    /// truncated to the number of indeterminates.
    Sequence(Vec<DistPoly>),
    /// Values by variable; missing indeterminates are zero and other keys
    /// are ignored.
    Mapping(FxHashMap<Symbol, DistPoly>),
    /// Coordinates of a point; coordinates that are not indeterminates are
    /// ignored.
    Point(Point),
}

impl From<&[i64]> for Substitution {
    fn from(values: &[i64]) -> Self {
        Substitution::Sequence(values.iter().map(|&v| DistPoly::from(v)).collect())
    }
}

impl From<Vec<i64>> for Substitution {
    fn from(values: Vec<i64>) -> Self {
        Substitution::from(values.as_slice())
    }
}

impl From<Vec<DistPoly>> for Substitution {
    fn from(values: Vec<DistPoly>) -> Self {
        Substitution::Sequence(values)
    }
}

impl From<FxHashMap<Symbol, DistPoly>> for Substitution {
    fn from(values: FxHashMap<Symbol, DistPoly>) -> Self {
        Substitution::Mapping(values)
    }
}

impl From<Point> for Substitution {
    fn from(point: Point) -> Self {
        Substitution::Point(point)
    }
}

impl From<&Point> for Substitution {
    fn from(point: &Point) -> Self {
        Substitution::Point(point.clone())
    }
}
