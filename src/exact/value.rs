//! Tagged exact value: integer, rational, or rational multiple of a
//! square root
//!
//! Answers are carried in this form through the whole kernel so they are
//! never silently rounded. Constructors normalize: a rational with
//! denominator 1 collapses to an integer, a radicand has its square part
//! extracted, and a radicand of 1 collapses back to a rational.

use crate::error::{KernelError, KernelResult};
use num_rational::Rational64;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact rational scalar used throughout the kernel
pub type Rat = Rational64;

/// Exact answer value
///
/// `SqrtMultiple { coeff, radicand }` denotes `coeff * sqrt(radicand)` with
/// `radicand` square-free and greater than 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExactValue {
    /// Plain integer
    Integer(i64),

    /// Reduced fraction with denominator > 1
    Rational(Rat),

    /// Rational multiple of the square root of a square-free integer
    SqrtMultiple { coeff: Rat, radicand: i64 },
}

impl ExactValue {
    /// Create an integer value
    pub fn from_integer(n: i64) -> Self {
        ExactValue::Integer(n)
    }

    /// Create a rational value, collapsing to `Integer` when possible
    pub fn from_rational(q: Rat) -> Self {
        if q.is_integer() {
            ExactValue::Integer(q.to_integer())
        } else {
            ExactValue::Rational(q)
        }
    }

    /// Exact square root of a non-negative rational
    ///
    /// `sqrt(n/d)` is rewritten as `sqrt(n*d)/d`, the largest square factor
    /// of the radicand is pulled into the coefficient, and a radicand of 1
    /// collapses the result to a plain rational. A negative input fails
    /// with `InvalidGeometry`.
    pub fn sqrt_of(value: Rat) -> KernelResult<Self> {
        if value.is_negative() {
            return Err(KernelError::InvalidGeometry(
                "square root of a negative value".to_string(),
            ));
        }
        Ok(Self::sqrt_of_nonneg(value))
    }

    /// Square root of a value already known to be non-negative
    pub(crate) fn sqrt_of_nonneg(value: Rat) -> Self {
        if value.is_zero() {
            return ExactValue::Integer(0);
        }
        let num = *value.numer();
        let den = *value.denom();
        // sqrt(num/den) = sqrt(num*den) / den
        Self::sqrt_scaled_nonneg(Rat::new(1, den), num * den)
    }

    /// Create `coeff * sqrt(radicand)`, normalizing the radicand
    pub fn sqrt_scaled(coeff: Rat, radicand: i64) -> KernelResult<Self> {
        if radicand < 0 {
            return Err(KernelError::InvalidGeometry(
                "negative radicand".to_string(),
            ));
        }
        Ok(Self::sqrt_scaled_nonneg(coeff, radicand))
    }

    fn sqrt_scaled_nonneg(coeff: Rat, radicand: i64) -> Self {
        if radicand == 0 || coeff.is_zero() {
            return ExactValue::Integer(0);
        }
        let (square, free) = square_free_decompose(radicand);
        let coeff = coeff * Rat::from_integer(square);
        if free == 1 {
            Self::from_rational(coeff)
        } else {
            ExactValue::SqrtMultiple {
                coeff,
                radicand: free,
            }
        }
    }

    /// The underlying rational, when the value has no irrational part
    pub fn to_rational(&self) -> Option<Rat> {
        match self {
            ExactValue::Integer(n) => Some(Rat::from_integer(*n)),
            ExactValue::Rational(q) => Some(*q),
            ExactValue::SqrtMultiple { .. } => None,
        }
    }

    /// Presentation-tier approximation; the only place floating point
    /// enters the value model
    pub fn approx(&self) -> f64 {
        match self {
            ExactValue::Integer(n) => *n as f64,
            ExactValue::Rational(q) => *q.numer() as f64 / *q.denom() as f64,
            ExactValue::SqrtMultiple { coeff, radicand } => {
                let c = *coeff.numer() as f64 / *coeff.denom() as f64;
                c * (*radicand as f64).sqrt()
            }
        }
    }

    /// Check for the exact zero
    pub fn is_zero(&self) -> bool {
        matches!(self, ExactValue::Integer(0))
    }

    /// True when the value is strictly positive
    pub fn is_positive(&self) -> bool {
        match self {
            ExactValue::Integer(n) => *n > 0,
            ExactValue::Rational(q) => q.is_positive(),
            ExactValue::SqrtMultiple { coeff, .. } => coeff.is_positive(),
        }
    }

    /// True when the value is strictly negative
    pub fn is_negative(&self) -> bool {
        match self {
            ExactValue::Integer(n) => *n < 0,
            ExactValue::Rational(q) => q.is_negative(),
            ExactValue::SqrtMultiple { coeff, .. } => coeff.is_negative(),
        }
    }

    /// The value with its sign flipped
    pub fn negated(&self) -> Self {
        match self {
            ExactValue::Integer(n) => ExactValue::Integer(-n),
            ExactValue::Rational(q) => ExactValue::Rational(-*q),
            ExactValue::SqrtMultiple { coeff, radicand } => ExactValue::SqrtMultiple {
                coeff: -*coeff,
                radicand: *radicand,
            },
        }
    }

    /// The value multiplied by an exact rational factor
    pub fn scaled(&self, k: Rat) -> Self {
        if k.is_zero() {
            return ExactValue::Integer(0);
        }
        match self {
            ExactValue::Integer(n) => Self::from_rational(Rat::from_integer(*n) * k),
            ExactValue::Rational(q) => Self::from_rational(q * k),
            ExactValue::SqrtMultiple { coeff, radicand } => ExactValue::SqrtMultiple {
                coeff: coeff * k,
                radicand: *radicand,
            },
        }
    }

    /// The exact square of the value (always rational)
    pub fn squared(&self) -> Self {
        match self {
            ExactValue::Integer(n) => ExactValue::Integer(n * n),
            ExactValue::Rational(q) => Self::from_rational(q * q),
            ExactValue::SqrtMultiple { coeff, radicand } => {
                Self::from_rational(coeff * coeff * Rat::from_integer(*radicand))
            }
        }
    }

    /// The value a student gets by forgetting the square root, when there
    /// is a square root to forget
    pub fn dropped_root(&self) -> Option<Self> {
        match self {
            ExactValue::SqrtMultiple { coeff, radicand } => {
                Some(Self::from_rational(coeff * Rat::from_integer(*radicand)))
            }
            _ => None,
        }
    }

    /// Additive perturbation that stays inside the value's family
    ///
    /// Integers and rationals shift by the delta; a square-root multiple
    /// shifts its radicand instead. Returns `None` when the shift would
    /// leave the family (radicand dropping below 1).
    pub fn shifted(&self, delta: i64) -> Option<Self> {
        match self {
            ExactValue::Integer(n) => Some(ExactValue::Integer(n + delta)),
            ExactValue::Rational(q) => {
                Some(Self::from_rational(q + Rat::from_integer(delta)))
            }
            ExactValue::SqrtMultiple { coeff, radicand } => {
                let shifted = radicand + delta;
                if shifted < 1 {
                    None
                } else {
                    Some(Self::sqrt_scaled_nonneg(*coeff, shifted))
                }
            }
        }
    }
}

impl fmt::Display for ExactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExactValue::Integer(n) => write!(f, "{}", n),
            ExactValue::Rational(q) => write!(f, "{}", q),
            ExactValue::SqrtMultiple { coeff, radicand } => {
                if *coeff == Rat::from_integer(1) {
                    write!(f, "√{}", radicand)
                } else if *coeff == Rat::from_integer(-1) {
                    write!(f, "-√{}", radicand)
                } else if coeff.is_integer() {
                    write!(f, "{}√{}", coeff.to_integer(), radicand)
                } else {
                    write!(f, "{}·√{}", coeff, radicand)
                }
            }
        }
    }
}

/// Decompose `n >= 1` as `square² * free` with `free` square-free
fn square_free_decompose(n: i64) -> (i64, i64) {
    debug_assert!(n >= 1);
    let mut square = 1i64;
    let mut free = 1i64;
    let mut rest = n;
    let mut factor = 2i64;
    while factor * factor <= rest {
        let mut count = 0u32;
        while rest % factor == 0 {
            rest /= factor;
            count += 1;
        }
        square *= factor.pow(count / 2);
        if count % 2 == 1 {
            free *= factor;
        }
        factor += 1;
    }
    // whatever is left is a single prime
    free *= rest;
    (square, free)
}
