//! Canonical normal forms for coefficient tuples
//!
//! Maps an arbitrary rational representation of a plane or line direction
//! to one deterministic member of its equivalence class, so that two
//! mathematically identical objects compare bit-identical.

use crate::exact::Rat;
use num_integer::Integer as _;

/// The gcd-reduced integer tuple on the same ray as `values`
///
/// Clears denominators with the lcm, then divides by the gcd of the
/// absolute values (zeros are absorbing and skip the gcd). The sign is
/// left as-is; see [`canonical_integer_tuple`] for the sign convention.
pub fn integer_representative(values: &[Rat]) -> Vec<i64> {
    let mut scale = 1i64;
    for v in values {
        scale = scale.lcm(v.denom());
    }
    let mut ints: Vec<i64> = values
        .iter()
        .map(|v| (v * Rat::from_integer(scale)).to_integer())
        .collect();
    let mut g = 0i64;
    for &n in &ints {
        g = g.gcd(&n);
    }
    if g > 1 {
        for n in ints.iter_mut() {
            *n /= g;
        }
    }
    ints
}

/// Canonical form of a coefficient tuple
///
/// Gcd-reduces as [`integer_representative`], then flips the overall sign
/// so the first non-zero entry among `values[..sign_window]` is positive.
/// For a plane `(a, b, c, d)` the window is 3 (the normal decides the
/// sign); for a bare direction it is the whole tuple.
pub fn canonical_integer_tuple(values: &[Rat], sign_window: usize) -> Vec<i64> {
    let mut ints = integer_representative(values);
    if let Some(&lead) = ints[..sign_window].iter().find(|n| **n != 0) {
        if lead < 0 {
            for n in ints.iter_mut() {
                *n = -*n;
            }
        }
    }
    ints
}
