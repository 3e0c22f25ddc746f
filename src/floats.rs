// Real-number generation for the quickgen library.
// Reals follow the same sizing discipline as integers: the session
// size bounds the magnitude, and `choose_float` is the single uniform
// primitive underneath.

use crate::combinators::{sized, tuple};
use crate::generator::Generator;
use crate::ints::integer;
use std::fmt;

/// Uniform real in the inclusive range [lower, upper]. Inverted bounds
/// are a construction contract violation.
pub fn choose_float(lower: f64, upper: f64) -> Generator<f64> {
    assert!(
        upper >= lower,
        "choose_float: upper {} < lower {}",
        upper,
        lower
    );
    Generator::new(move |source, _size| Ok(source.uniform_real(lower, upper)))
}

/// A real of magnitude at most the size bound.
pub fn float() -> Generator<f64> {
    sized(|size| choose_float(-(size as f64), size as f64))
}

/// A ratio of two size-bounded integers with a nonzero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

pub fn rational() -> Generator<Rational> {
    tuple((integer(), integer().such_that(|n| *n != 0))).map(|(numerator, denominator)| {
        Rational {
            numerator,
            denominator,
        }
    })
}
