// Random stream and failure types for the quickgen library.
// A Source wraps one seeded PRNG stream. Every generator call within a
// session threads a mutable borrow of the same Source, so the sequence
// of draws depends only on the seed and the call order fixed by the
// combinator structure.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A seeded stream of uniform random draws.
///
/// One `Source` is created per evaluation session and must never be
/// cloned or reset mid-session; reproducing a value means creating a
/// new `Source` from the same seed.
#[derive(Debug)]
pub struct Source {
    rng: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: u64) -> Source {
        Source {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A stream seeded from operating system entropy. Only evaluation
    /// entry points call this; nothing inside a combinator does.
    pub fn from_entropy() -> Source {
        Source {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Uniform integer in the inclusive range [lower, upper].
    pub fn uniform_int(&mut self, lower: i64, upper: i64) -> i64 {
        assert!(
            lower <= upper,
            "uniform_int: inverted bounds {} > {}",
            lower,
            upper
        );
        self.rng.gen_range(lower..=upper)
    }

    /// Uniform real in the inclusive range [lower, upper].
    pub fn uniform_real(&mut self, lower: f64, upper: f64) -> f64 {
        assert!(
            lower <= upper,
            "uniform_real: inverted bounds {} > {}",
            lower,
            upper
        );
        self.rng.gen_range(lower..=upper)
    }
}

/// A `such_that` retry budget ran out before the predicate held.
///
/// This is the only data-dependent failure in the library. Contract
/// violations (inverted bounds, empty choice collections) panic instead,
/// so callers can tell the two apart and react by raising the budget or
/// relaxing the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted {
    pub tries: u64,
}

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "predicate not satisfied after {} tries", self.tries)
    }
}

impl std::error::Error for Exhausted {}

pub type Draw<T> = Result<T, Exhausted>;
