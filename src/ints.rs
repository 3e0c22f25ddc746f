// Integer generation for the quickgen library.
// Everything here reduces to `choose`, the inclusive uniform draw,
// plus the sizing and retry combinators.

use crate::combinators::sized;
use crate::generator::Generator;

/// Uniform integer in the inclusive range [lower, upper]. Inverted
/// bounds are a construction contract violation.
pub fn choose(lower: i64, upper: i64) -> Generator<i64> {
    assert!(upper >= lower, "choose: upper {} < lower {}", upper, lower);
    Generator::new(move |source, _size| Ok(source.uniform_int(lower, upper)))
}

/// A signed integer of magnitude at most the size bound:
/// `choose(-size, size)` at the session size.
pub fn integer() -> Generator<i64> {
    sized(|size| choose(-(size as i64), size as i64))
}

/// A non-negative integer of magnitude at most the size bound.
pub fn natural() -> Generator<i64> {
    integer().map(i64::abs)
}

/// A strictly positive integer. Retries through the default budget,
/// growing the size, until a nonzero draw lands.
pub fn positive_integer() -> Generator<i64> {
    natural().such_that(|n| *n > 0)
}

/// A strictly negative integer.
pub fn negative_integer() -> Generator<i64> {
    positive_integer().map(|n| -n)
}

pub fn boolean() -> Generator<bool> {
    choose(0, 1).map(|n| n == 1)
}
