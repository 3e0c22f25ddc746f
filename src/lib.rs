//! # quickgen
//!
//! Composable deterministic generators for structured random test data.
//!
//! A [`Generator<T>`] is an immutable value wrapping a pure function
//! from a seeded random stream and a size bound to a `T`. Primitive
//! generators and a combinator algebra (`map`, `bind`, `tuple`,
//! `sized`, `such_that`, `frequency`, collection builders) compose
//! into arbitrarily deep generators without evaluating anything;
//! evaluation happens only through `gen`, `sample`, or `values`, and
//! the output depends only on the seed, the size, and the structure of
//! the composition.
//!
//! ```
//! use quickgen::{array, choose, tuple};
//!
//! let point = tuple((choose(-100, 100), choose(-100, 100)));
//! let path = array(point);
//! let a = path.gen(20, 42).unwrap();
//! let b = path.gen(20, 42).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! Shrinking of failing values is deliberately out of scope, as are
//! splittable random streams for parallel generation.

pub mod collections;
pub mod combinators;
pub mod data;
pub mod floats;
pub mod generator;
pub mod ints;
pub mod simple;
pub mod strings;

pub use collections::{array, array_between, hash_map, record, set, set_between};
pub use combinators::{
    constant, elements, frequency, one_of, shuffle, sized, some_of, tuple, GeneratorTuple,
};
pub use data::{Draw, Exhausted, Source};
pub use floats::{choose_float, float, rational, Rational};
pub use generator::{Generator, IsEmpty, SizeRange, Values};
pub use ints::{boolean, choose, integer, natural, negative_integer, positive_integer};
pub use simple::{simple_printable, simple_type, Simple};
pub use strings::{
    ascii_string, bytes, char_alpha, char_alphanumeric, char_any, char_numeric, char_printable,
    identifier, string, uuid,
};

/// Retry budget for `such_that` when none is given.
pub const DEFAULT_TRIES: u64 = 10;

/// Default size schedule for `values` and `sample` sessions: sizes
/// cycle from `DEFAULT_SIZE_MIN` up to `DEFAULT_SIZE_MAX - 1`.
pub const DEFAULT_SIZE_MIN: usize = 0;
pub const DEFAULT_SIZE_MAX: usize = 300;

/// Default number of values pulled by exploratory sampling.
pub const DEFAULT_SAMPLES: usize = 10;
