// The generator abstraction for the quickgen library.
// A Generator<T> is an immutable deferred computation from a random
// stream and a size bound to a value. Nothing is evaluated while
// generators are being composed; evaluation happens only through the
// entry points here (`invoke`, `gen`, `sample`, `values`).

use crate::data::{Draw, Exhausted, Source};
use crate::{DEFAULT_SIZE_MAX, DEFAULT_SIZE_MIN, DEFAULT_TRIES};
use std::rc::Rc;

/// An immutable deferred computation `(Source, size) -> T`.
///
/// Generators are pure values: cloning is a cheap handle copy, and
/// invoking one twice with the same stream state and size yields the
/// same value. The size argument is an upper bound on the magnitude or
/// length a generator may choose, not the value it must produce.
pub struct Generator<T> {
    run: Rc<dyn Fn(&mut Source, usize) -> Draw<T>>,
}

impl<T> Clone for Generator<T> {
    fn clone(&self) -> Generator<T> {
        Generator {
            run: Rc::clone(&self.run),
        }
    }
}

/// The size schedule for a `values` session: sizes cycle from `min` up
/// to `max - 1` and wrap. `max` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
}

impl SizeRange {
    pub fn new(min: usize, max: usize) -> SizeRange {
        assert!(max > min, "SizeRange: max {} must exceed min {}", max, min);
        SizeRange { min, max }
    }
}

impl Default for SizeRange {
    fn default() -> SizeRange {
        SizeRange::new(DEFAULT_SIZE_MIN, DEFAULT_SIZE_MAX)
    }
}

impl<T: 'static> Generator<T> {
    pub fn new(run: impl Fn(&mut Source, usize) -> Draw<T> + 'static) -> Generator<T> {
        Generator { run: Rc::new(run) }
    }

    /// Run the generator against a live stream. This is the only
    /// low-level evaluation operation; every combinator goes through it.
    pub fn invoke(&self, source: &mut Source, size: usize) -> Draw<T> {
        (self.run)(source, size)
    }

    /// Generate a single value from a fresh stream seeded with `seed`.
    /// Identical (generator, size, seed) triples always produce
    /// identical output.
    pub fn gen(&self, size: usize, seed: u64) -> Draw<T> {
        let mut source = Source::new(seed);
        self.invoke(&mut source, size)
    }

    /// A lazy unbounded sequence of values. The i-th element is drawn
    /// at size `min + (i mod (max - min))` while the single underlying
    /// stream advances monotonically across size wraps. The sequence is
    /// restartable only by building a new session with a fresh seed.
    pub fn values(&self, sizes: SizeRange, seed: u64) -> Values<T> {
        self.values_with(Source::new(seed), sizes)
    }

    /// As `values`, over a caller-supplied stream.
    pub fn values_with(&self, source: Source, sizes: SizeRange) -> Values<T> {
        Values {
            generator: self.clone(),
            source,
            sizes,
            index: 0,
        }
    }

    /// Pull `n` exploratory values from an entropy-seeded session with
    /// the default size schedule. Not reproducible; use `gen` or
    /// `values` with a pinned seed for that.
    pub fn sample(&self, n: usize) -> Draw<Vec<T>> {
        self.values_with(Source::from_entropy(), SizeRange::default())
            .take(n)
            .collect()
    }

    /// `sample` with the default count of `DEFAULT_SAMPLES` values.
    pub fn sample_default(&self) -> Draw<Vec<T>> {
        self.sample(crate::DEFAULT_SAMPLES)
    }

    /// Apply a pure function to every generated value.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Generator<U> {
        Generator::new(move |source, size| Ok(f(self.invoke(source, size)?)))
    }

    /// Monadic sequencing: draw a value, build the next generator from
    /// it, and run that against the same stream and size. This is how a
    /// later generation step depends on an earlier realized value.
    pub fn bind<U: 'static>(self, f: impl Fn(T) -> Generator<U> + 'static) -> Generator<U> {
        Generator::new(move |source, size| {
            let value = self.invoke(source, size)?;
            f(value).invoke(source, size)
        })
    }

    /// Ignore the session size and always run at the fixed size `n`.
    pub fn resize(self, n: usize) -> Generator<T> {
        Generator::new(move |source, _size| self.invoke(source, n))
    }

    /// Re-map the effective size through an arbitrary function, e.g.
    /// cubic growth instead of linear.
    pub fn scale(self, f: impl Fn(usize) -> usize + 'static) -> Generator<T> {
        Generator::new(move |source, size| self.invoke(source, f(size)))
    }

    /// Retry until `pred` holds, with the default budget of
    /// `DEFAULT_TRIES` attempts.
    pub fn such_that(self, pred: impl Fn(&T) -> bool + 'static) -> Generator<T> {
        self.such_that_tries(DEFAULT_TRIES, pred)
    }

    /// Retry until `pred` holds, at most `tries` times. Each retry runs
    /// at size + 1 so size-sensitive predicates (non-emptiness,
    /// positivity) get progressively easier to satisfy. Fails with
    /// `Exhausted` once the budget runs out.
    pub fn such_that_tries(
        self,
        tries: u64,
        pred: impl Fn(&T) -> bool + 'static,
    ) -> Generator<T> {
        Generator::new(move |source, size| {
            let mut size = size;
            for _ in 0..tries {
                let value = self.invoke(source, size)?;
                if pred(&value) {
                    return Ok(value);
                }
                size += 1;
            }
            Err(Exhausted { tries })
        })
    }
}

/// Containers that can report emptiness, for `not_empty`.
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> IsEmpty for std::collections::BTreeSet<T> {
    fn is_empty(&self) -> bool {
        std::collections::BTreeSet::is_empty(self)
    }
}

impl<K, V> IsEmpty for std::collections::BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        std::collections::BTreeMap::is_empty(self)
    }
}

impl<K, V> IsEmpty for std::collections::HashMap<K, V> {
    fn is_empty(&self) -> bool {
        std::collections::HashMap::is_empty(self)
    }
}

impl<T: IsEmpty + 'static> Generator<T> {
    /// `such_that` specialised to non-emptiness, with the default
    /// retry budget.
    pub fn not_empty(self) -> Generator<T> {
        self.such_that(|value| !value.is_empty())
    }
}

/// The lazy sequence behind `values`. Pull-based and conceptually
/// infinite: elements are computed as the consumer advances, never
/// memoized, so a partially consumed session cannot be rewound.
pub struct Values<T> {
    generator: Generator<T>,
    source: Source,
    sizes: SizeRange,
    index: usize,
}

impl<T: 'static> Iterator for Values<T> {
    type Item = Draw<T>;

    fn next(&mut self) -> Option<Draw<T>> {
        let span = self.sizes.max - self.sizes.min;
        let size = self.sizes.min + self.index % span;
        self.index += 1;
        Some(self.generator.invoke(&mut self.source, size))
    }
}
