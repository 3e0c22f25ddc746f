// Structural combinators for the quickgen library.
// All functions here are pure: they build new generators out of
// existing generators and constant data, and evaluate nothing until
// one of the entry points runs the result.

use crate::data::{Draw, Source};
use crate::generator::Generator;

/// A generator that ignores both the stream and the size and always
/// yields the same value.
pub fn constant<T: Clone + 'static>(value: T) -> Generator<T> {
    Generator::new(move |_source, _size| Ok(value.clone()))
}

/// Build a generator from the size bound at invocation time, then run
/// it with the same stream and size. This is how generator definitions
/// branch or scale on the bound.
pub fn sized<T: 'static>(f: impl Fn(usize) -> Generator<T> + 'static) -> Generator<T> {
    Generator::new(move |source, size| f(size).invoke(source, size))
}

/// Uniformly pick one of the given generators and run only that one.
/// Requires at least one alternative.
pub fn one_of<T: 'static>(gens: Vec<Generator<T>>) -> Generator<T> {
    assert!(!gens.is_empty(), "one_of: no generators to choose from");
    Generator::new(move |source, size| {
        let i = source.uniform_int(0, gens.len() as i64 - 1) as usize;
        gens[i].invoke(source, size)
    })
}

/// Pick a generator with probability proportional to its weight.
///
/// The probe is a uniform draw in [0, total weight) walked through the
/// entries in insertion order, so entry order fixes the cumulative
/// buckets and with them the draw sequence. Weights must be positive
/// and the list non-empty.
pub fn frequency<T: 'static>(weighted: Vec<(u64, Generator<T>)>) -> Generator<T> {
    assert!(!weighted.is_empty(), "frequency: empty weight table");
    assert!(
        weighted.iter().all(|(weight, _)| *weight > 0),
        "frequency: weights must be positive"
    );
    let total: u64 = weighted.iter().map(|(weight, _)| weight).sum();
    Generator::new(move |source, size| {
        let mut probe = source.uniform_int(0, total as i64 - 1) as u64;
        for (weight, gen) in &weighted {
            if probe < *weight {
                return gen.invoke(source, size);
            }
            probe -= weight;
        }
        unreachable!("probe below total weight always lands in a bucket")
    })
}

/// Uniformly select one element of a non-empty collection, with
/// replacement.
pub fn elements<T: Clone + 'static>(items: Vec<T>) -> Generator<T> {
    assert!(!items.is_empty(), "elements: empty collection");
    Generator::new(move |source, _size| {
        let i = source.uniform_int(0, items.len() as i64 - 1) as usize;
        Ok(items[i].clone())
    })
}

// Bounded transposition shuffle shared by `shuffle` and `some_of`: draw
// a swap count in [0, 3n], then that many random index pairs, applying
// each as a swap. Deliberately not a uniform permutation (and not
// Fisher-Yates); the swap budget keeps the draw count bounded.
fn transpose<T>(source: &mut Source, items: &mut [T]) {
    let n = items.len() as i64;
    let swaps = source.uniform_int(0, 3 * n);
    for _ in 0..swaps {
        let i = source.uniform_int(0, n - 1) as usize;
        let j = source.uniform_int(0, n - 1) as usize;
        items.swap(i, j);
    }
}

/// An approximate permutation of a non-empty collection via bounded
/// random transpositions. The result is not uniformly distributed over
/// permutations.
pub fn shuffle<T: Clone + 'static>(items: Vec<T>) -> Generator<Vec<T>> {
    assert!(!items.is_empty(), "shuffle: empty collection");
    Generator::new(move |source, _size| {
        let mut out = items.clone();
        transpose(source, &mut out);
        Ok(out)
    })
}

/// A non-empty random subset of results from the given generators.
///
/// Every generator is invoked even though not all results are kept, so
/// the stream advances for all of them regardless of the subset size.
/// The subset size k is drawn uniformly from [1, n], the full result
/// list is shuffled, and the first k survive.
pub fn some_of<T: 'static>(gens: Vec<Generator<T>>) -> Generator<Vec<T>> {
    assert!(!gens.is_empty(), "some_of: no generators to choose from");
    Generator::new(move |source, size| {
        let mut results = Vec::with_capacity(gens.len());
        for gen in &gens {
            results.push(gen.invoke(source, size)?);
        }
        let keep = source.uniform_int(1, results.len() as i64) as usize;
        transpose(source, &mut results);
        results.truncate(keep);
        Ok(results)
    })
}

/// Tuples of generators, invoked left to right against the shared
/// stream. Implemented for arities 1 through 8.
pub trait GeneratorTuple {
    type Value;
    fn invoke_each(&self, source: &mut Source, size: usize) -> Draw<Self::Value>;
}

macro_rules! generator_tuple {
    ($($gen:ident),+) => {
        #[allow(non_snake_case)]
        impl<$($gen: 'static),+> GeneratorTuple for ($(Generator<$gen>,)+) {
            type Value = ($($gen,)+);

            fn invoke_each(&self, source: &mut Source, size: usize) -> Draw<Self::Value> {
                let ($($gen,)+) = self;
                Ok(($($gen.invoke(source, size)?,)+))
            }
        }
    };
}

generator_tuple!(A);
generator_tuple!(A, B);
generator_tuple!(A, B, C);
generator_tuple!(A, B, C, D);
generator_tuple!(A, B, C, D, E);
generator_tuple!(A, B, C, D, E, F);
generator_tuple!(A, B, C, D, E, F, G);
generator_tuple!(A, B, C, D, E, F, G, H);

/// Run each generator of a tuple in declared order and collect the
/// results as a tuple. Order is significant for reproducibility:
/// reordering the members reorders the draw sequence.
pub fn tuple<G>(gens: G) -> Generator<G::Value>
where
    G: GeneratorTuple + 'static,
    G::Value: 'static,
{
    Generator::new(move |source, size| gens.invoke_each(source, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SizeRange;
    use crate::ints::choose;

    #[test]
    fn constant_ignores_stream_and_size() {
        let g = constant("fixed");
        for value in g.values(SizeRange::default(), 3).take(10) {
            assert_eq!(value.unwrap(), "fixed");
        }
    }

    #[test]
    fn sized_sees_the_session_bound() {
        let g = sized(|size| constant(size * 2));
        assert_eq!(g.gen(21, 0).unwrap(), 42);
    }

    #[test]
    fn one_of_picks_only_listed_alternatives() {
        let g = one_of(vec![constant(1), constant(10), constant(100)]);
        for value in g.values(SizeRange::default(), 8).take(60) {
            let value = value.unwrap();
            assert!(value == 1 || value == 10 || value == 100);
        }
    }

    #[test]
    #[should_panic]
    fn one_of_rejects_an_empty_list() {
        one_of::<i64>(vec![]);
    }

    #[test]
    fn frequency_respects_weight_ratios() {
        let g = frequency(vec![(3, constant("heavy")), (1, constant("light"))]);
        let trials = 4000;
        let heavy = g
            .values(SizeRange::default(), 2024)
            .take(trials)
            .filter(|v| *v.as_ref().unwrap() == "heavy")
            .count();
        let ratio = heavy as f64 / trials as f64;
        assert!(ratio > 0.70 && ratio < 0.80, "ratio was {}", ratio);
    }

    #[test]
    fn frequency_is_deterministic_per_seed() {
        let build = || frequency(vec![(2, constant(1)), (5, constant(2)), (1, constant(3))]);
        let a: Vec<i64> = build()
            .values(SizeRange::default(), 55)
            .take(30)
            .map(|v| v.unwrap())
            .collect();
        let b: Vec<i64> = build()
            .values(SizeRange::default(), 55)
            .take(30)
            .map(|v| v.unwrap())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn frequency_rejects_zero_weights() {
        frequency(vec![(0, constant(1))]);
    }

    #[test]
    fn elements_selects_from_the_collection() {
        let items = vec![2, 3, 5, 7, 11];
        let g = elements(items.clone());
        for value in g.values(SizeRange::default(), 4).take(50) {
            assert!(items.contains(&value.unwrap()));
        }
    }

    #[test]
    #[should_panic]
    fn elements_rejects_an_empty_collection() {
        elements::<i64>(vec![]);
    }

    #[test]
    fn shuffle_permutes_without_losing_elements() {
        let items = vec![1, 2, 3, 4, 5, 6];
        let g = shuffle(items.clone());
        for value in g.values(SizeRange::default(), 6).take(30) {
            let mut out = value.unwrap();
            assert_eq!(out.len(), items.len());
            out.sort();
            assert_eq!(out, items);
        }
    }

    #[test]
    fn some_of_keeps_a_nonempty_subset() {
        let g = some_of(vec![constant(1), constant(2), constant(3), constant(4)]);
        for value in g.values(SizeRange::default(), 13).take(40) {
            let out = value.unwrap();
            assert!(!out.is_empty() && out.len() <= 4);
            for item in &out {
                assert!(*item >= 1 && *item <= 4);
            }
        }
    }

    #[test]
    fn tuple_draws_in_declared_order() {
        // Swapping the members changes which draws feed which slot, so
        // the pair and its mirror disagree under the same seed.
        let pair = tuple((choose(0, 1000), choose(0, 1000)));
        let mirrored = tuple((choose(0, 1000), choose(0, 1000))).map(|(a, b)| (b, a));
        let (a1, b1) = pair.gen(10, 5).unwrap();
        let (a2, b2) = mirrored.gen(10, 5).unwrap();
        assert_eq!((a1, b1), (b2, a2));
    }

    #[test]
    fn tuple_mixes_result_types() {
        let g = tuple((choose(0, 9), constant("tag"), choose(-5, 5)));
        let (n, tag, m) = g.gen(10, 3).unwrap();
        assert!(n >= 0 && n <= 9);
        assert_eq!(tag, "tag");
        assert!(m >= -5 && m <= 5);
    }
}
