// Collection and record builders for the quickgen library.
// Counts are drawn first, then the element generator is re-invoked
// once per slot against the shared stream, so every element costs its
// own draws and the whole collection stays reproducible.

use crate::combinators::tuple;
use crate::generator::Generator;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

/// A vector of values with length drawn uniformly from [0, size].
pub fn array<T: 'static>(gen: Generator<T>) -> Generator<Vec<T>> {
    Generator::new(move |source, size| {
        let count = source.uniform_int(0, size as i64) as usize;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(gen.invoke(source, size)?);
        }
        Ok(out)
    })
}

/// A vector of values with length drawn uniformly from [min, max],
/// independent of the session size. `max >= min` is a construction
/// contract.
pub fn array_between<T: 'static>(
    gen: Generator<T>,
    min: usize,
    max: usize,
) -> Generator<Vec<T>> {
    assert!(max >= min, "array_between: max {} < min {}", max, min);
    Generator::new(move |source, size| {
        let count = source.uniform_int(min as i64, max as i64) as usize;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(gen.invoke(source, size)?);
        }
        Ok(out)
    })
}

/// An `array` deduplicated into a set. Duplicate draws collapse, so
/// the set can end up smaller than the drawn count.
pub fn set<T: Ord + 'static>(gen: Generator<T>) -> Generator<BTreeSet<T>> {
    array(gen).map(|items| items.into_iter().collect())
}

/// An `array_between` deduplicated into a set. The min bound applies
/// to the underlying array draw, not the deduplicated result, so the
/// set may still come out smaller than `min`.
pub fn set_between<T: Ord + 'static>(
    gen: Generator<T>,
    min: usize,
    max: usize,
) -> Generator<BTreeSet<T>> {
    array_between(gen, min, max).map(|items| items.into_iter().collect())
}

/// A fixed-shape record: one generator per field, invoked in the order
/// the model lists them, producing a map with exactly the model's keys.
pub fn record<K, V>(model: Vec<(K, Generator<V>)>) -> Generator<BTreeMap<K, V>>
where
    K: Ord + Clone + 'static,
    V: 'static,
{
    Generator::new(move |source, size| {
        let mut out = BTreeMap::new();
        for (key, gen) in &model {
            out.insert(key.clone(), gen.invoke(source, size)?);
        }
        Ok(out)
    })
}

/// A map built from an `array` of generated key/value pairs. Colliding
/// keys overwrite left to right, so the map can hold fewer entries
/// than the drawn pair count.
pub fn hash_map<K, V>(keys: Generator<K>, values: Generator<V>) -> Generator<HashMap<K, V>>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    array(tuple((keys, values))).map(|pairs| pairs.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::constant;
    use crate::generator::SizeRange;
    use crate::ints::choose;

    #[test]
    fn array_length_stays_within_the_size_bound() {
        let g = array(choose(0, 9));
        for size in [0usize, 1, 5, 20] {
            let items = g.clone().gen(size, 31).unwrap();
            assert!(items.len() <= size);
        }
    }

    #[test]
    fn array_between_respects_explicit_bounds() {
        let g = array_between(choose(0, 9), 2, 6);
        for value in g.values(SizeRange::default(), 7).take(60) {
            let items = value.unwrap();
            assert!(items.len() >= 2 && items.len() <= 6);
        }
    }

    #[test]
    #[should_panic]
    fn array_between_rejects_inverted_bounds() {
        array_between(choose(0, 9), 5, 2);
    }

    #[test]
    fn array_elements_come_from_the_element_generator() {
        let g = array(choose(100, 105));
        for item in g.gen(30, 8).unwrap() {
            assert!(item >= 100 && item <= 105);
        }
    }

    #[test]
    fn set_deduplicates_draws() {
        // A single-value element generator collapses every non-empty
        // draw to one element.
        let g = set_between(constant(7), 3, 5);
        let out = g.gen(10, 2).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out.contains(&7));
    }

    #[test]
    fn set_length_never_exceeds_the_array_bound() {
        let g = set_between(choose(0, 3), 0, 4);
        for value in g.values(SizeRange::default(), 19).take(50) {
            assert!(value.unwrap().len() <= 4);
        }
    }

    #[test]
    fn record_preserves_the_model_key_set() {
        let g = record(vec![
            ("id", choose(0, 1000)),
            ("age", choose(0, 120)),
            ("score", choose(-10, 10)),
        ]);
        let out = g.gen(50, 41).unwrap();
        let keys: Vec<&str> = out.keys().cloned().collect();
        assert_eq!(keys, vec!["age", "id", "score"]);
        assert!(*out.get("age").unwrap() >= 0 && *out.get("age").unwrap() <= 120);
    }

    #[test]
    fn record_draws_fields_in_model_order() {
        // Same seed, same field generators, swapped model order: the
        // values move with the draw positions.
        let forward = record(vec![("a", choose(0, 1000)), ("b", choose(0, 1000))]);
        let swapped = record(vec![("b", choose(0, 1000)), ("a", choose(0, 1000))]);
        let x = forward.gen(10, 6).unwrap();
        let y = swapped.gen(10, 6).unwrap();
        assert_eq!(x.get("a"), y.get("b"));
        assert_eq!(x.get("b"), y.get("a"));
    }

    #[test]
    fn hash_map_collisions_are_last_write_wins() {
        let g = hash_map(constant("key"), choose(0, 1_000_000));
        for value in g.values(SizeRange::default(), 23).take(30) {
            let out = value.unwrap();
            assert!(out.len() <= 1);
        }
    }

    #[test]
    fn hash_map_pair_count_stays_within_size() {
        let g = hash_map(choose(0, 1_000_000), choose(0, 9));
        for size in [0usize, 3, 15] {
            let out = g.clone().gen(size, 77).unwrap();
            assert!(out.len() <= size);
        }
    }
}
