//! Helpers over sequences, mappings and closures.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter;

use serde::Deserialize;

pub const DEFAULT_ZOOM_FACTOR: usize = 2;

/// An integer or a float, as found in loosely typed numeric lists.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

#[must_use]
pub fn sum_list(values: &[f64]) -> f64 {
    values.iter().sum()
}

#[must_use]
pub fn sum_mixed_list(values: &[Number]) -> f64 {
    values.iter().map(|n| n.as_f64()).sum()
}

/// `(key, value²)`, with the square always a float.
#[must_use]
pub fn to_kv(key: &str, value: impl Into<Number>) -> (String, f64) {
    let value = value.into().as_f64();
    (key.to_string(), value * value)
}

pub fn make_multiplier(multiplier: f64) -> impl Fn(f64) -> f64 {
    move |x| x * multiplier
}

/// Pairs each sequence with its element count.
pub fn element_length<I, S, T>(items: I) -> Vec<(S, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[T]>,
{
    items
        .into_iter()
        .map(|item| {
            let len = item.as_ref().len();
            (item, len)
        })
        .collect()
}

#[must_use]
pub fn safe_first_element<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// `map[key]`, or `default` when the key is absent.
pub fn safely_get_value<'a, K, V, Q, S>(
    map: &'a HashMap<K, V, S>,
    key: &Q,
    default: Option<&'a V>,
) -> Option<&'a V>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    map.get(key).or(default)
}

/// Each element repeated `factor` times, in order.
#[must_use]
pub fn zoom_array<T: Clone>(items: &[T], factor: usize) -> Vec<T> {
    items
        .iter()
        .flat_map(|item| iter::repeat_n(item, factor))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{
        DEFAULT_ZOOM_FACTOR, Number, element_length, make_multiplier, safe_first_element,
        safely_get_value, sum_list, sum_mixed_list, to_kv, zoom_array,
    };

    #[test]
    fn sum_list_adds_floats() {
        assert!((sum_list(&[3.5, 1.25, 0.25]) - 5.0).abs() < f64::EPSILON);
        assert!(sum_list(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn sum_mixed_list_from_json() {
        let values: Vec<Number> = serde_json::from_str("[5, 4, 3.5, 100, 1.5]").unwrap();
        assert_eq!(values[0], Number::Int(5));
        assert_eq!(values[2], Number::Float(3.5));
        assert!((sum_mixed_list(&values) - 114.0).abs() < f64::EPSILON);
    }

    #[test]
    fn to_kv_squares_value() {
        assert_eq!(to_kv("eggs", 3_i64), ("eggs".to_string(), 9.0));
        assert_eq!(to_kv("school", 0.5), ("school".to_string(), 0.25));
    }

    #[test]
    fn multiplier_closure_captures_factor() {
        let times_two = make_multiplier(2.0);
        let halve = make_multiplier(0.5);
        assert!((times_two(2.25) - 4.5).abs() < f64::EPSILON);
        assert!((halve(3.0) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn element_length_pairs_counts() {
        let lengths = element_length(vec![vec![1, 2, 3], vec![], vec![4]]);
        assert_eq!(lengths, vec![(vec![1, 2, 3], 3), (vec![], 0), (vec![4], 1)]);

        let words = element_length(["abc".as_bytes(), "de".as_bytes()]);
        assert_eq!(words[0].1, 3);
        assert_eq!(words[1].1, 2);
    }

    #[test]
    fn safe_first_element_handles_empty() {
        assert_eq!(safe_first_element(&[7, 8]), Some(&7));
        assert_eq!(safe_first_element::<u8>(&[]), None);
    }

    #[test]
    fn safely_get_value_falls_back_to_default() {
        let map = HashMap::from([("a".to_string(), 1)]);
        let fallback = 42;
        assert_eq!(safely_get_value(&map, "a", Some(&fallback)), Some(&1));
        assert_eq!(safely_get_value(&map, "b", Some(&fallback)), Some(&42));
        assert_eq!(safely_get_value(&map, "b", None), None);
    }

    #[test]
    fn zoom_array_repeats_each_element() {
        let array = [12, 72, 91];
        assert_eq!(
            zoom_array(&array, DEFAULT_ZOOM_FACTOR),
            vec![12, 12, 72, 72, 91, 91]
        );
        assert_eq!(zoom_array(&array, 3), vec![12, 12, 12, 72, 72, 72, 91, 91, 91]);
        assert!(zoom_array(&array, 0).is_empty());
    }
}
