//! Stateless sequence helpers.
//!
//! These never look inside a [`RingDeque`](crate::RingDeque); apply them to a
//! snapshot from [`to_vec`](crate::RingDeque::to_vec) or
//! [`as_slices`](crate::RingDeque::as_slices) instead.

use alloc::vec::Vec;

/// Returns a new vector holding `f` applied to every element of `s`.
///
/// # Examples
/// ```
/// let lengths = vessels::algo::map(&["a", "bcd", "ef"], |s| s.len());
/// assert_eq!(lengths, [1, 3, 2]);
/// ```
pub fn map<T, O, F>(s: &[T], f: F) -> Vec<O>
where
    F: FnMut(&T) -> O,
{
    s.iter().map(f).collect()
}

/// Folds every element of `s` into an accumulator, starting from `init`.
///
/// # Examples
/// ```
/// let sum = vessels::algo::reduce(&[1, 2, 3, 4], 0, |acc, x| acc + x);
/// assert_eq!(sum, 10);
/// ```
pub fn reduce<T, O, F>(s: &[T], init: O, mut f: F) -> O
where
    F: FnMut(O, &T) -> O,
{
    let mut result = init;
    for value in s {
        result = f(result, value);
    }
    result
}

/// Returns a new vector with the elements of `s` for which `f` returns `true`.
pub fn filter<T, F>(s: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    s.iter().filter(|v| f(*v)).cloned().collect()
}

/// Returns a new vector holding `s[middle..]` followed by `s[..middle]`.
///
/// # Panics
/// Panics if `middle > s.len()`.
///
/// # Examples
/// ```
/// assert_eq!(vessels::algo::rotate(&[1, 2, 3, 4, 5], 2), [3, 4, 5, 1, 2]);
/// ```
pub fn rotate<T: Clone>(s: &[T], middle: usize) -> Vec<T> {
    let (head, tail) = s.split_at(middle);
    let mut result = Vec::with_capacity(s.len());
    result.extend_from_slice(tail);
    result.extend_from_slice(head);
    result
}

/// Counts the elements of `s` for which `f` returns `true`.
pub fn count_by<T, F>(s: &[T], mut f: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    reduce(s, 0, |acc, v| if f(v) { acc + 1 } else { acc })
}

/// Counts the elements of `s` equal to `value`.
pub fn count<T: PartialEq>(s: &[T], value: &T) -> usize {
    count_by(s, |v| v == value)
}

/// Merges two sorted slices into one sorted vector.
///
/// The merge is stable: of two equal elements, the one from `a` comes first.
///
/// # Examples
/// ```
/// let merged = vessels::algo::merge(&[1, 3, 5], &[2, 3, 4]);
/// assert_eq!(merged, [1, 2, 3, 3, 4, 5]);
/// ```
pub fn merge<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    merge_by(a, b, |x, y| x < y)
}

/// Merges two slices sorted according to `less` into one sorted vector.
///
/// `less(x, y)` must return `true` exactly when `x` is ordered before `y`.
/// Of two equivalent elements, the one from `a` comes first.
pub fn merge_by<T, F>(a: &[T], b: &[T], mut less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if less(&b[j], &a[i]) {
            // copy the whole run of `b` that sorts before a[i]
            let start = j;
            while j < b.len() && less(&b[j], &a[i]) {
                j += 1;
            }
            result.extend_from_slice(&b[start..j]);
        } else {
            let start = i;
            while i < a.len() && !less(&b[j], &a[i]) {
                i += 1;
            }
            result.extend_from_slice(&a[start..i]);
        }
    }

    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

/// Restricts `v` to the interval `[lo, hi]`.
///
/// Unlike [`Ord::clamp`], this never panics; if `lo > hi`, `lo` wins for
/// values below it and `hi` for all others outside the interval.
///
/// # Examples
/// ```
/// use vessels::algo::clamp;
/// assert_eq!(clamp(-3, 0, 10), 0);
/// assert_eq!(clamp(7, 0, 10), 7);
/// assert_eq!(clamp(12, 0, 10), 10);
/// ```
pub fn clamp<T: Ord>(v: T, lo: T, hi: T) -> T {
    clamp_by(v, lo, hi, |a, b| a < b)
}

/// Restricts `v` to the interval `[lo, hi]` under the ordering `less`.
pub fn clamp_by<T, F>(v: T, lo: T, hi: T, mut less: F) -> T
where
    F: FnMut(&T, &T) -> bool,
{
    if less(&v, &lo) {
        lo
    } else if less(&hi, &v) {
        hi
    } else {
        v
    }
}

/// Collects the keys of a map into a vector, in the map's iteration order.
///
/// Works with anything that iterates as `(&K, &V)` pairs, such as a reference
/// to a `BTreeMap` or `HashMap`.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
///
/// let map: BTreeMap<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
/// assert_eq!(vessels::algo::map_keys(&map), [1, 2]);
/// assert_eq!(vessels::algo::map_values(&map), ['a', 'b']);
/// ```
pub fn map_keys<'a, K, V, M>(m: M) -> Vec<K>
where
    K: Clone + 'a,
    V: 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    m.into_iter().map(|(k, _)| k.clone()).collect()
}

/// Collects the values of a map into a vector, in the map's iteration order.
pub fn map_values<'a, K, V, M>(m: M) -> Vec<V>
where
    K: 'a,
    V: Clone + 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    m.into_iter().map(|(_, v)| v.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RingDeque;
    use alloc::vec;

    #[test]
    fn filter_and_count() {
        let values = [1, 2, 3, 4, 5, 6, 2];
        assert_eq!(filter(&values, |v| v % 2 == 0), [2, 4, 6, 2]);
        assert_eq!(count_by(&values, |v| *v > 3), 3);
        assert_eq!(count(&values, &2), 2);
        assert_eq!(count(&values, &9), 0);
    }

    #[test]
    fn rotate_edges() {
        let values = [1, 2, 3];
        assert_eq!(rotate(&values, 0), [1, 2, 3]);
        assert_eq!(rotate(&values, 3), [1, 2, 3]);
        assert!(rotate::<u8>(&[], 0).is_empty());
    }

    #[test]
    #[should_panic]
    fn rotate_past_end_panics() {
        let _ = rotate(&[1, 2, 3], 4);
    }

    #[test]
    fn merge_with_duplicates_and_empty_sides() {
        assert_eq!(merge(&[1, 1, 2], &[1, 2, 2]), [1, 1, 1, 2, 2, 2]);
        assert_eq!(merge(&[], &[1, 2]), [1, 2]);
        assert_eq!(merge(&[1, 2], &[]), [1, 2]);
        assert!(merge::<u8>(&[], &[]).is_empty());
        assert_eq!(merge(&[4, 5, 6], &[1, 2, 3]), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn merge_by_is_stable() {
        let a = [(1, 'a'), (2, 'a'), (3, 'a')];
        let b = [(1, 'b'), (3, 'b')];
        let merged = merge_by(&a, &b, |x, y| x.0 < y.0);
        assert_eq!(merged, [(1, 'a'), (1, 'b'), (2, 'a'), (3, 'a'), (3, 'b')]);

        let descending = merge_by(&[9, 5, 1], &[8, 2], |x, y| x > y);
        assert_eq!(descending, [9, 8, 5, 2, 1]);
    }

    #[test]
    fn clamp_by_custom_order() {
        let by_len = |a: &&str, b: &&str| a.len() < b.len();
        assert_eq!(clamp_by("a", "bb", "dddd", by_len), "bb");
        assert_eq!(clamp_by("ccc", "bb", "dddd", by_len), "ccc");
        assert_eq!(clamp_by("eeeee", "bb", "dddd", by_len), "dddd");
        // inverted bounds do not panic
        assert_eq!(clamp(5, 10, 0), 10);
        assert_eq!(clamp(15, 10, 0), 0);
    }

    #[test]
    fn works_on_deque_snapshots() {
        let mut deque = RingDeque::with_capacity(4);
        deque.push_back(3);
        deque.push_back(4);
        deque.push_front(2);
        deque.push_front(1);

        let snapshot = deque.to_vec();
        assert_eq!(map(&snapshot, |v| v * 10), vec![10, 20, 30, 40]);
        assert_eq!(reduce(&snapshot, 1, |acc, v| acc * v), 24);

        let (front, back) = deque.as_slices();
        assert_eq!(merge(front, back), snapshot);
    }
}
