//! Copying extractions: `slice`, `concat`, `join`, `reversed` and sorting.

use super::{index::resolve_slice_bounds, infallible};
use crate::{String, Vec, fmt};
use core::cmp::Ordering;
use core::convert::Infallible;
use core::fmt::Write as _;

/// Copy the elements in `[start, end)`.
///
/// Either bound may be negative, counting back from the end. Bounds are
/// clamped to the sequence, and a start at or after the end gives an empty
/// result.
pub fn slice<T: Clone>(seq: &[T], start: Option<isize>, end: Option<isize>) -> Vec<T> {
    seq[resolve_slice_bounds(start, end, seq.len())].to_vec()
}

/// The sequence followed by each of `others`, in order.
pub fn concat<T: Clone>(seq: &[T], others: &[&[T]]) -> Vec<T> {
    let total = seq.len() + others.iter().map(|other| other.len()).sum::<usize>();
    let mut result = Vec::with_capacity(total);
    result.extend_from_slice(seq);
    for other in others {
        result.extend_from_slice(other);
    }
    result
}

/// Render every element with [`Display`](fmt::Display), separated by `sep`.
pub fn join<T: fmt::Display>(seq: &[T], sep: &str) -> String {
    let mut out = String::new();
    for (index, item) in seq.iter().enumerate() {
        if index > 0 {
            out.push_str(sep);
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", item);
    }
    out
}

/// A reversed copy.
pub fn reversed<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// A sorted copy, ordered by `compare`.
///
/// The sort is stable: elements that compare `Equal` keep their relative
/// order. Adjacent elements are swapped only when `compare` answers
/// `Greater`.
pub fn sorted_by<T, F>(seq: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    infallible(try_sorted_by(seq, |a, b| Ok::<_, Infallible>(compare(a, b))))
}

/// Fallible [`sorted_by`]. The first comparison error aborts the sort.
pub fn try_sorted_by<T, E, F>(seq: &[T], mut compare: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut result = seq.to_vec();
    let len = result.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if compare(&result[j], &result[j + 1])? == Ordering::Greater {
                result.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slice() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(slice(&values, Some(1), Some(3)), vec![2, 3]);
        assert_eq!(slice(&values, Some(2), None), vec![3, 4, 5]);
        assert_eq!(slice(&values, None, None), values.to_vec());
        assert_eq!(slice(&values, Some(-2), Some(-1)), vec![4]);
        assert_eq!(slice(&values, Some(3), Some(1)), Vec::<i32>::new());
        assert_eq!(slice(&values, Some(10), None), Vec::<i32>::new());
    }

    #[test]
    fn test_slice_is_a_copy() {
        let values = vec![String::from("a"), String::from("b")];
        let mut copy = slice(&values, None, None);
        copy.push(String::from("c"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_concat() {
        let others: [&[i32]; 3] = [&[3], &[], &[4, 5]];
        assert_eq!(concat(&[1, 2], &others), vec![1, 2, 3, 4, 5]);
        assert_eq!(concat::<i32>(&[], &[]), Vec::<i32>::new());
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[1, 2, 3], ","), "1,2,3");
        assert_eq!(join(&["a", "b"], " - "), "a - b");
        assert_eq!(join(&[] as &[i32], ","), "");
        assert_eq!(join(&[1.5], ","), "1.5");
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed(&[1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(reversed(&[] as &[u8]), Vec::<u8>::new());
    }

    #[test]
    fn test_sorted_by() {
        assert_eq!(sorted_by(&[3, 1, 2], |a, b| a.cmp(b)), vec![1, 2, 3]);
        assert_eq!(sorted_by(&[3, 1, 2], |a, b| b.cmp(a)), vec![3, 2, 1]);
        assert_eq!(sorted_by(&[] as &[i32], |a, b| a.cmp(b)), Vec::<i32>::new());
    }

    #[test]
    fn test_sorted_by_is_stable() {
        let people = [("bob", 30), ("amy", 25), ("cat", 30), ("dan", 25)];
        let by_age = sorted_by(&people, |a, b| a.1.cmp(&b.1));
        assert_eq!(by_age, vec![("amy", 25), ("dan", 25), ("bob", 30), ("cat", 30)]);
    }

    #[test]
    fn test_try_sorted_by_aborts() {
        let result: Result<Vec<i32>, &str> = try_sorted_by(&[2, 1], |_, _| Err("cmp"));
        assert_eq!(result, Err("cmp"));
    }
}
