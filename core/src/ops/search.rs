//! Searches and quantifiers.
//!
//! All predicate-driven searches return as soon as the answer is known: the
//! predicate is never invoked for an index past the deciding one.

use super::{SameValueZero, index::resolve_relative_index, infallible};
use core::convert::Infallible;

// ============================================================================
// First match
// ============================================================================

/// The first element satisfying `pred`, scanning upward from index 0.
pub fn find<'s, T, F>(seq: &'s [T], mut pred: F) -> Option<&'s T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    infallible(try_find(seq, |item, index, seq| {
        Ok::<_, Infallible>(pred(item, index, seq))
    }))
}

/// Fallible [`find`].
pub fn try_find<'s, T, E, F>(seq: &'s [T], mut pred: F) -> Result<Option<&'s T>, E>
where
    F: FnMut(&T, usize, &[T]) -> Result<bool, E>,
{
    for (index, item) in seq.iter().enumerate() {
        if pred(item, index, seq)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// Index of the first element satisfying `pred`.
pub fn find_index<T, F>(seq: &[T], mut pred: F) -> Option<usize>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    infallible(try_find_index(seq, |item, index, seq| {
        Ok::<_, Infallible>(pred(item, index, seq))
    }))
}

/// Fallible [`find_index`].
pub fn try_find_index<T, E, F>(seq: &[T], mut pred: F) -> Result<Option<usize>, E>
where
    F: FnMut(&T, usize, &[T]) -> Result<bool, E>,
{
    for (index, item) in seq.iter().enumerate() {
        if pred(item, index, seq)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

// ============================================================================
// Last match
// ============================================================================

/// The last element satisfying `pred`, scanning downward from the end.
pub fn find_last<'s, T, F>(seq: &'s [T], mut pred: F) -> Option<&'s T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    infallible(try_find_last(seq, |item, index, seq| {
        Ok::<_, Infallible>(pred(item, index, seq))
    }))
}

/// Fallible [`find_last`].
pub fn try_find_last<'s, T, E, F>(seq: &'s [T], mut pred: F) -> Result<Option<&'s T>, E>
where
    F: FnMut(&T, usize, &[T]) -> Result<bool, E>,
{
    for (index, item) in seq.iter().enumerate().rev() {
        if pred(item, index, seq)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// Index of the last element satisfying `pred`.
pub fn find_last_index<T, F>(seq: &[T], mut pred: F) -> Option<usize>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    infallible(try_find_last_index(seq, |item, index, seq| {
        Ok::<_, Infallible>(pred(item, index, seq))
    }))
}

/// Fallible [`find_last_index`].
pub fn try_find_last_index<T, E, F>(seq: &[T], mut pred: F) -> Result<Option<usize>, E>
where
    F: FnMut(&T, usize, &[T]) -> Result<bool, E>,
{
    for (index, item) in seq.iter().enumerate().rev() {
        if pred(item, index, seq)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

// ============================================================================
// Quantifiers
// ============================================================================

/// Whether any element satisfies `pred`. `false` for an empty sequence.
pub fn some<T, F>(seq: &[T], mut pred: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    infallible(try_some(seq, |item, index, seq| {
        Ok::<_, Infallible>(pred(item, index, seq))
    }))
}

/// Fallible [`some`].
pub fn try_some<T, E, F>(seq: &[T], mut pred: F) -> Result<bool, E>
where
    F: FnMut(&T, usize, &[T]) -> Result<bool, E>,
{
    for (index, item) in seq.iter().enumerate() {
        if pred(item, index, seq)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether every element satisfies `pred`. `true` for an empty sequence.
pub fn every<T, F>(seq: &[T], mut pred: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    infallible(try_every(seq, |item, index, seq| {
        Ok::<_, Infallible>(pred(item, index, seq))
    }))
}

/// Fallible [`every`].
pub fn try_every<T, E, F>(seq: &[T], mut pred: F) -> Result<bool, E>
where
    F: FnMut(&T, usize, &[T]) -> Result<bool, E>,
{
    for (index, item) in seq.iter().enumerate() {
        if !pred(item, index, seq)? {
            return Ok(false);
        }
    }
    Ok(true)
}

// ============================================================================
// Membership
// ============================================================================

/// Whether `needle` occurs at or after `from_index`, compared with
/// [`SameValueZero`] so that a `NaN` needle finds a `NaN` element.
///
/// A negative `from_index` counts back from the end; the resolved start is
/// clamped to `0`. A start at or past the end finds nothing.
pub fn includes<T, U>(seq: &[T], needle: &U, from_index: Option<isize>) -> bool
where
    T: SameValueZero<U>,
    U: ?Sized,
{
    if seq.is_empty() {
        return false;
    }
    let start = from_index.map_or(0, |idx| resolve_relative_index(idx, seq.len()));
    let mut k = start;
    while k < seq.len() {
        if seq[k].same_value_zero(needle) {
            return true;
        }
        k += 1;
    }
    false
}

/// Index of the first element equal to `needle` at or after `from_index`.
///
/// Uses ordinary equality: a `NaN` needle is never found.
pub fn index_of<T, U>(seq: &[T], needle: &U, from_index: Option<isize>) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    let start = from_index.map_or(0, |idx| resolve_relative_index(idx, seq.len()));
    (start..seq.len()).find(|&k| seq[k] == *needle)
}

/// Index of the last element equal to `needle` at or before `from_index`.
///
/// `from_index` is the highest index considered; a negative value counts back
/// from the end, and one that lands before the start finds nothing.
pub fn last_index_of<T, U>(seq: &[T], needle: &U, from_index: Option<isize>) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    let len = seq.len();
    let upper = match from_index {
        None => len,
        Some(idx) if idx >= 0 => idx.unsigned_abs().saturating_add(1).min(len),
        Some(idx) => len.checked_sub(idx.unsigned_abs())? + 1,
    };
    (0..upper).rev().find(|&k| seq[k] == *needle)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
