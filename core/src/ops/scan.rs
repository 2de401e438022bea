//! Full scans: `map`, `filter`, `for_each` and `flat_map`.

use super::infallible;
use crate::Vec;
use core::convert::Infallible;

/// Transform every element, producing a sequence of the same length.
///
/// `result[i] == f(&seq[i], i, seq)` for every index.
pub fn map<T, R, F>(seq: &[T], mut f: F) -> Vec<R>
where
    F: FnMut(&T, usize, &[T]) -> R,
{
    infallible(try_map(seq, |item, index, seq| {
        Ok::<_, Infallible>(f(item, index, seq))
    }))
}

/// Fallible [`map`]. Stops at the first callback error.
pub fn try_map<T, R, E, F>(seq: &[T], mut f: F) -> Result<Vec<R>, E>
where
    F: FnMut(&T, usize, &[T]) -> Result<R, E>,
{
    let mut result = Vec::with_capacity(seq.len());
    for (index, item) in seq.iter().enumerate() {
        result.push(f(item, index, seq)?);
    }
    Ok(result)
}

/// Keep, in order, the elements for which `pred` holds.
pub fn filter<T, F>(seq: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    infallible(try_filter(seq, |item, index, seq| {
        Ok::<_, Infallible>(pred(item, index, seq))
    }))
}

/// Fallible [`filter`].
pub fn try_filter<T, E, F>(seq: &[T], mut pred: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for (index, item) in seq.iter().enumerate() {
        if pred(item, index, seq)? {
            result.push(item.clone());
        }
    }
    Ok(result)
}

/// Visit every element once, in ascending index order.
///
/// The visitor has no way to stop the iteration early.
pub fn for_each<T, F>(seq: &[T], mut visit: F)
where
    F: FnMut(&T, usize, &[T]),
{
    infallible(try_for_each(seq, |item, index, seq| {
        visit(item, index, seq);
        Ok::<_, Infallible>(())
    }))
}

/// Fallible [`for_each`]. An error is a failure of the whole call, not a
/// request to stop.
pub fn try_for_each<T, E, F>(seq: &[T], mut visit: F) -> Result<(), E>
where
    F: FnMut(&T, usize, &[T]) -> Result<(), E>,
{
    for (index, item) in seq.iter().enumerate() {
        visit(item, index, seq)?;
    }
    Ok(())
}

/// Map every element to zero or more results and concatenate them.
pub fn flat_map<T, R, I, F>(seq: &[T], mut f: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: FnMut(&T, usize, &[T]) -> I,
{
    infallible(try_flat_map(seq, |item, index, seq| {
        Ok::<_, Infallible>(f(item, index, seq))
    }))
}

/// Fallible [`flat_map`].
pub fn try_flat_map<T, R, I, E, F>(seq: &[T], mut f: F) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = R>,
    F: FnMut(&T, usize, &[T]) -> Result<I, E>,
{
    let mut result = Vec::with_capacity(seq.len());
    for (index, item) in seq.iter().enumerate() {
        result.extend(f(item, index, seq)?);
    }
    Ok(result)
}
