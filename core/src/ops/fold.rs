//! Left folds.

use super::infallible;
use crate::api::Error;
use core::convert::Infallible;

/// Fold the sequence left to right starting from `init`.
///
/// The callback receives the accumulator, the element, its index and the
/// slice. An empty sequence yields `init` without invoking the callback.
pub fn fold<T, A, F>(seq: &[T], init: A, mut f: F) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    infallible(try_fold(seq, init, |acc, item, index, seq| {
        Ok::<_, Infallible>(f(acc, item, index, seq))
    }))
}

/// Fallible [`fold`].
pub fn try_fold<T, A, E, F>(seq: &[T], init: A, mut f: F) -> Result<A, E>
where
    F: FnMut(A, &T, usize, &[T]) -> Result<A, E>,
{
    let mut acc = init;
    for (index, item) in seq.iter().enumerate() {
        acc = f(acc, item, index, seq)?;
    }
    Ok(acc)
}

/// Fold without a seed: the first element seeds the accumulator and the
/// callback runs from index 1.
///
/// A single element is returned as is without invoking the callback. An
/// empty sequence is [`Error::EmptyReduceNoSeed`].
///
/// ```
/// use seqkit_core::{api::Error, ops};
///
/// assert_eq!(ops::reduce(&[1, 2, 3, 4], |acc, x, _, _| acc + x), Ok(10));
/// assert_eq!(ops::reduce(&[] as &[i32], |acc, x, _, _| acc + x), Err(Error::EmptyReduceNoSeed));
/// ```
pub fn reduce<T, F>(seq: &[T], mut f: F) -> Result<T, Error>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    try_reduce(seq, |acc, item, index, seq| {
        Ok::<_, Error>(f(acc, item, index, seq))
    })
}

/// Fallible [`reduce`]. The empty case converts into the callback's error
/// type.
pub fn try_reduce<T, E, F>(seq: &[T], mut f: F) -> Result<T, E>
where
    T: Clone,
    E: From<Error>,
    F: FnMut(T, &T, usize, &[T]) -> Result<T, E>,
{
    let (first, _) = seq.split_first().ok_or(Error::EmptyReduceNoSeed)?;
    let mut acc = first.clone();
    for (index, item) in seq.iter().enumerate().skip(1) {
        acc = f(acc, item, index, seq)?;
    }
    Ok(acc)
}

#[cfg(test)]
#[path = "fold_test.rs"]
mod fold_test;
