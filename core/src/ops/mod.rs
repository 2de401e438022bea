//! Typed sequence operations.
//!
//! Every operation borrows a dense slice, scans it once in index order and
//! returns a new owned result; the input is never mutated. Callbacks receive
//! the element, its index and the whole slice, mirroring the
//! `(element, index, sequence)` convention of array iteration methods.
//! Context the callback needs is captured by the closure.
//!
//! Operations taking a callback come in two forms: an infallible one and a
//! `try_` one whose callback returns `Result`. The first callback error stops
//! the scan and is returned as is.
//!
//! `find`, `find_index`, `find_last`, `find_last_index`, `some` and `every`
//! short-circuit: once the answer is known no further callback is invoked.
//!
//! ```
//! use seqkit_core::ops;
//!
//! let numbers = [1, 2, 3, 4];
//! assert_eq!(ops::map(&numbers, |x, _, _| x * 2), [2, 4, 6, 8]);
//! assert_eq!(ops::filter(&numbers, |x, _, _| x % 2 == 0), [2, 4]);
//! assert_eq!(ops::fold(&numbers, 0, |acc, x, _, _| acc + x), 10);
//! assert!(ops::includes(&[1.0, f64::NAN], &f64::NAN, None));
//! assert_eq!(ops::slice(&[1, 2, 3, 4, 5], Some(-2), Some(-1)), [4]);
//! ```

use core::convert::Infallible;

mod extract;
mod fold;
mod index;
mod same_value;
mod scan;
mod search;

pub use extract::{concat, join, reversed, slice, sorted_by, try_sorted_by};
pub use fold::{fold, reduce, try_fold, try_reduce};
pub use index::{resolve_relative_index, resolve_slice_bounds};
pub use same_value::SameValueZero;
pub use scan::{filter, flat_map, for_each, map, try_filter, try_flat_map, try_for_each, try_map};
pub use search::{
    every, find, find_index, find_last, find_last_index, includes, index_of, last_index_of, some,
    try_every, try_find, try_find_index, try_find_last, try_find_last_index, try_some,
};

/// Unwrap the result of a `try_` operation whose callback cannot fail.
#[inline]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
