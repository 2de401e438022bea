//! Relative index resolution shared by `slice`, `includes` and `index_of`.

/// Resolve a possibly negative index against `len`.
///
/// Non-negative indices are clamped to `len`; negative ones count back from
/// the end and are clamped to `0`. The result is always in `0..=len`.
///
/// ```
/// use seqkit_core::ops::resolve_relative_index;
///
/// assert_eq!(resolve_relative_index(2, 5), 2);
/// assert_eq!(resolve_relative_index(10, 5), 5);
/// assert_eq!(resolve_relative_index(-2, 5), 3);
/// assert_eq!(resolve_relative_index(-10, 5), 0);
/// ```
#[inline]
pub fn resolve_relative_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Resolve optional `start`/`end` bounds into a range of `0..len`.
///
/// A missing start means `0`, a missing end means `len`. When the resolved
/// start is not before the resolved end the range is empty.
pub fn resolve_slice_bounds(
    start: Option<isize>,
    end: Option<isize>,
    len: usize,
) -> core::ops::Range<usize> {
    let start = start.map_or(0, |idx| resolve_relative_index(idx, len));
    let end = end.map_or(len, |idx| resolve_relative_index(idx, len));
    if start >= end { start..start } else { start..end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_bounds_defaults() {
        assert_eq!(resolve_slice_bounds(None, None, 5), 0..5);
        assert_eq!(resolve_slice_bounds(None, None, 0), 0..0);
    }

    #[test]
    fn test_slice_bounds_negative() {
        assert_eq!(resolve_slice_bounds(Some(-2), Some(-1), 5), 3..4);
        assert_eq!(resolve_slice_bounds(Some(-3), None, 5), 2..5);
        assert_eq!(resolve_slice_bounds(Some(-100), Some(2), 5), 0..2);
    }

    #[test]
    fn test_slice_bounds_inverted_is_empty() {
        assert!(resolve_slice_bounds(Some(4), Some(1), 5).is_empty());
        assert!(resolve_slice_bounds(Some(10), Some(20), 5).is_empty());
        assert!(resolve_slice_bounds(Some(-1), Some(-2), 5).is_empty());
    }

    #[test]
    fn test_extreme_indices() {
        assert_eq!(resolve_relative_index(isize::MIN, 5), 0);
        assert_eq!(resolve_relative_index(isize::MAX, 5), 5);
    }
}
