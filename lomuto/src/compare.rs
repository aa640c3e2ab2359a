//! Ready made comparison functions for the element types the `linesort` tool reads.
//!
//! All of them match the `FnMut(&T, &T) -> Ordering` shape expected by [`crate::sort_by`], are
//! pure and never take ownership of, or otherwise modify, the compared values.

use core::cmp::Ordering;

/// Orders two signed integers.
#[inline]
pub fn int_cmp(a: &i32, b: &i32) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Orders two floating point values.
///
/// Ordered values compare via the relational operators, so `-0.0` and `0.0` are equal. `NaN` has
/// no place in that order, it is treated as equal to every other `NaN` and greater than every
/// non-`NaN` value. As a result all `NaN` values end up at the end of a sorted slice, and the
/// comparison remains a valid total order for sorting.
#[inline]
pub fn dbl_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            if a == b {
                Ordering::Equal
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
    }
}

/// Orders two strings lexicographically by their UTF-8 bytes, the same order C `strcmp` yields.
#[inline]
pub fn str_cmp<S>(a: &S, b: &S) -> Ordering
where
    S: AsRef<str> + ?Sized,
{
    a.as_ref().as_bytes().cmp(b.as_ref().as_bytes())
}
