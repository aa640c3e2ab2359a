//! Lomuto partition quicksort, generic over the element type and comparison function.

use core::cmp::Ordering;
use core::mem;

pub mod compare;
mod partition;
mod quicksort;

pub use partition::{partition, swap};

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Textbook quicksort with the Lomuto partition scheme. The pivot is always the last element of
/// the current range, so already sorted, reverse sorted and all equal inputs hit the quadratic
/// worst-case. There is no randomization, the number of comparisons is fully determined by the
/// input. The stack depth is bounded by *O*(log(*n*)) regardless of the input, because only the
/// shorter side of each partition is handled by recursion.
///
/// # Examples
///
/// ```
/// let mut v = [5, -3, 0, 5, 2];
///
/// lomuto::sort(&mut v);
/// assert!(v == [-3, 0, 2, 5, 5]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    lomuto_sort(v, &mut |a: &T, b: &T| a.cmp(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but the slice will still
/// contain exactly the original elements. An order is a total order if it is (for all `a`, `b`
/// and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
///
/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
/// [`compare::dbl_cmp`] which places all `NaN` values after every other value.
///
/// ```
/// let mut floats = [3.14, -1.0, 0.0, 2.71];
/// lomuto::sort_by(&mut floats, lomuto::compare::dbl_cmp);
/// assert_eq!(floats, [-1.0, 0.0, 2.71, 3.14]);
/// ```
///
/// If `compare` panics the panic is propagated, and the slice is left in an unspecified order
/// that still holds every original element exactly once.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    lomuto_sort(v, &mut compare);
}

// --- IMPL ---

#[inline(always)]
fn lomuto_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    // Zero and one element slices are already sorted, and have no valid rightmost pivot.
    if v.len() < 2 {
        return;
    }

    quicksort::quicksort(v, compare);
}

#[test]
fn zst_is_noop() {
    let mut v = [(), (), ()];
    let mut comp_count = 0;
    sort_by(&mut v, |_, _| {
        comp_count += 1;
        Ordering::Equal
    });

    assert_eq!(comp_count, 0);
}
