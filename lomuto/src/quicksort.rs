use core::cmp::Ordering;

use crate::partition::partition;

/// Sorts `v` recursively.
///
/// Each round partitions the current range around its last element. Both sides are then sorted
/// independently, the shorter one via recursion and the longer one by continuing the loop. That
/// keeps the recursion depth below log2(len) even when every partition is maximally imbalanced.
pub(crate) fn quicksort<'a, T, F>(mut v: &'a mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() >= 2 {
        let mid = partition(v, compare);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is in its final position.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, compare);
            v = right;
        } else {
            quicksort(right, compare);
            v = left;
        }
    }
}
