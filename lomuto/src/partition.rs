use core::cmp::Ordering;

/// Exchanges the elements at positions `a` and `b`, leaving every other element untouched.
///
/// Only the two slots are exchanged. For handle types such as `String` or `Box<T>` the handles
/// trade places, the data they point to is neither copied nor moved.
///
/// # Panics
///
/// Panics if `a` or `b` are out of bounds.
#[inline]
pub fn swap<T>(v: &mut [T], a: usize, b: usize) {
    v.swap(a, b);
}

/// Partitions `v` around its last element using the Lomuto scheme and returns the final position
/// of that pivot.
///
/// When the call returns normally all elements for which `compare(elem, pivot)` is not
/// [`Ordering::Greater`] are left of the returned position, all others right of it. Elements equal
/// to the pivot end up on the left side. The relative order of elements is not preserved.
///
/// If `compare` does not implement a total order the resulting order is unspecified. All original
/// elements will remain in `v`, same is true if `compare` panics.
///
/// # Panics
///
/// Panics if `v` is empty, there is no pivot to partition around.
pub fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    assert!(len != 0, "partition called with an empty slice");

    let pivot_pos = len - 1;

    // Splitting off the pivot lets the scan hold a shared reference to it while swapping the rest.
    let (scan, pivot) = v.split_at_mut(pivot_pos);
    let pivot = &pivot[0];

    // `num_le` is the end of the region of elements that compare less or equal to the pivot.
    let mut num_le = 0;
    for j in 0..scan.len() {
        if compare(&scan[j], pivot) != Ordering::Greater {
            swap(scan, num_le, j);
            num_le += 1;
        }
    }

    // Place the pivot between the two partitions.
    swap(v, num_le, pivot_pos);

    num_le
}
