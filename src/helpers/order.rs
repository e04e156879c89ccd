//! Index-based stable ordering.
//!
//! The comparators used for table rows classify values per pair, which means
//! they are not guaranteed to be a total order on mixed columns. `slice::sort_by`
//! may panic on such comparators, so rows are ordered with a bottom-up merge
//! sort over indices that always yields a permutation.

use std::cmp::Ordering;

/// Returns the stable permutation of `0..len` under `compare`.
/// Position `i` of the result holds the original index of the item that lands at `i`.
pub(crate) fn stable_order_by<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch: Vec<usize> = vec![0; len];
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let middle = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&order[start..middle], &order[middle..end], &mut scratch[start..end], &mut compare);
            start = end;
        }
        std::mem::swap(&mut order, &mut scratch);
        width *= 2;
    }
    order
}

/// Merges two ordered runs; ties keep the left run first.
fn merge<F>(left: &[usize], right: &[usize], output: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in output.iter_mut() {
        let take_right = match (left.get(i), right.get(j)) {
            (Some(&l), Some(&r)) => compare(r, l) == Ordering::Less,
            (None, Some(_)) => true,
            _ => false,
        };
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}
