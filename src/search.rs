//! Element search over slices.

use std::cmp::Ordering;

use crate::instrumentation::{self, Counters};

/// Index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    let found = items.iter().position(|x| x == target);
    instrumentation::record(
        "linear_search",
        Counters {
            symbols_compared: found.map_or(items.len(), |i| i + 1) as u64,
            ..Counters::default()
        },
    );
    found
}

/// Index of `target` in ascending `sorted`, by halving the candidate range.
///
/// `sorted` is trusted to be in order; on unsorted input the result is
/// unspecified but the search still terminates. With duplicates any
/// matching index may be returned.
///
/// ```
/// assert_eq!(stralgo::binary_search(&[1, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50], &25), Some(5));
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let mut counters = Counters::default();
    let (mut lo, mut hi) = (0usize, sorted.len());
    let mut found = None;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        counters.symbols_compared += 1;
        match sorted[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                break;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    instrumentation::record("binary_search", counters);
    found
}
