use std::cmp::Ordering;

use crate::{compare::KeyComparator, sorts::merge_sort, stat::Stat};

/// Whether any two elements compare equal.
///
/// Merge-sorts a scratch copy, then scans adjacent pairs; `items` itself is
/// never touched and the cost of the check is not reported.
pub fn has_duplicate_key<T: Clone, C: KeyComparator<T>>(items: &[T], cmp: &C) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut scratch = items.to_vec();
    let mut stat = Stat::new();
    merge_sort(&mut scratch, cmp, &mut stat);

    let found = scratch
        .windows(2)
        .any(|w| stat.compare(cmp, &w[0], &w[1]) == Ordering::Equal);
    log::debug!("has_duplicate_key over {} items: {} ({})", items.len(), found, stat);
    found
}
