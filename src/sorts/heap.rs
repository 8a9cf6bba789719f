use std::cmp::Ordering;

use super::swap;
use crate::{compare::KeyComparator, stat::Stat};

/// Restore the max-heap property below `i` within `arr[..n]`.
fn sift_down<T, C: KeyComparator<T>>(arr: &mut [T], n: usize, mut i: usize, cmp: &C, stat: &mut Stat) {
    loop {
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        let mut largest = i;
        if l < n && stat.compare(cmp, &arr[l], &arr[largest]) == Ordering::Greater {
            largest = l;
        }
        if r < n && stat.compare(cmp, &arr[r], &arr[largest]) == Ordering::Greater {
            largest = r;
        }
        if largest == i {
            return;
        }
        swap(arr, i, largest, stat);
        i = largest;
    }
}

/// Build a max-heap, then repeatedly move the maximum to the end.
pub fn heap_sort<T, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i, cmp, stat);
    }
    for end in (1..n).rev() {
        swap(arr, 0, end, stat);
        sift_down(arr, end, 0, cmp, stat);
    }
}
