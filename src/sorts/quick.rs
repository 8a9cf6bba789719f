use std::cmp::Ordering;

use super::swap;
use crate::{compare::KeyComparator, stat::Stat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pivot {
    Last,
    MedianOfThree,
}

/// Quicksort with the last element as pivot and a Lomuto partition.
pub fn quick_sort<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    quick_sort_rec(arr, Pivot::Last, cmp, stat);
}

/// Quicksort pivoting on the median of first, middle and last.
pub fn quick_sort_median3<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    quick_sort_rec(arr, Pivot::MedianOfThree, cmp, stat);
}

/// Recurses into the shorter side and loops on the longer one, keeping the
/// stack logarithmic even when every partition is lopsided.
fn quick_sort_rec<T: Clone, C: KeyComparator<T>>(mut arr: &mut [T], pivot: Pivot, cmp: &C, stat: &mut Stat) {
    while arr.len() > 1 {
        if pivot == Pivot::MedianOfThree {
            let m = median_of_three(arr, cmp, stat);
            let high = arr.len() - 1;
            swap(arr, m, high, stat);
        }
        let p = partition(arr, cmp, stat);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_rec(left, pivot, cmp, stat);
            arr = right;
        } else {
            quick_sort_rec(right, pivot, cmp, stat);
            arr = left;
        }
    }
}

/// Orders first, middle and last in place and returns the middle index.
fn median_of_three<T, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) -> usize {
    let (a, b, c) = (0, (arr.len() - 1) / 2, arr.len() - 1);
    if stat.compare(cmp, &arr[a], &arr[b]) == Ordering::Greater {
        swap(arr, a, b, stat);
    }
    if stat.compare(cmp, &arr[a], &arr[c]) == Ordering::Greater {
        swap(arr, a, c, stat);
    }
    if stat.compare(cmp, &arr[b], &arr[c]) == Ordering::Greater {
        swap(arr, b, c, stat);
    }
    b
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) -> usize {
    let high = arr.len() - 1;
    let pivot = arr[high].clone();
    stat.record_memory_op(1);

    let mut store = 0;
    for j in 0..high {
        if stat.compare(cmp, &arr[j], &pivot) != Ordering::Greater {
            swap(arr, store, j, stat);
            store += 1;
        }
    }
    swap(arr, store, high, stat);
    store
}
