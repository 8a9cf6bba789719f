use std::cmp::Ordering;

use super::swap;
use crate::{compare::KeyComparator, stat::Stat};

pub fn bubble_sort<T, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if stat.compare(cmp, &arr[j], &arr[j + 1]) == Ordering::Greater {
                swap(arr, j, j + 1, stat);
            }
        }
    }
}

pub fn selection_sort<T, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let mut best = i;
        for j in i + 1..n {
            if stat.compare(cmp, &arr[j], &arr[best]) == Ordering::Less {
                best = j;
            }
        }
        if best != i {
            swap(arr, i, best, stat);
        }
    }
}

/// Stable: a held key never moves past an element that compares equal.
pub fn insertion_sort<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    if arr.len() < 2 {
        return;
    }
    for i in 1..arr.len() {
        let key = arr[i].clone();
        stat.record_memory_op(1);
        let mut j = i;
        while j > 0 && stat.compare(cmp, &arr[j - 1], &key) == Ordering::Greater {
            arr[j] = arr[j - 1].clone();
            stat.record_memory_op(1);
            j -= 1;
        }
        arr[j] = key;
        stat.record_memory_op(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;

    #[test]
    fn test_insertion_on_sorted_input_is_linear() {
        let mut v: Vec<u32> = (0..50).collect();
        let mut stat = Stat::new();
        insertion_sort(&mut v, &NaturalOrder::new(), &mut stat);
        assert_eq!(stat.comparisons, 49);
        // hold + place per key, no shifts
        assert_eq!(stat.memory_ops, 98);
    }

    #[test]
    fn test_bubble_counts_every_pair() {
        let mut v = vec![4, 3, 2, 1];
        let mut stat = Stat::new();
        bubble_sort(&mut v, &NaturalOrder::new(), &mut stat);
        assert_eq!(v, vec![1, 2, 3, 4]);
        assert_eq!(stat.comparisons, 6);
        assert_eq!(stat.memory_ops, 18);
    }

    #[test]
    fn test_selection_skips_noop_swaps() {
        let mut v = vec![1, 2, 3];
        let mut stat = Stat::new();
        selection_sort(&mut v, &NaturalOrder::new(), &mut stat);
        assert_eq!(stat.comparisons, 3);
        assert_eq!(stat.memory_ops, 0);
    }
}
