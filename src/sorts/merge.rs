use std::cmp::Ordering;

use crate::{compare::KeyComparator, stat::Stat};

/// Stable top-down merge sort.
pub fn merge_sort<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    if arr.len() < 2 {
        return;
    }
    // left half takes the middle element, as in l..=l+(r-l)/2
    let mid = (arr.len() - 1) / 2 + 1;
    {
        let (left, right) = arr.split_at_mut(mid);
        merge_sort(left, cmp, stat);
        merge_sort(right, cmp, stat);
    }
    merge(arr, mid, cmp, stat);
}

/// Merge the sorted runs `arr[..mid]` and `arr[mid..]`. Both halves are
/// copied out before anything in `arr` is written.
fn merge<T: Clone, C: KeyComparator<T>>(arr: &mut [T], mid: usize, cmp: &C, stat: &mut Stat) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();
    stat.record_memory_op((left.len() + right.len()) as u64);

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        // ties take from the left run
        if stat.compare(cmp, &left[i], &right[j]) != Ordering::Greater {
            arr[k] = left[i].clone();
            i += 1;
        } else {
            arr[k] = right[j].clone();
            j += 1;
        }
        k += 1;
        stat.record_memory_op(1);
    }
    for v in left[i..].iter().chain(right[j..].iter()) {
        arr[k] = v.clone();
        k += 1;
        stat.record_memory_op(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;

    #[test]
    fn test_merge_cost() {
        let mut v = vec![3, 1, 2];
        let mut stat = Stat::new();
        merge_sort(&mut v, &NaturalOrder::new(), &mut stat);
        assert_eq!(v, vec![1, 2, 3]);
        // [3,1] -> 2 copied + 2 written; [1,3]+[2] -> 3 copied + 3 written
        assert_eq!(stat.memory_ops, 10);
        assert_eq!(stat.comparisons, 3);
    }
}
