use std::cmp::Ordering;

use crate::{compare::KeyComparator, stat::Stat};

/// Insertion sort over every `gap`-strided subsequence.
fn gapped_insertion<T: Clone, C: KeyComparator<T>>(arr: &mut [T], gap: usize, cmp: &C, stat: &mut Stat) {
    for i in gap..arr.len() {
        let held = arr[i].clone();
        stat.record_memory_op(1);
        let mut j = i;
        while j >= gap && stat.compare(cmp, &arr[j - gap], &held) == Ordering::Greater {
            arr[j] = arr[j - gap].clone();
            stat.record_memory_op(1);
            j -= gap;
        }
        arr[j] = held;
        stat.record_memory_op(1);
    }
}

/// Gaps n/2, n/4, ..., 1.
pub fn shell_sort<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    let mut gap = arr.len() / 2;
    while gap > 0 {
        gapped_insertion(arr, gap, cmp, stat);
        gap /= 2;
    }
}

/// Largest term of 1, 4, 13, 40, ... reached while the gap is below n/3.
pub fn knuth_start_gap(n: usize) -> usize {
    let mut gap = 1;
    while gap < n / 3 {
        gap = 3 * gap + 1;
    }
    gap
}

pub fn shell_sort_knuth<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    if arr.len() < 2 {
        return;
    }
    let mut gap = knuth_start_gap(arr.len());
    while gap >= 1 {
        gapped_insertion(arr, gap, cmp, stat);
        gap /= 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    #[test]
    fn test_knuth_start_gap() {
        assert_eq!(knuth_start_gap(2), 1);
        assert_eq!(knuth_start_gap(14), 4);
        assert_eq!(knuth_start_gap(40), 13);
        assert_eq!(knuth_start_gap(100), 40);
        assert_eq!(knuth_start_gap(1000), 364);
    }

    #[test]
    fn test_knuth_beats_halving_on_random_data() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut v: Vec<u32> = (0..5000).collect();
        v.shuffle(&mut rng);
        let mut halving = v.clone();

        let mut knuth_stat = Stat::new();
        let mut halving_stat = Stat::new();
        shell_sort_knuth(&mut v, &NaturalOrder::new(), &mut knuth_stat);
        shell_sort(&mut halving, &NaturalOrder::new(), &mut halving_stat);

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(v, halving);
        assert!(knuth_stat.comparisons < halving_stat.comparisons);
    }
}
