//! Interchangeable ordered containers: an unsorted array, a sorted array and
//! the AVL tree, all behind one instrumented insert/search/remove interface.

use std::cmp::Ordering;

use crate::{compare::KeyComparator, sorts::merge_sort, stat::Stat, tree_base::avl::AvlTree};

pub trait RecordIndex<T> {
    /// Returns false when the container refused the value.
    fn insert(&mut self, value: T, stat: &mut Stat) -> bool;
    fn search(&self, key: &T, stat: &mut Stat) -> Option<&T>;
    fn remove(&mut self, key: &T, stat: &mut Stat) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Append-only storage searched front to back.
#[derive(Clone, Debug)]
pub struct UnsortedArray<T, C> {
    items: Vec<T>,
    key_cmp: C,
}

impl<T, C: KeyComparator<T>> UnsortedArray<T, C> {
    pub fn new(key_cmp: C) -> Self {
        Self::from_vec(Vec::new(), key_cmp)
    }

    pub fn from_vec(items: Vec<T>, key_cmp: C) -> Self {
        Self { items, key_cmp }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn position(&self, key: &T, stat: &mut Stat) -> Option<usize> {
        self.items
            .iter()
            .position(|v| stat.compare(&self.key_cmp, v, key) == Ordering::Equal)
    }
}

impl<T, C: KeyComparator<T>> RecordIndex<T> for UnsortedArray<T, C> {
    fn insert(&mut self, value: T, stat: &mut Stat) -> bool {
        self.items.push(value);
        stat.record_memory_op(1);
        true
    }

    fn search(&self, key: &T, stat: &mut Stat) -> Option<&T> {
        self.position(key, stat).map(|i| &self.items[i])
    }

    /// Order is not kept: the last element fills the hole.
    fn remove(&mut self, key: &T, stat: &mut Stat) -> Option<T> {
        let idx = self.position(key, stat)?;
        stat.record_memory_op(1);
        Some(self.items.swap_remove(idx))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Contiguous storage kept in comparator order; binary search, shifting
/// insert and remove.
#[derive(Clone, Debug)]
pub struct SortedArray<T, C> {
    items: Vec<T>,
    key_cmp: C,
}

impl<T: Clone, C: KeyComparator<T>> SortedArray<T, C> {
    pub fn new(key_cmp: C) -> Self {
        Self {
            items: Vec::new(),
            key_cmp,
        }
    }

    /// Sort `items` with merge sort (stable), charging the cost to `stat`.
    pub fn from_vec(mut items: Vec<T>, key_cmp: C, stat: &mut Stat) -> Self {
        merge_sort(&mut items, &key_cmp, stat);
        Self { items, key_cmp }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn binary_search(&self, key: &T, stat: &mut Stat) -> Option<usize> {
        let (mut lo, mut hi) = (0, self.items.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match stat.compare(&self.key_cmp, &self.items[mid], key) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }
        None
    }

    /// First position whose element compares greater than `key`.
    fn upper_bound(&self, key: &T, stat: &mut Stat) -> usize {
        let (mut lo, mut hi) = (0, self.items.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if stat.compare(&self.key_cmp, &self.items[mid], key) == Ordering::Greater {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}

impl<T: Clone, C: KeyComparator<T>> RecordIndex<T> for SortedArray<T, C> {
    /// Lands after any run of equal keys.
    fn insert(&mut self, value: T, stat: &mut Stat) -> bool {
        let pos = self.upper_bound(&value, stat);
        stat.record_memory_op((self.items.len() - pos) as u64 + 1);
        self.items.insert(pos, value);
        true
    }

    fn search(&self, key: &T, stat: &mut Stat) -> Option<&T> {
        self.binary_search(key, stat).map(|i| &self.items[i])
    }

    fn remove(&mut self, key: &T, stat: &mut Stat) -> Option<T> {
        let idx = self.binary_search(key, stat)?;
        stat.record_memory_op((self.items.len() - idx - 1) as u64);
        Some(self.items.remove(idx))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Clone, C: KeyComparator<T>> RecordIndex<T> for AvlTree<T, C> {
    fn insert(&mut self, value: T, stat: &mut Stat) -> bool {
        AvlTree::insert(self, value, stat)
    }

    fn search(&self, key: &T, stat: &mut Stat) -> Option<&T> {
        AvlTree::search(self, key, stat)
    }

    fn remove(&mut self, key: &T, stat: &mut Stat) -> Option<T> {
        AvlTree::remove(self, key, stat)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }
}
