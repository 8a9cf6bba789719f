use std::{cmp::Ordering, fmt};

use crate::compare::KeyComparator;

/// Cost counters for a single algorithm invocation.
///
/// Every comparison made by the sorts, trees and containers goes through
/// [`Stat::compare`]. Moving one whole element counts as one memory op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stat {
    pub comparisons: u64,
    pub memory_ops: u64,
}

impl Stat {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn record_memory_op(&mut self, n: u64) {
        self.memory_ops += n;
    }

    /// A swap goes through a temporary: three assignments.
    #[inline]
    pub fn record_swap(&mut self) {
        self.memory_ops += 3;
    }

    /// Count a comparison, then evaluate it.
    #[inline]
    pub fn compare<T, C: KeyComparator<T>>(&mut self, cmp: &C, lhs: &T, rhs: &T) -> Ordering {
        self.record_comparison();
        cmp.compare(lhs, rhs)
    }

    /// Add another invocation's counters to this one.
    pub fn merge(&mut self, other: &Stat) {
        self.comparisons += other.comparisons;
        self.memory_ops += other.memory_ops;
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons={} memory_ops={}",
            self.comparisons, self.memory_ops
        )
    }
}
