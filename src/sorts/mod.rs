//! Instrumented in-place sorting algorithms sharing one contract: sort a slice
//! ascending under a [`KeyComparator`], counting every comparison and every
//! element moved into a [`Stat`].

mod heap;
mod merge;
mod quadratic;
mod quick;
mod radix;
mod shell;
mod tree_sort;

use std::{fmt, str::FromStr};

use bitmask_enum::bitmask;

pub use self::{
    heap::heap_sort,
    merge::merge_sort,
    quadratic::{bubble_sort, insertion_sort, selection_sort},
    quick::{quick_sort, quick_sort_median3},
    radix::radix_sort_by_id,
    shell::{knuth_start_gap, shell_sort, shell_sort_knuth},
    tree_sort::{tree_sort, tree_sort_avl},
};
use crate::{
    compare::KeyComparator,
    error::{Result, SortError},
    stat::Stat,
};

/// Swap two slots, counted as three assignments.
#[inline]
pub(crate) fn swap<T>(arr: &mut [T], i: usize, j: usize, stat: &mut Stat) {
    arr.swap(i, j);
    stat.record_swap();
}

#[bitmask(u8)]
pub enum SortTraits {
    InPlace = 1,
    Stable = 2,
    // callers must check for duplicate keys first
    UniqueKeys = 4,
    // orders Record::id ascending only
    IdentifierOnly = 8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    ShellKnuth,
    Quick,
    QuickMedianOfThree,
    Heap,
    Merge,
    Radix,
    Tree,
    TreeAvl,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 12] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::ShellKnuth,
        SortAlgorithm::Quick,
        SortAlgorithm::QuickMedianOfThree,
        SortAlgorithm::Heap,
        SortAlgorithm::Merge,
        SortAlgorithm::Radix,
        SortAlgorithm::Tree,
        SortAlgorithm::TreeAvl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::ShellKnuth => "shell-knuth",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::QuickMedianOfThree => "quick-median3",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Radix => "radix",
            SortAlgorithm::Tree => "tree",
            SortAlgorithm::TreeAvl => "tree-avl",
        }
    }

    pub fn traits(&self) -> SortTraits {
        match self {
            SortAlgorithm::Bubble | SortAlgorithm::Insertion => SortTraits::InPlace | SortTraits::Stable,
            SortAlgorithm::Selection
            | SortAlgorithm::Shell
            | SortAlgorithm::ShellKnuth
            | SortAlgorithm::Quick
            | SortAlgorithm::QuickMedianOfThree => SortTraits::InPlace,
            SortAlgorithm::Heap => SortTraits::InPlace | SortTraits::UniqueKeys,
            SortAlgorithm::Merge => SortTraits::Stable,
            SortAlgorithm::Radix => SortTraits::Stable | SortTraits::IdentifierOnly,
            SortAlgorithm::Tree | SortAlgorithm::TreeAvl => SortTraits::UniqueKeys,
        }
    }

    pub fn requires_unique_keys(&self) -> bool {
        self.traits().contains(SortTraits::UniqueKeys)
    }

    pub fn is_comparison_based(&self) -> bool {
        !self.traits().contains(SortTraits::IdentifierOnly)
    }

    /// Run a comparison-based algorithm over any comparator. Radix has no
    /// comparator form and is refused.
    pub fn sort_by<T: Clone, C: KeyComparator<T>>(&self, arr: &mut [T], cmp: &C, stat: &mut Stat) -> Result<()> {
        match self {
            SortAlgorithm::Bubble => bubble_sort(arr, cmp, stat),
            SortAlgorithm::Selection => selection_sort(arr, cmp, stat),
            SortAlgorithm::Insertion => insertion_sort(arr, cmp, stat),
            SortAlgorithm::Shell => shell_sort(arr, cmp, stat),
            SortAlgorithm::ShellKnuth => shell_sort_knuth(arr, cmp, stat),
            SortAlgorithm::Quick => quick_sort(arr, cmp, stat),
            SortAlgorithm::QuickMedianOfThree => quick_sort_median3(arr, cmp, stat),
            SortAlgorithm::Heap => heap_sort(arr, cmp, stat),
            SortAlgorithm::Merge => merge_sort(arr, cmp, stat),
            SortAlgorithm::Tree => tree_sort(arr, cmp, stat),
            SortAlgorithm::TreeAvl => tree_sort_avl(arr, cmp, stat),
            SortAlgorithm::Radix => return Err(SortError::NotComparisonBased(self.name())),
        }
        Ok(())
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        SortAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}
