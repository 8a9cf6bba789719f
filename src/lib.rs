//! Instrumented multi-criterion record sorting and an AVL-balanced ordered
//! index, both driven by one pluggable comparator.

pub mod api;
pub mod compare;
mod duplicate;
pub mod error;
pub mod record;
pub mod record_index;
pub mod sorts;
pub mod stat;
pub mod tree_base;

pub use crate::{
    api::{
        detect_duplicate, new_record_tree, sort_records, sort_records_gated, tree_delete, tree_insert,
        tree_search,
    },
    compare::{KeyComparator, NaturalOrder, RecordComparator},
    duplicate::has_duplicate_key,
    error::{InvariantViolation, Result, SortError},
    record::{CompareConfig, Criterion, Direction, Name, Record, MAX_NAME_LEN},
    record_index::{RecordIndex, SortedArray, UnsortedArray},
    sorts::{SortAlgorithm, SortTraits},
    stat::Stat,
    tree_base::{
        avl::AvlTree,
        bst::Bst,
        tree_stats::TreeStats,
        tree_traits::{DuplicatePolicy, TreeOptions},
        DefaultAvlTree, RecordTree,
    },
};
