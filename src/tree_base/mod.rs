pub mod avl;
pub mod bst;
pub mod iter;
mod node;
pub mod tree_stats;
pub mod tree_traits;

use self::avl::AvlTree;
use crate::compare::{NaturalOrder, RecordComparator};
use crate::record::Record;

/// An ordered index of records keyed by a comparison configuration.
pub type RecordTree = AvlTree<Record, RecordComparator>;

pub type DefaultAvlTree<T> = AvlTree<T, NaturalOrder<T>>;
