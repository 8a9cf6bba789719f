//! Error types for sorting and index operations.

use thiserror::Error;

use crate::record::{Criterion, Direction};

/// Result type alias for record-sort operations
pub type Result<T> = std::result::Result<T, SortError>;

/// Error type for configuration parsing and sort dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Criterion name or code not recognised
    #[error("Unknown comparison criterion '{0}'")]
    UnknownCriterion(String),

    /// Direction name or code not recognised
    #[error("Unknown sort direction '{0}'")]
    UnknownDirection(String),

    /// Algorithm name not recognised
    #[error("Unknown sort algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// Radix sort only orders identifiers ascending
    #[error("Radix sort supports identifier/ascending only, got {criterion}/{direction}")]
    RadixUnsupported {
        /// The requested criterion
        criterion: Criterion,
        /// The requested direction
        direction: Direction,
    },

    /// The algorithm has no comparator-driven form
    #[error("{0} sort is not comparison based")]
    NotComparisonBased(&'static str),

    /// Radix sort found an identifier it cannot bucket
    #[error("Radix sort requires non-negative identifiers, found {0}")]
    NegativeIdentifier(i32),

    /// The algorithm needs unique keys but the input has duplicates
    #[error("{algorithm} requires unique keys but duplicates were found under {criterion}")]
    DuplicateKeys {
        /// Name of the refused algorithm
        algorithm: &'static str,
        /// Criterion the duplicates were found under
        criterion: Criterion,
    },
}

/// A broken structural invariant found by [`AvlTree::validate`](crate::AvlTree::validate)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Cached height disagrees with the children
    #[error("node at in-order position {position} caches height {cached}, expected {actual}")]
    StaleHeight {
        /// In-order position of the node
        position: usize,
        /// Height stored in the node
        cached: usize,
        /// Height recomputed from children
        actual: usize,
    },

    /// Child heights differ by more than one
    #[error("node at in-order position {position} has balance factor {balance}")]
    Unbalanced {
        /// In-order position of the node
        position: usize,
        /// height(left) - height(right)
        balance: isize,
    },

    /// In-order sequence decreases
    #[error("in-order sequence decreases at position {position}")]
    OutOfOrder {
        /// In-order position of the offending element
        position: usize,
    },

    /// Node count disagrees with the tracked size
    #[error("tree tracks {tracked} elements but holds {counted}")]
    SizeMismatch {
        /// Size held in the stats
        tracked: usize,
        /// Nodes reachable from the root
        counted: usize,
    },
}
