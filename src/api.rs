//! Record-level entry points: every call takes the records and a
//! [`CompareConfig`] and hands back the cost it incurred.

use crate::{
    compare::RecordComparator,
    duplicate::has_duplicate_key,
    error::{Result, SortError},
    record::{CompareConfig, Record},
    sorts::{radix_sort_by_id, SortAlgorithm},
    stat::Stat,
    tree_base::{
        tree_traits::{DuplicatePolicy, TreeOptions},
        RecordTree,
    },
};

/// Sort `records` in place with one algorithm and return its cost.
pub fn sort_records(records: &mut [Record], algorithm: SortAlgorithm, config: CompareConfig) -> Result<Stat> {
    let mut stat = Stat::new();
    match algorithm {
        SortAlgorithm::Radix => radix_sort_by_id(records, config, &mut stat)?,
        _ => algorithm.sort_by(records, &RecordComparator::new(config), &mut stat)?,
    }
    log::debug!("{} sort by {} over {} records: {}", algorithm, config, records.len(), stat);
    Ok(stat)
}

/// Like [`sort_records`], but refuses algorithms that need unique keys when
/// the input has duplicates under `config`. Nothing is sorted in that case.
pub fn sort_records_gated(records: &mut [Record], algorithm: SortAlgorithm, config: CompareConfig) -> Result<Stat> {
    if algorithm.requires_unique_keys() && detect_duplicate(records, config) {
        log::info!("skipping {} sort: duplicate keys under {}", algorithm, config);
        return Err(SortError::DuplicateKeys {
            algorithm: algorithm.name(),
            criterion: config.criterion,
        });
    }
    sort_records(records, algorithm, config)
}

pub fn detect_duplicate(records: &[Record], config: CompareConfig) -> bool {
    has_duplicate_key(records, &RecordComparator::new(config))
}

/// An empty index over `config`. The configuration is fixed for the tree's
/// lifetime; duplicate keys are rejected.
pub fn new_record_tree(config: CompareConfig) -> RecordTree {
    RecordTree::with_options(RecordComparator::new(config), TreeOptions::new(DuplicatePolicy::Reject))
}

/// Returns whether the record went in, and the comparisons spent.
pub fn tree_insert(tree: &mut RecordTree, record: Record) -> (bool, Stat) {
    let mut stat = Stat::new();
    let inserted = tree.insert(record, &mut stat);
    (inserted, stat)
}

pub fn tree_search(tree: &RecordTree, key: &Record) -> (Option<Record>, Stat) {
    let mut stat = Stat::new();
    let found = tree.search(key, &mut stat).copied();
    (found, stat)
}

/// Deleting an absent key is a no-op; its search cost is still reported.
pub fn tree_delete(tree: &mut RecordTree, key: &Record) -> (Option<Record>, Stat) {
    let mut stat = Stat::new();
    let removed = tree.remove(key, &mut stat);
    (removed, stat)
}
