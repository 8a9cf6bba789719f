use crate::{
    compare::KeyComparator,
    stat::Stat,
    tree_base::{
        avl::AvlTree,
        bst::Bst,
        tree_traits::{DuplicatePolicy, TreeOptions},
    },
};

/// Insert everything into an unbalanced BST and read it back in order.
pub fn tree_sort<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    if arr.len() < 2 {
        return;
    }
    let mut tree = Bst::new(cmp.clone());
    for v in arr.iter() {
        tree.insert(v.clone(), stat);
    }
    for (slot, v) in arr.iter_mut().zip(tree.iter()) {
        *slot = v.clone();
        stat.record_memory_op(1);
    }
}

/// Tree sort over an AVL tree. Duplicates are routed right so none are lost.
pub fn tree_sort_avl<T: Clone, C: KeyComparator<T>>(arr: &mut [T], cmp: &C, stat: &mut Stat) {
    if arr.len() < 2 {
        return;
    }
    let mut tree = AvlTree::with_options(cmp.clone(), TreeOptions::new(DuplicatePolicy::Right));
    for v in arr.iter() {
        tree.insert(v.clone(), stat);
    }
    let written = tree.extract_in_order(arr, stat);
    debug_assert_eq!(written, arr.len());
    log::debug!(
        "tree_sort_avl: {} records, height {}, {} rotations",
        written,
        tree.height(),
        tree.get_stats().rotations()
    );
}
