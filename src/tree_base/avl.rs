use std::cmp::Ordering;

use super::{
    iter::InOrderIter,
    node::{balance, height, Link, Node},
    tree_stats::TreeStats,
    tree_traits::{DuplicatePolicy, TreeOptions},
};
use crate::{compare::KeyComparator, error::InvariantViolation, stat::Stat};

/// Height-balanced binary search tree ordered by a [`KeyComparator`].
///
/// After every public operation, every node satisfies
/// `|height(left) - height(right)| <= 1` and caches
/// `height = 1 + max(height(left), height(right))`.
pub struct AvlTree<T, C> {
    root_: Link<T>,
    stats_: TreeStats,
    options_: TreeOptions,
    key_cmp: C,
}

impl<T, C> AvlTree<T, C>
where
    T: Clone,
    C: KeyComparator<T>,
{
    pub fn new(key_cmp: C) -> Self {
        Self::with_options(key_cmp, TreeOptions::default())
    }

    pub fn with_options(key_cmp: C, options: TreeOptions) -> Self {
        Self {
            root_: None,
            stats_: TreeStats::new(),
            options_: options,
            key_cmp,
        }
    }

    pub fn key_comp(&self) -> &C {
        &self.key_cmp
    }

    pub fn options(&self) -> TreeOptions {
        self.options_
    }
}

/// Access functions to the item count and shape
impl<T, C> AvlTree<T, C> {
    pub fn len(&self) -> usize {
        self.stats_.size
    }

    pub fn is_empty(&self) -> bool {
        self.root_.is_none()
    }

    /// Height of the whole tree: empty = 0, single node = 1.
    pub fn height(&self) -> usize {
        height(&self.root_)
    }

    pub fn get_stats(&self) -> &TreeStats {
        &self.stats_
    }

    pub fn root(&self) -> Option<&T> {
        self.root_.as_deref().map(|n| &n.value)
    }

    pub fn first(&self) -> Option<&T> {
        let mut n = self.root_.as_deref()?;
        while let Some(left) = n.left.as_deref() {
            n = left;
        }
        Some(&n.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut n = self.root_.as_deref()?;
        while let Some(right) = n.right.as_deref() {
            n = right;
        }
        Some(&n.value)
    }

    pub fn iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self.root_.as_deref(), self.stats_.size)
    }
}

/// Rotations
impl<T, C> AvlTree<T, C> {
    /// `x = y.left; y.left = x.right; x.right = y`, heights of y then x.
    fn rotate_right(&mut self, mut y: Box<Node<T>>, stat: &mut Stat) -> Box<Node<T>> {
        let Some(mut x) = y.left.take() else {
            return y;
        };
        y.left = x.right.take();
        y.update_height();
        x.right = Some(y);
        x.update_height();

        stat.record_memory_op(2);
        self.stats_.right_rotations += 1;
        log::trace!("AvlTree::rotate_right: new subtree height {}", x.height);
        x
    }

    fn rotate_left(&mut self, mut x: Box<Node<T>>, stat: &mut Stat) -> Box<Node<T>> {
        let Some(mut y) = x.right.take() else {
            return x;
        };
        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();

        stat.record_memory_op(2);
        self.stats_.left_rotations += 1;
        log::trace!("AvlTree::rotate_left: new subtree height {}", y.height);
        y
    }
}

/// Search
impl<T, C> AvlTree<T, C>
where
    T: Clone,
    C: KeyComparator<T>,
{
    /// Descend from the root; O(height) counted comparisons.
    pub fn search(&self, key: &T, stat: &mut Stat) -> Option<&T> {
        let mut n = self.root_.as_deref();
        while let Some(node) = n {
            n = match stat.compare(&self.key_cmp, key, &node.value) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains(&self, key: &T, stat: &mut Stat) -> bool {
        self.search(key, stat).is_some()
    }
}

/// Insertion
impl<T, C> AvlTree<T, C>
where
    T: Clone,
    C: KeyComparator<T>,
{
    /// Insert a value, rebalancing on the way back up. Returns false when the
    /// duplicate policy rejected the value; the tree is then unchanged.
    pub fn insert(&mut self, value: T, stat: &mut Stat) -> bool {
        let root = self.root_.take();
        let (root, inserted) = self.insert_descend(root, &value, stat);
        self.root_ = Some(root);
        if inserted {
            self.stats_.size += 1;
        }
        self.verify();
        inserted
    }

    fn insert_descend(&mut self, link: Link<T>, value: &T, stat: &mut Stat) -> (Box<Node<T>>, bool) {
        let Some(mut node) = link else {
            stat.record_memory_op(1);
            return (Node::new_leaf(value.clone()), true);
        };

        let goes_left = match stat.compare(&self.key_cmp, value, &node.value) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => match self.options_.duplicates {
                DuplicatePolicy::Reject => {
                    log::debug!("AvlTree::insert rejected duplicate key");
                    return (node, false);
                }
                DuplicatePolicy::Right => false,
            },
        };

        let inserted = if goes_left {
            let (child, inserted) = self.insert_descend(node.left.take(), value, stat);
            node.left = Some(child);
            inserted
        } else {
            let (child, inserted) = self.insert_descend(node.right.take(), value, stat);
            node.right = Some(child);
            inserted
        };

        node.update_height();
        (self.rebalance_after_insert(node, value, stat), inserted)
    }

    /// The side of the heavy child the new key went to is decided by the same
    /// rule as the descent: less goes left, anything else goes right.
    fn rebalance_after_insert(&mut self, mut node: Box<Node<T>>, value: &T, stat: &mut Stat) -> Box<Node<T>> {
        let bal = node.balance();
        if bal > 1 {
            let went_left = match node.left.as_deref() {
                Some(left) => stat.compare(&self.key_cmp, value, &left.value) == Ordering::Less,
                None => return node,
            };
            log::debug!(
                "AvlTree::insert rebalance at height {}: {} case",
                node.height,
                if went_left { "LL" } else { "LR" }
            );
            if !went_left {
                node.left = node.left.take().map(|l| self.rotate_left(l, stat));
            }
            return self.rotate_right(node, stat);
        }
        if bal < -1 {
            let went_left = match node.right.as_deref() {
                Some(right) => stat.compare(&self.key_cmp, value, &right.value) == Ordering::Less,
                None => return node,
            };
            log::debug!(
                "AvlTree::insert rebalance at height {}: {} case",
                node.height,
                if went_left { "RL" } else { "RR" }
            );
            if went_left {
                node.right = node.right.take().map(|r| self.rotate_right(r, stat));
            }
            return self.rotate_left(node, stat);
        }
        node
    }
}

/// Erase
impl<T, C> AvlTree<T, C>
where
    T: Clone,
    C: KeyComparator<T>,
{
    /// Remove the first node found equal to `key`. Removing an absent key
    /// leaves the tree unchanged; the comparisons spent finding that out are
    /// still counted.
    pub fn remove(&mut self, key: &T, stat: &mut Stat) -> Option<T> {
        let root = self.root_.take();
        let (root, removed) = self.remove_descend(root, key, stat);
        self.root_ = root;
        if removed.is_some() {
            self.stats_.size -= 1;
        } else {
            log::debug!("Could not find key to erase in tree of size {}", self.len());
        }
        self.verify();
        removed
    }

    fn remove_descend(&mut self, link: Link<T>, key: &T, stat: &mut Stat) -> (Link<T>, Option<T>) {
        let Some(mut node) = link else {
            return (None, None);
        };

        let removed = match stat.compare(&self.key_cmp, key, &node.value) {
            Ordering::Less => {
                let (child, removed) = self.remove_descend(node.left.take(), key, stat);
                node.left = child;
                removed
            }
            Ordering::Greater => {
                let (child, removed) = self.remove_descend(node.right.take(), key, stat);
                node.right = child;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return (None, Some(node.value)),
                (Some(child), None) | (None, Some(child)) => {
                    return (Some(child), Some(node.value));
                }
                (Some(left), Some(right)) => {
                    // two children: the right subtree's minimum takes this slot
                    let (rest, successor) = self.take_min(right, stat);
                    node.left = Some(left);
                    node.right = rest;
                    stat.record_memory_op(1);
                    Some(std::mem::replace(&mut node.value, successor))
                }
            },
        };

        if removed.is_none() {
            return (Some(node), None);
        }
        (Some(self.rebalance_after_remove(node, stat)), removed)
    }

    /// Detach the leftmost node of a subtree, rebalancing the path above it.
    fn take_min(&mut self, mut node: Box<Node<T>>, stat: &mut Stat) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (right, value)
            }
            Some(left) => {
                let (rest, min) = self.take_min(left, stat);
                node.left = rest;
                (Some(self.rebalance_after_remove(node, stat)), min)
            }
        }
    }

    /// With no new key to compare against, the rotation is picked from the
    /// heavier child's own balance factor.
    fn rebalance_after_remove(&mut self, mut node: Box<Node<T>>, stat: &mut Stat) -> Box<Node<T>> {
        node.update_height();
        let bal = node.balance();
        if bal > 1 {
            if balance(&node.left) < 0 {
                node.left = node.left.take().map(|l| self.rotate_left(l, stat));
            }
            return self.rotate_right(node, stat);
        }
        if bal < -1 {
            if balance(&node.right) > 0 {
                node.right = node.right.take().map(|r| self.rotate_right(r, stat));
            }
            return self.rotate_left(node, stat);
        }
        node
    }
}

/// In-order extraction
impl<T, C> AvlTree<T, C>
where
    T: Clone,
{
    /// Copy the records into `out` in ascending order, one memory op per
    /// record written. Returns how many were written.
    pub fn extract_in_order(&self, out: &mut [T], stat: &mut Stat) -> usize {
        let mut idx = 0;
        Self::extract_recursive(self.root_.as_deref(), out, &mut idx, stat);
        idx
    }

    fn extract_recursive(node: Option<&Node<T>>, out: &mut [T], idx: &mut usize, stat: &mut Stat) {
        let Some(n) = node else {
            return;
        };
        Self::extract_recursive(n.left.as_deref(), out, idx, stat);
        if let Some(slot) = out.get_mut(*idx) {
            *slot = n.value.clone();
            stat.record_memory_op(1);
            *idx += 1;
        }
        Self::extract_recursive(n.right.as_deref(), out, idx, stat);
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Teardown
impl<T, C> AvlTree<T, C> {
    /// Release every node by a post-order walk.
    pub fn clear(&mut self) {
        Self::clear_recursive(self.root_.take());
        self.stats_.size = 0;
    }

    fn clear_recursive(link: Link<T>) {
        if let Some(mut node) = link {
            Self::clear_recursive(node.left.take());
            Self::clear_recursive(node.right.take());
        }
    }
}

impl<T, C> Drop for AvlTree<T, C> {
    fn drop(&mut self) {
        self.clear();
        debug_assert!(self.stats_.size == 0);
    }
}

/// Verification
impl<T, C> AvlTree<T, C>
where
    T: Clone,
    C: KeyComparator<T>,
{
    /// Walk every node checking cached heights, balance factors, in-order
    /// ordering and the tracked size.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut position = 0;
        let mut prev: Option<&T> = None;
        self.validate_recursive(self.root_.as_deref(), &mut position, &mut prev)?;
        if position != self.stats_.size {
            return Err(InvariantViolation::SizeMismatch {
                tracked: self.stats_.size,
                counted: position,
            });
        }
        Ok(())
    }

    fn validate_recursive<'a>(
        &self,
        node: Option<&'a Node<T>>,
        position: &mut usize,
        prev: &mut Option<&'a T>,
    ) -> Result<usize, InvariantViolation> {
        let Some(n) = node else {
            return Ok(0);
        };
        let lh = self.validate_recursive(n.left.as_deref(), position, prev)?;

        let here = *position;
        if let Some(p) = *prev {
            if self.key_cmp.compare(p, &n.value) == Ordering::Greater {
                return Err(InvariantViolation::OutOfOrder { position: here });
            }
        }
        *prev = Some(&n.value);
        *position += 1;

        let rh = self.validate_recursive(n.right.as_deref(), position, prev)?;

        let actual = 1 + lh.max(rh);
        if n.height != actual {
            return Err(InvariantViolation::StaleHeight {
                position: here,
                cached: n.height,
                actual,
            });
        }
        let bal = lh as isize - rh as isize;
        if bal.abs() > 1 {
            return Err(InvariantViolation::Unbalanced {
                position: here,
                balance: bal,
            });
        }
        Ok(actual)
    }

    fn verify(&self) {
        if self.options_.self_verify {
            debug_assert!(self.validate().is_ok(), "{:?}", self.validate());
        }
    }
}

/// Debug
impl<T: std::fmt::Debug, C> AvlTree<T, C> {
    fn print_node(f: &mut std::fmt::Formatter<'_>, node: &Node<T>, depth: usize) -> std::fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        writeln!(f, "{:?} height {} balance {}", node.value, node.height, node.balance())?;

        if let Some(left) = node.left.as_deref() {
            Self::print_node(f, left, depth + 1)?;
        }
        if let Some(right) = node.right.as_deref() {
            Self::print_node(f, right, depth + 1)?;
        }
        Ok(())
    }
}

/// Display
impl<T: std::fmt::Debug, C> std::fmt::Debug for AvlTree<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AvlTree size {} height {}", self.len(), self.height())?;
        if let Some(root) = self.root_.as_deref() {
            Self::print_node(f, root, 0)?;
        }
        Ok(())
    }
}
