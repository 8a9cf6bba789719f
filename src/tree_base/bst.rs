use std::cmp::Ordering;

use super::{
    iter::InOrderIter,
    node::{Link, Node},
};
use crate::{compare::KeyComparator, stat::Stat};

/// Unbalanced binary search tree; equal keys go right.
///
/// Sorted input degenerates it into a list, so every walk here is iterative.
pub struct Bst<T, C> {
    root_: Link<T>,
    len_: usize,
    key_cmp: C,
}

impl<T, C> Bst<T, C>
where
    C: KeyComparator<T>,
{
    pub fn new(key_cmp: C) -> Self {
        Self {
            root_: None,
            len_: 0,
            key_cmp,
        }
    }

    pub fn insert(&mut self, value: T, stat: &mut Stat) {
        let mut slot = &mut self.root_;
        while let Some(node) = slot {
            slot = if stat.compare(&self.key_cmp, &value, &node.value) == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_leaf(value));
        stat.record_memory_op(1);
        self.len_ += 1;
    }

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
}

impl<T, C> Bst<T, C> {
    pub fn len(&self) -> usize {
        self.len_
    }

    pub fn is_empty(&self) -> bool {
        self.len_ == 0
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root_.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, d)) = stack.pop() {
            deepest = deepest.max(d);
            stack.extend(node.left.as_deref().map(|n| (n, d + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, d + 1)));
        }
        deepest
    }

    pub fn iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self.root_.as_deref(), self.len_)
    }

    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root_.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len_ = 0;
    }
}

impl<T, C> Drop for Bst<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}
