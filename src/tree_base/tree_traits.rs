/// What an insert does when the comparator reports "equal" at some node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Leave the tree untouched and report the insert as rejected.
    #[default]
    Reject,
    /// Keep descending into the right subtree, so equal keys keep insertion order.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeOptions {
    pub duplicates: DuplicatePolicy,
    /// Re-validate the whole tree after every mutation (debug builds only).
    pub self_verify: bool,
}

impl TreeOptions {
    pub const fn new(duplicates: DuplicatePolicy) -> Self {
        Self {
            duplicates,
            self_verify: false,
        }
    }

    pub const fn verified(mut self) -> Self {
        self.self_verify = true;
        self
    }
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self::new(DuplicatePolicy::Reject)
    }
}

#[cfg(test)]
#[test]
fn test_tree_options() {
    assert_eq!(TreeOptions::default().duplicates, DuplicatePolicy::Reject);
    assert!(!TreeOptions::default().self_verify);
    let opts = TreeOptions::new(DuplicatePolicy::Right).verified();
    assert_eq!(opts.duplicates, DuplicatePolicy::Right);
    assert!(opts.self_verify);
}
