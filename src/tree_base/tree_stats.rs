/// Structural counters kept by a tree across its lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub left_rotations: usize,
    pub right_rotations: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotations(&self) -> usize {
        self.left_rotations + self.right_rotations
    }
}
