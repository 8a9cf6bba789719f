pub type Link<T> = Option<Box<Node<T>>>;

/// A tree node exclusively owning its record and both subtrees.
#[derive(Debug)]
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
    pub height: usize,
}

impl<T> Node<T> {
    pub fn new_leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// height(left) - height(right)
    #[inline]
    pub fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    #[inline]
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

/// Height of a possibly empty subtree: empty = 0, leaf = 1.
#[inline]
pub fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

#[inline]
pub fn balance<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(0, |n| n.balance())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_height_and_balance() {
        let mut root = Node::new_leaf(2);
        assert!(root.is_leaf());
        assert_eq!(height::<i32>(&None), 0);
        root.left = Some(Node::new_leaf(1));
        root.update_height();
        assert_eq!(root.height, 2);
        assert_eq!(root.balance(), 1);
        assert!(!root.is_leaf());
        assert_eq!(balance(&root.left), 0);
    }
}
