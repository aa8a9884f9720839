use super::node::{Link, Node};

/// Lazy in-order traversal over a store, ascending by key.
///
/// Holds an explicit stack of the unvisited left spine instead of recursing,
/// so a degenerate (list-shaped) tree cannot overflow the call stack. Each
/// call to [`OrderedStore::iter`] starts a fresh, independent traversal.
///
/// [`OrderedStore::iter`]: super::OrderedStore::iter
pub struct Iter<'a, R> {
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> Iter<'a, R> {
    pub(crate) fn new(root: &'a Link<R>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<R>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.record)
    }
}
