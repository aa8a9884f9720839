mod iter;
mod node;

use std::cmp::Ordering;

use crate::prelude::*;

pub use iter::Iter;

use node::{Link, Node};

/// An ordered associative container backed by an unbalanced binary search
/// tree: one record per key, strict ordering on the key, no balancing.
///
/// Adversarial insertion orders degrade the tree to a list and lookups to
/// O(n); this is accepted. Every operation is synchronous and leaves the tree
/// untouched on failure. The store assumes exclusive ownership by a single
/// caller; wrap it in a `Mutex` if it has to cross threads.
pub struct OrderedStore<R> {
    root: Link<R>,
    len: usize,
}

impl<R> Default for OrderedStore<R> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<R> OrderedStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-order traversal, strictly ascending by key. Restartable and
    /// non-mutating; see [`Iter`].
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(&self.root)
    }

    /// Drops every record, using a worklist rather than `Box`'s recursive
    /// drop, which would recurse once per tree level.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }

        self.len = 0;
    }
}

impl<R: Keyed> OrderedStore<R> {
    /// Inserts a record at the absent slot its key descends to. Fails with
    /// [`StoreError::DuplicateKey`] if the key is already present, leaving
    /// the tree unchanged.
    pub fn insert(&mut self, record: R) -> Result<(), StoreError> {
        let link = Self::find_link_mut(&mut self.root, record.key());
        if link.is_some() {
            return Err(StoreError::DuplicateKey);
        }

        *link = Some(Box::new(Node::new(record)));
        self.len += 1;

        Ok(())
    }

    /// Looks up a record by key. The returned reference aliases the stored
    /// record; `None` means the key is absent.
    pub fn get(&self, key: &R::Key) -> Option<&R> {
        let mut link = &self.root;

        while let Some(node) = link {
            match key.cmp(node.record.key()) {
                Ordering::Equal => return Some(&node.record),
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
            }
        }

        None
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.get(key).is_some()
    }

    /// Replaces the payload stored under `key` in place, without touching the
    /// tree shape.
    ///
    /// The replacement must carry the same key: rekeying through `update`
    /// would silently break the ordering invariant, so it fails with
    /// [`StoreError::KeyMismatch`] and rekeying is spelled `remove` +
    /// `insert`.
    pub fn update(&mut self, key: &R::Key, record: R) -> Result<(), StoreError> {
        if record.key() != key {
            return Err(StoreError::KeyMismatch);
        }

        match Self::find_link_mut(&mut self.root, key) {
            Some(node) => {
                node.record = record;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Unlinks the record stored under `key` and hands it back.
    ///
    /// Classic three-case deletion: a leaf just vanishes, a node with one
    /// child is replaced by that subtree, and a node with two children is
    /// replaced by its in-order successor — always the leftmost node of the
    /// right subtree, never the left subtree's maximum.
    pub fn remove(&mut self, key: &R::Key) -> Result<R, StoreError> {
        let link = Self::find_link_mut(&mut self.root, key);
        let Some(mut node) = link.take() else {
            return Err(StoreError::NotFound);
        };

        match (node.left.take(), node.right.take()) {
            (None, None) => {}
            (Some(child), None) | (None, Some(child)) => *link = Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                // Non-empty subtree, so it has a minimum.
                let mut successor = Self::take_min(&mut right).unwrap();
                successor.left = Some(left);
                successor.right = right;
                *link = Some(successor);
            }
        }

        self.len -= 1;

        Ok(node.record)
    }

    /// Descends to the link holding `key`, or to the absent slot where it
    /// would be inserted.
    fn find_link_mut<'a>(mut link: &'a mut Link<R>, key: &R::Key) -> &'a mut Link<R> {
        loop {
            match link.as_deref().map(|node| key.cmp(node.record.key())) {
                None | Some(Ordering::Equal) => return link,
                // These arms are only reachable when the link is occupied.
                Some(Ordering::Less) => link = &mut link.as_mut().unwrap().left,
                Some(Ordering::Greater) => link = &mut link.as_mut().unwrap().right,
            }
        }
    }

    /// Unlinks the leftmost node below `link`, promoting its right child.
    fn take_min(link: &mut Link<R>) -> Option<Box<Node<R>>> {
        let mut link = link;

        while link.as_ref().map_or(false, |node| node.left.is_some()) {
            link = &mut link.as_mut().unwrap().left;
        }

        let mut min = link.take()?;
        *link = min.right.take();

        Some(min)
    }
}

impl<R> Drop for OrderedStore<R> {
    fn drop(&mut self) {
        self.clear();
    }
}
