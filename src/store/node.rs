pub(crate) type Link<R> = Option<Box<Node<R>>>;

/// Storage for a single record and the two ownership links below it.
///
/// A node exclusively owns its children, so dropping a node drops its whole
/// subtree. The store flattens that recursion, see [`OrderedStore::clear`].
///
/// [`OrderedStore::clear`]: super::OrderedStore::clear
pub(crate) struct Node<R> {
    pub(crate) record: R,
    pub(crate) left: Link<R>,
    pub(crate) right: Link<R>,
}

impl<R> Node<R> {
    pub(crate) fn new(record: R) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }
}
