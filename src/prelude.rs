pub use crate::{
    error::*,
    store::{Iter, OrderedStore},
};

/// A record that exposes the key it is ordered and looked up by.
///
/// The store is agnostic to the payload shape beyond this: the key decides a
/// record's position in the tree and its uniqueness, nothing else does.
pub trait Keyed {
    type Key: Ord;

    fn key(&self) -> &Self::Key;
}
