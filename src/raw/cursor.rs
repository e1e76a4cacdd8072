use core::marker::PhantomData;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::raw_avl_tree::RawAvlTree;
use crate::comparator::Comparator;

mod sealed {
    use super::{Arena, Handle, Node};

    pub(crate) trait Sealed {
        /// Where a walk in this direction begins.
        fn start<K>(nodes: &Arena<Node<K>>, root: Option<Handle>) -> Option<Handle>;

        /// The node after `handle` in this direction.
        fn step<K>(nodes: &Arena<Node<K>>, handle: Handle) -> Option<Handle>;

        /// Repairs the pending `next` cursor after the element at `slot` was deleted and the
        /// node `unlinked` was freed.
        fn repair(next: &mut Option<Handle>, slot: Handle, unlinked: Handle);
    }
}

/// Walking order of a [`KeyIter`](crate::avl_set::KeyIter).
///
/// Implemented only by [`Ascending`] and [`Descending`].
#[allow(private_bounds)]
pub trait Direction: sealed::Sealed {}

/// Smallest element first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Ascending;

/// Largest element first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Descending;

impl sealed::Sealed for Ascending {
    fn start<K>(nodes: &Arena<Node<K>>, root: Option<Handle>) -> Option<Handle> {
        root.map(|root| nodes.leftmost(root))
    }

    fn step<K>(nodes: &Arena<Node<K>>, handle: Handle) -> Option<Handle> {
        nodes.successor(handle)
    }

    // Deleting a two-child node unlinks its predecessor, which an ascending walk has already
    // passed; the pending successor is untouched.
    fn repair(_next: &mut Option<Handle>, _slot: Handle, _unlinked: Handle) {}
}

impl sealed::Sealed for Descending {
    fn start<K>(nodes: &Arena<Node<K>>, root: Option<Handle>) -> Option<Handle> {
        root.map(|root| nodes.rightmost(root))
    }

    fn step<K>(nodes: &Arena<Node<K>>, handle: Handle) -> Option<Handle> {
        nodes.predecessor(handle)
    }

    // A two-child node's predecessor is exactly the pending `next`. Its key moved into `slot`
    // and its node is gone, so the walk resumes at `slot`.
    fn repair(next: &mut Option<Handle>, slot: Handle, unlinked: Handle) {
        if *next == Some(unlinked) {
            *next = Some(slot);
        }
    }
}

impl Direction for Ascending {}
impl Direction for Descending {}

/// Iteration state that survives deletions issued through [`remove`](Self::remove).
///
/// `next` is the node to yield next; `last` is the node yielded most recently, cleared once it
/// has been removed.
#[derive(Debug)]
pub(crate) struct RawCursor<D> {
    next: Option<Handle>,
    last: Option<Handle>,
    direction: PhantomData<D>,
}

impl<D: Direction> RawCursor<D> {
    pub(crate) fn new<K, C>(tree: &RawAvlTree<K, C>) -> Self {
        Self {
            next: D::start(tree.nodes(), tree.root()),
            last: None,
            direction: PhantomData,
        }
    }

    pub(crate) const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Yields the pending node and steps past it.
    pub(crate) fn advance<K, C>(&mut self, tree: &RawAvlTree<K, C>) -> Option<Handle> {
        let current = self.next?;
        self.next = D::step(tree.nodes(), current);
        self.last = Some(current);
        Some(current)
    }

    /// Deletes the element yielded by the last [`advance`](Self::advance).
    ///
    /// Returns `None` if nothing was yielded since the previous removal.
    pub(crate) fn remove<K, C: Comparator<K>>(&mut self, tree: &mut RawAvlTree<K, C>) -> Option<K> {
        let slot = self.last.take()?;
        let removed = tree.delete(slot);
        D::repair(&mut self.next, slot, removed.unlinked);
        Some(removed.key)
    }
}
