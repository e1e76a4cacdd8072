use super::arena::Arena;
use super::handle::Handle;

/// One vertex of the AVL tree.
///
/// `left` and `right` are the owning links in the tree shape (the arena owns the storage);
/// `parent` is only ever followed upwards and is `None` exactly for the root.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) parent: Option<Handle>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    // Height of the subtree rooted here; a leaf is 1 and a missing child counts as 0.
    pub(crate) height: u8,
}

impl<K> Node<K> {
    /// Creates a detached leaf.
    pub(crate) const fn leaf(key: K, parent: Option<Handle>) -> Self {
        Self {
            key,
            parent,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Structural queries that only need the node storage, not the comparator.
///
/// Borrowing iterators hold nothing but `&Arena<Node<K>>`, so the in-order walks live here.
impl<K> Arena<Node<K>> {
    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K> {
        self.get_mut(handle)
    }

    /// Height of an optional subtree.
    #[inline]
    pub(crate) fn height_of(&self, subtree: Option<Handle>) -> u8 {
        subtree.map_or(0, |handle| self.get(handle).height)
    }

    /// `height(right) - height(left)`; a valid tree keeps this in `-1..=1`.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn balance(&self, handle: Handle) -> i8 {
        let node = self.get(handle);
        self.height_of(node.right) as i8 - self.height_of(node.left) as i8
    }

    /// The node holding the smallest key of the subtree rooted at `handle`.
    pub(crate) fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.get(handle).left {
            handle = left;
        }
        handle
    }

    /// The node holding the largest key of the subtree rooted at `handle`.
    pub(crate) fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.get(handle).right {
            handle = right;
        }
        handle
    }

    /// In-order successor: the leftmost node of the right subtree, otherwise the first ancestor
    /// reached through a left-child edge.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.get(handle).right {
            return Some(self.leftmost(right));
        }
        let mut child = handle;
        let mut parent = self.get(child).parent;
        while let Some(p) = parent {
            if self.get(p).left == Some(child) {
                break;
            }
            child = p;
            parent = self.get(p).parent;
        }
        parent
    }

    /// In-order predecessor, the mirror image of [`successor`](Self::successor).
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.get(handle).left {
            return Some(self.rightmost(left));
        }
        let mut child = handle;
        let mut parent = self.get(child).parent;
        while let Some(p) = parent {
            if self.get(p).right == Some(child) {
                break;
            }
            child = p;
            parent = self.get(p).parent;
        }
        parent
    }
}
