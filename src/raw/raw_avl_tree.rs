use alloc::vec::Vec;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::mem;

use log::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use crate::comparator::Comparator;

/// The AVL tree engine backing `AvlSet`.
#[derive(Clone)]
pub(crate) struct RawAvlTree<K, C> {
    /// Arena storing every linked node.
    nodes: Arena<Node<K>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of linked nodes.
    len: usize,
    /// The total order over keys, fixed at construction.
    cmp: C,
}

/// Outcome of [`RawAvlTree::delete`].
pub(crate) struct Removed<K> {
    /// The key that left the tree.
    pub(crate) key: K,
    /// The node that was physically unlinked and freed.
    ///
    /// This differs from the handle passed to `delete` when the target had two children: the
    /// target then takes over its in-order predecessor's key and the predecessor's node is the
    /// one unlinked.
    pub(crate) unlinked: Handle,
}

impl<K, C> RawAvlTree<K, C> {
    /// Creates a new, empty tree ordered by `cmp`.
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            cmp,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) const fn nodes(&self) -> &Arena<Node<K>> {
        &self.nodes
    }

    /// Returns the key stored in a linked node.
    #[inline]
    pub(crate) fn key(&self, handle: Handle) -> &K {
        &self.nodes.node(handle).key
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        debug!("clearing AVL tree of {} nodes", self.len);
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Moves every key out in ascending order, leaving the tree empty.
    pub(crate) fn drain_sorted(&mut self) -> Vec<K> {
        let mut order = Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(handle) = current {
            order.push(handle);
            current = self.nodes.successor(handle);
        }

        debug!("draining AVL tree of {} nodes", self.len);
        let keys = order.into_iter().map(|handle| self.nodes.remove(handle).key).collect();
        self.clear();
        keys
    }

    /// The node holding the smallest key.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.nodes.leftmost(root))
    }

    /// The node holding the largest key.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.nodes.rightmost(root))
    }

    // ─── Rotations ──────────────────────────────────────────────────────────────

    /// Puts `new` where `old` hangs, taking over `old`'s parent link.
    fn replace_subtree_root(&mut self, old: Handle, new: Handle) {
        let parent = self.nodes.node(old).parent;
        self.nodes.node_mut(new).parent = parent;
        match parent {
            Some(p) => {
                let p = self.nodes.node_mut(p);
                if p.right == Some(old) {
                    p.right = Some(new);
                } else {
                    p.left = Some(new);
                }
            }
            None => self.root = Some(new),
        }
    }

    /// Right turn of `x` around its left child `y`: `y.right` moves over to `x.left` and `x`
    /// becomes `y.right`. `y`'s own parent link is left to the caller.
    fn turn_right(&mut self, x: Handle, y: Handle) {
        let inner = self.nodes.node(y).right;
        self.nodes.node_mut(x).left = inner;
        if let Some(inner) = inner {
            self.nodes.node_mut(inner).parent = Some(x);
        }
        self.nodes.node_mut(x).parent = Some(y);
        self.nodes.node_mut(y).right = Some(x);
    }

    /// Mirror image of [`turn_right`](Self::turn_right).
    fn turn_left(&mut self, x: Handle, y: Handle) {
        let inner = self.nodes.node(y).left;
        self.nodes.node_mut(x).right = inner;
        if let Some(inner) = inner {
            self.nodes.node_mut(inner).parent = Some(x);
        }
        self.nodes.node_mut(x).parent = Some(y);
        self.nodes.node_mut(y).left = Some(x);
    }

    /// Lifts `c`, the inner grandchild through `a`'s left child `b`, above both of them.
    ///
    /// `c` ends up with `b`'s old height and `b` loses one level; `a`'s height is the caller's.
    fn double_turn_right(&mut self, a: Handle, b: Handle) -> Handle {
        let c = self.nodes.node(b).right.expect("`RawAvlTree::double_turn_right()` - left child is not right heavy!");
        self.nodes.node_mut(c).height = self.nodes.node(b).height;
        self.nodes.node_mut(b).height -= 1;
        self.replace_subtree_root(a, c);
        self.turn_left(b, c);
        self.turn_right(a, c);
        trace!("double right rotation: {c:?} replaces {a:?}");
        c
    }

    /// Mirror image of [`double_turn_right`](Self::double_turn_right).
    fn double_turn_left(&mut self, a: Handle, b: Handle) -> Handle {
        let c = self.nodes.node(b).left.expect("`RawAvlTree::double_turn_left()` - right child is not left heavy!");
        self.nodes.node_mut(c).height = self.nodes.node(b).height;
        self.nodes.node_mut(b).height -= 1;
        self.replace_subtree_root(a, c);
        self.turn_right(b, c);
        self.turn_left(a, c);
        trace!("double left rotation: {c:?} replaces {a:?}");
        c
    }

    fn single_turn_right(&mut self, a: Handle, b: Handle) {
        self.replace_subtree_root(a, b);
        self.turn_right(a, b);
        trace!("right rotation: {b:?} replaces {a:?}");
    }

    fn single_turn_left(&mut self, a: Handle, b: Handle) {
        self.replace_subtree_root(a, b);
        self.turn_left(a, b);
        trace!("left rotation: {b:?} replaces {a:?}");
    }

    fn left_child(&self, handle: Handle) -> Handle {
        self.nodes.node(handle).left.expect("`RawAvlTree` - left heavy node has no left child!")
    }

    fn right_child(&self, handle: Handle) -> Handle {
        self.nodes.node(handle).right.expect("`RawAvlTree` - right heavy node has no right child!")
    }

    /// Fixes a left-heavy `a` (balance -2) reached while walking up after an insertion.
    ///
    /// `a.height` is still the pre-insertion value, one below its true height.
    fn rotate_right_on_insert(&mut self, a: Handle) {
        self.nodes.node_mut(a).height -= 1;
        let b = self.left_child(a);
        if self.nodes.balance(b) == 1 {
            self.double_turn_right(a, b);
        } else {
            self.single_turn_right(a, b);
        }
    }

    /// Mirror image of [`rotate_right_on_insert`](Self::rotate_right_on_insert).
    fn rotate_left_on_insert(&mut self, a: Handle) {
        self.nodes.node_mut(a).height -= 1;
        let b = self.right_child(a);
        if self.nodes.balance(b) == -1 {
            self.double_turn_left(a, b);
        } else {
            self.single_turn_left(a, b);
        }
    }

    /// Fixes a left-heavy `a` (balance -2) reached while walking up after a deletion.
    ///
    /// Returns where the walk continues, or `None` when the rotated subtree kept its height.
    fn rotate_right_on_delete(&mut self, a: Handle) -> Option<Handle> {
        let b = self.left_child(a);
        match self.nodes.balance(b) {
            1 => {
                self.nodes.node_mut(a).height -= 2;
                let c = self.double_turn_right(a, b);
                self.nodes.node(c).parent
            }
            -1 => {
                self.nodes.node_mut(a).height -= 2;
                self.single_turn_right(a, b);
                self.nodes.node(b).parent
            }
            _ => {
                self.nodes.node_mut(a).height -= 1;
                self.nodes.node_mut(b).height += 1;
                self.single_turn_right(a, b);
                None
            }
        }
    }

    /// Mirror image of [`rotate_right_on_delete`](Self::rotate_right_on_delete).
    fn rotate_left_on_delete(&mut self, a: Handle) -> Option<Handle> {
        let b = self.right_child(a);
        match self.nodes.balance(b) {
            -1 => {
                self.nodes.node_mut(a).height -= 2;
                let c = self.double_turn_left(a, b);
                self.nodes.node(c).parent
            }
            1 => {
                self.nodes.node_mut(a).height -= 2;
                self.single_turn_left(a, b);
                self.nodes.node(b).parent
            }
            _ => {
                self.nodes.node_mut(a).height -= 1;
                self.nodes.node_mut(b).height += 1;
                self.single_turn_left(a, b);
                None
            }
        }
    }

    // ─── Rebalancing walks ──────────────────────────────────────────────────────

    /// Walks up from `start` after a subtree below it grew by one level.
    ///
    /// Stops at the first node whose balance returns to zero or after the single rotation an
    /// insertion can need.
    fn rebalance_after_insert(&mut self, start: Option<Handle>) {
        let mut current = start;
        while let Some(handle) = current {
            match self.nodes.balance(handle) {
                -2 => return self.rotate_right_on_insert(handle),
                2 => return self.rotate_left_on_insert(handle),
                0 => return,
                _ => {
                    let node = self.nodes.node_mut(handle);
                    node.height += 1;
                    current = node.parent;
                }
            }
        }
    }

    /// Walks up from `start` after a subtree below it shrank by one level.
    ///
    /// Unlike insertion this may rotate at every level up to the root.
    fn rebalance_after_delete(&mut self, start: Option<Handle>) {
        let mut current = start;
        while let Some(handle) = current {
            // Root of the subtree this step settled.
            let top = match self.nodes.balance(handle) {
                balance @ (-2 | 2) => {
                    current = if balance < 0 {
                        self.rotate_right_on_delete(handle)
                    } else {
                        self.rotate_left_on_delete(handle)
                    };
                    self.nodes.node(handle).parent.unwrap_or(handle)
                }
                0 => {
                    let node = self.nodes.node_mut(handle);
                    node.height -= 1;
                    current = node.parent;
                    handle
                }
                _ => return,
            };
            if self.root == Some(top) {
                trace!("delete rebalance reached the root");
            }
        }
    }

    // ─── Deletion ───────────────────────────────────────────────────────────────

    /// Unhooks the leaf `child` from `parent` and returns where rebalancing starts.
    ///
    /// When `parent` becomes a leaf its height is already settled at 1, so the walk starts one
    /// level higher.
    fn detach_leaf(&mut self, parent: Handle, child: Handle) -> Option<Handle> {
        let node = self.nodes.node_mut(parent);
        if node.left == Some(child) {
            node.left = None;
        } else {
            node.right = None;
        }
        if node.is_leaf() {
            node.height = 1;
            node.parent
        } else {
            Some(parent)
        }
    }

    /// Removes the key held by `target` from the tree.
    ///
    /// A target with two children is not unlinked: it receives its in-order predecessor's key
    /// and the predecessor's node (which has at most one child) is unlinked instead. Callers
    /// that hold handles across this call must not assume a handle keeps its key.
    pub(crate) fn delete(&mut self, target: Handle) -> Removed<K> {
        let (parent, left, right) = {
            let node = self.nodes.node(target);
            (node.parent, node.left, node.right)
        };

        let (unlinked, walk_from) = match (left, right) {
            (None, None) => match parent {
                Some(parent) => (target, self.detach_leaf(parent, target)),
                None => {
                    self.root = None;
                    (target, None)
                }
            },
            (Some(child), None) | (None, Some(child)) => {
                self.replace_subtree_root(target, child);
                (target, parent)
            }
            (Some(left), Some(_)) => {
                let predecessor = self.nodes.rightmost(left);
                let node = self.nodes.node(predecessor);
                let (pred_parent, pred_left) = (node.parent, node.left);
                let pred_parent = pred_parent.expect("`RawAvlTree::delete()` - predecessor has no parent!");
                let walk_from = match pred_left {
                    Some(child) => {
                        self.replace_subtree_root(predecessor, child);
                        Some(pred_parent)
                    }
                    None => self.detach_leaf(pred_parent, predecessor),
                };
                (predecessor, walk_from)
            }
        };

        self.rebalance_after_delete(walk_from);
        self.len -= 1;

        let freed = self.nodes.remove(unlinked);
        let key = if unlinked == target {
            freed.key
        } else {
            mem::replace(&mut self.nodes.node_mut(target).key, freed.key)
        };

        Removed {
            key,
            unlinked,
        }
    }

    /// Removes and returns the smallest key.
    pub(crate) fn pop_first(&mut self) -> Option<K> {
        self.first().map(|handle| self.delete(handle).key)
    }

    /// Removes and returns the largest key.
    pub(crate) fn pop_last(&mut self) -> Option<K> {
        self.last().map(|handle| self.delete(handle).key)
    }
}

impl<K, C: Comparator<K>> RawAvlTree<K, C> {
    /// Finds the node whose key compares equal to `key`.
    pub(crate) fn find(&self, key: &K) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.node(handle);
            current = match self.cmp.compare(key, &node.key) {
                Less => node.left,
                Greater => node.right,
                Equal => return Some(handle),
            };
        }
        None
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, if an equal
    /// key is already present.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.insert(Node::leaf(key, None)));
            self.len = 1;
            return true;
        };

        let (parent, side) = loop {
            let node = self.nodes.node(current);
            let side = self.cmp.compare(&key, &node.key);
            let child = match side {
                Less => node.left,
                Greater => node.right,
                Equal => return false,
            };
            match child {
                Some(child) => current = child,
                None => break (current, side),
            }
        };

        let leaf = self.nodes.insert(Node::leaf(key, Some(parent)));
        let node = self.nodes.node_mut(parent);
        if side == Less {
            node.left = Some(leaf);
        } else {
            node.right = Some(leaf);
        }
        self.len += 1;

        // The parent only grows if it was a leaf before; otherwise the new leaf filled its gap.
        if node.height == 1 {
            node.height = 2;
            let grandparent = node.parent;
            self.rebalance_after_insert(grandparent);
        }
        true
    }

    /// Removes the key equal to `key`, returning the stored key.
    pub(crate) fn remove(&mut self, key: &K) -> Option<K> {
        self.find(key).map(|handle| self.delete(handle).key)
    }

    /// The node with the greatest key strictly less than `key`.
    pub(crate) fn lower(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.node(handle);
            if self.cmp.compare(key, &node.key) == Greater {
                best = Some(handle);
                current = node.right;
            } else {
                current = node.left;
            }
        }
        best
    }

    /// The node with the least key strictly greater than `key`.
    pub(crate) fn higher(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.node(handle);
            if self.cmp.compare(key, &node.key) == Less {
                best = Some(handle);
                current = node.left;
            } else {
                current = node.right;
            }
        }
        best
    }

    /// The node with the greatest key less than or equal to `key`.
    pub(crate) fn floor(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.node(handle);
            match self.cmp.compare(key, &node.key) {
                Less => current = node.left,
                Greater => {
                    best = Some(handle);
                    current = node.right;
                }
                Equal => return Some(handle),
            }
        }
        best
    }

    /// The node with the least key greater than or equal to `key`.
    pub(crate) fn ceiling(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.node(handle);
            match self.cmp.compare(key, &node.key) {
                Less => {
                    best = Some(handle);
                    current = node.left;
                }
                Greater => current = node.right,
                Equal => return Some(handle),
            }
        }
        best
    }
}
