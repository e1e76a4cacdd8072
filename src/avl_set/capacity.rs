use super::AvlSet;
use crate::comparator::NaturalOrder;
use crate::raw::RawAvlTree;

impl<T> AvlSet<T> {
    /// Creates an empty set with room for at least `capacity` elements before the node storage
    /// has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set: AvlSet<i32> = AvlSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlSet::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, C> AvlSet<T, C> {
    /// Creates an empty set ordered by `cmp` with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::{AvlSet, ReverseOrder};
    ///
    /// let mut set = AvlSet::with_capacity_and_comparator(4, ReverseOrder);
    /// set.extend([1, 2, 3]);
    /// assert_eq!(set.to_vec(), [3, 2, 1]);
    /// ```
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        AvlSet {
            tree: RawAvlTree::with_capacity(capacity, cmp),
        }
    }

    /// Returns how many elements the set can hold without growing its node storage.
    ///
    /// Removing elements does not shrink the storage; freed nodes are reused by later inserts.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1]);
    /// set.reserve(10);
    /// assert!(set.capacity() >= 11);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.tree.reserve(additional);
    }
}
