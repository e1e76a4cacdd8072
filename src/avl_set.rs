use alloc::vec::{self, Vec};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::comparator::{Comparator, FnComparator, NaturalOrder};
use crate::error::AvlSetError;
use crate::raw::{Arena, Handle, Node, RawAvlTree, RawCursor};

pub use crate::raw::{Ascending, Descending, Direction};

mod capacity;
mod key_iter;
#[cfg(feature = "serde")]
mod serialization;

pub use key_iter::KeyIter;

/// A navigable ordered set based on an AVL tree.
///
/// Elements are ordered by the set's [`Comparator`], which is fixed when the set is created. The
/// default, [`NaturalOrder`], uses the element type's [`Ord`] implementation; any other total
/// order can be injected with [`AvlSet::with_comparator`] or [`AvlSet::from_fn`].
///
/// It is a logic error for an element to be modified in such a way that its ordering relative to
/// any other element, as determined by the comparator, changes while it is in the set. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `AvlSet` that observed it and not result in undefined behavior.
///
/// Besides the usual set operations the set answers neighbour queries ([`lower`], [`floor`],
/// [`ceiling`], [`higher`]) and hands out iterators that can delete the element they just
/// yielded ([`ascending`], [`descending`]).
///
/// [`lower`]: AvlSet::lower
/// [`floor`]: AvlSet::floor
/// [`ceiling`]: AvlSet::ceiling
/// [`higher`]: AvlSet::higher
/// [`ascending`]: AvlSet::ascending
/// [`descending`]: AvlSet::descending
///
/// # Examples
///
/// ```
/// use avl_set::AvlSet;
///
/// let mut books = AvlSet::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// if !books.contains(&"The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// books.remove(&"The Odyssey");
///
/// // The first title after "T" in alphabetical order.
/// assert_eq!(books.ceiling(&"T"), Some(&"The Great Gatsby"));
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A set with a known list of elements can be initialized from an array:
///
/// ```
/// use avl_set::AvlSet;
///
/// let set = AvlSet::from([1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct AvlSet<T, C = NaturalOrder> {
    tree: RawAvlTree<T, C>,
}

/// An iterator over the elements of an `AvlSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`AvlSet`]. Walking it from the back
/// yields the elements in descending order.
///
/// # Examples
///
/// ```
/// use avl_set::AvlSet;
///
/// let set = AvlSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: AvlSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    nodes: &'a Arena<Node<T>>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the elements of an `AvlSet`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`AvlSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: AvlSet#method.into_iter
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> AvlSet<T> {
    /// Makes a new, empty `AvlSet` ordered by [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set: AvlSet<i32> = AvlSet::new();
    /// assert!(set.insert(1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, F> AvlSet<T, FnComparator<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Makes a new, empty `AvlSet` ordered by the closure `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from_fn(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// set.insert("ccc");
    /// set.insert("a");
    /// // Same length as "a", so it counts as already present.
    /// assert!(!set.insert("b"));
    /// assert_eq!(set.to_vec(), ["a", "ccc"]);
    /// ```
    #[must_use]
    pub const fn from_fn(f: F) -> Self {
        Self::with_comparator(FnComparator(f))
    }
}

impl<T, C> AvlSet<T, C> {
    /// Makes a new, empty `AvlSet` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::{AvlSet, ReverseOrder};
    ///
    /// let mut set = AvlSet::with_comparator(ReverseOrder);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), Ok(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        AvlSet {
            tree: RawAvlTree::new(cmp),
        }
    }

    /// Returns the comparator that orders this set.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    /// Returns the first element in the set, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AvlSetError::Empty`] if the set has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::{AvlSet, AvlSetError};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.first(), Err(AvlSetError::Empty));
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn first(&self) -> Result<&T, AvlSetError> {
        self.tree.first().map(|handle| self.tree.key(handle)).ok_or(AvlSetError::Empty)
    }

    /// Returns the last element in the set, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AvlSetError::Empty`] if the set has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([1, 2]);
    /// assert_eq!(set.last(), Ok(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn last(&self) -> Result<&T, AvlSetError> {
        self.tree.last().map(|handle| self.tree.key(handle)).ok_or(AvlSetError::Empty)
    }

    /// Removes the first element from the set and returns it, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1, 2]);
    /// assert_eq!(set.pop_first(), Some(1));
    /// assert_eq!(set.pop_first(), Some(2));
    /// assert_eq!(set.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.pop_first()
    }

    /// Removes the last element from the set and returns it, if any.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.pop_last()
    }

    /// Clears the set, removing all elements.
    ///
    /// The node storage is kept for reuse; see [`capacity`](AvlSet::capacity).
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Gets an iterator over the elements of the set, in ascending order.
    ///
    /// The iterator is double-ended: `set.iter().rev()` walks the set in descending order.
    /// Use [`ascending`](AvlSet::ascending) or [`descending`](AvlSet::descending) to remove
    /// elements during the walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([3, 1, 2]);
    /// assert!(set.iter().copied().eq([1, 2, 3]));
    /// assert!(set.iter().rev().copied().eq([3, 2, 1]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; amortized O(1) per step.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.tree.nodes(),
            front: self.tree.first(),
            back: self.tree.last(),
            remaining: self.tree.len(),
        }
    }

    /// Gets a removable iterator over the set, smallest element first.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1, 2, 3, 4, 5, 6]);
    /// let mut iter = set.ascending();
    /// while let Some(value) = iter.next() {
    ///     if value % 3 == 0 {
    ///         assert_eq!(iter.remove(), Ok(value));
    ///     }
    /// }
    /// assert_eq!(set.to_vec(), [1, 2, 4, 5]);
    /// ```
    pub fn ascending(&mut self) -> KeyIter<'_, T, C, Ascending> {
        KeyIter::new(self)
    }

    /// Gets a removable iterator over the set, largest element first.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1, 2, 3, 4]);
    /// let mut iter = set.descending();
    /// assert_eq!(iter.next(), Some(4));
    /// assert_eq!(iter.next(), Some(3));
    /// iter.remove().unwrap();
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(set.to_vec(), [1, 2, 4]);
    /// ```
    pub fn descending(&mut self) -> KeyIter<'_, T, C, Descending> {
        KeyIter::new(self)
    }

    /// Copies the elements into a `Vec`, in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, C: Comparator<T>> AvlSet<T, C> {
    /// Makes a new `AvlSet` ordered by `cmp` holding the elements of `iter`.
    ///
    /// Duplicates (under `cmp`) keep the first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::{AvlSet, ReverseOrder};
    ///
    /// let set = AvlSet::from_iter_with_comparator(ReverseOrder, [2, 3, 1, 3]);
    /// assert_eq!(set.to_vec(), [3, 2, 1]);
    /// ```
    pub fn from_iter_with_comparator<I: IntoIterator<Item = T>>(cmp: C, iter: I) -> Self {
        let mut set = Self::with_comparator(cmp);
        set.extend(iter);
        set
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is returned.
    /// - If the set already contained an equal value, `false` is returned, and the entry is not
    ///   updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// Returns `true` if the set contains an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains(&self, value: &T) -> bool {
        self.tree.find(value).is_some()
    }

    /// Returns a reference to the element in the set, if any, that is equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get(&self, value: &T) -> Option<&T> {
        self.tree.find(value).map(|handle| self.tree.key(handle))
    }

    /// If the set contains an element equal to `value`, removes it from the set and drops it.
    /// Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.remove(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value)
    }

    /// Returns the greatest element strictly less than `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([1, 3, 5]);
    /// assert_eq!(set.lower(&3), Some(&1));
    /// assert_eq!(set.lower(&4), Some(&3));
    /// assert_eq!(set.lower(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn lower(&self, value: &T) -> Option<&T> {
        self.tree.lower(value).map(|handle| self.tree.key(handle))
    }

    /// Returns the greatest element less than or equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([1, 3, 5]);
    /// assert_eq!(set.floor(&3), Some(&3));
    /// assert_eq!(set.floor(&4), Some(&3));
    /// assert_eq!(set.floor(&0), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn floor(&self, value: &T) -> Option<&T> {
        self.tree.floor(value).map(|handle| self.tree.key(handle))
    }

    /// Returns the least element greater than or equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        self.tree.ceiling(value).map(|handle| self.tree.key(handle))
    }

    /// Returns the least element strictly greater than `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn higher(&self, value: &T) -> Option<&T> {
        self.tree.higher(value).map(|handle| self.tree.key(handle))
    }

    /// Inserts every value of `iter`. Returns `true` if any of them was not yet present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1, 2]);
    /// assert!(set.add_all([2, 3]));
    /// assert!(!set.add_all([1, 3]));
    /// ```
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> bool {
        iter.into_iter().fold(false, |changed, value| self.insert(value) | changed)
    }

    /// Removes every value of `iter`. Returns `true` if any of them was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1, 2, 3]);
    /// assert!(set.remove_all(&[3, 4]));
    /// assert!(!set.remove_all(&[4]));
    /// assert_eq!(set.to_vec(), [1, 2]);
    /// ```
    pub fn remove_all<'a, I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        iter.into_iter().fold(false, |changed, value| self.remove(value) | changed)
    }

    /// Returns `true` if the set contains every value of `iter`.
    ///
    /// Vacuously `true` for an empty `iter`.
    pub fn contains_all<'a, I>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        iter.into_iter().all(|value| self.contains(value))
    }

    /// Keeps only the elements that `other` also contains. Returns `true` if anything was
    /// removed.
    ///
    /// Membership in `other` is decided by `other`'s own comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1, 2, 3, 4]);
    /// assert!(set.retain_all(&AvlSet::from([2, 4, 6])));
    /// assert_eq!(set.to_vec(), [2, 4]);
    /// ```
    pub fn retain_all<D: Comparator<T>>(&mut self, other: &AvlSet<T, D>) -> bool {
        let before = self.len();
        self.retain(|value| other.contains(value));
        self.len() != before
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns `false`.
    /// The elements are visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let mut set = AvlSet::from([1, 2, 3, 4, 5, 6]);
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.iter().eq([2, 4, 6].iter()));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n) in the worst case.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = RawCursor::<Ascending>::new(&self.tree);
        while let Some(handle) = cursor.advance(&self.tree) {
            if !f(self.tree.key(handle)) {
                cursor.remove(&mut self.tree);
            }
        }
    }
}

impl<T: Hash, C> Hash for AvlSet<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq, C> PartialEq for AvlSet<T, C> {
    fn eq(&self, other: &AvlSet<T, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for AvlSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for AvlSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Default> Default for AvlSet<T, C> {
    fn default() -> Self {
        AvlSet::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for AvlSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AvlSet::from_iter_with_comparator(C::default(), iter)
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for AvlSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlSet<T> {
    /// Converts a `[T; N]` into an `AvlSet<T>`.
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set1 = AvlSet::from([1, 2, 3, 4]);
    /// let set2: AvlSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        let mut set = AvlSet::with_capacity(N);
        set.extend(arr);
        set
    }
}

impl<T, C> IntoIterator for AvlSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `AvlSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::AvlSet;
    ///
    /// let set = AvlSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.tree.drain_sorted().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = self.nodes.successor(handle);
        self.remaining -= 1;
        Some(&self.nodes.node(handle).key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = self.nodes.predecessor(handle);
        self.remaining -= 1;
        Some(&self.nodes.node(handle).key)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
