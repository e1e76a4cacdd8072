use core::fmt;
use core::iter::FusedIterator;

use super::AvlSet;
use crate::comparator::Comparator;
use crate::error::AvlSetError;
use crate::raw::{Direction, RawCursor};

/// An iterator over an `AvlSet` that can remove the element it yielded last.
///
/// This `struct` is created by the [`ascending`] and [`descending`] methods on [`AvlSet`]. It
/// borrows the set mutably and yields clones of the elements, so the set can be modified
/// through [`remove`](KeyIter::remove) while the walk goes on. Removing never causes an element
/// to be skipped or visited twice.
///
/// # Examples
///
/// ```
/// use avl_set::{AvlSet, AvlSetError};
///
/// let mut set = AvlSet::from([10, 20, 30]);
/// let mut iter = set.descending();
/// assert_eq!(iter.remove(), Err(AvlSetError::NothingToRemove));
///
/// assert_eq!(iter.next(), Some(30));
/// assert_eq!(iter.remove(), Ok(30));
/// assert_eq!(iter.remove(), Err(AvlSetError::NothingToRemove));
/// assert!(iter.has_next());
/// assert_eq!(iter.len(), 2);
/// ```
///
/// [`ascending`]: AvlSet::ascending
/// [`descending`]: AvlSet::descending
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct KeyIter<'a, T, C, D> {
    set: &'a mut AvlSet<T, C>,
    cursor: RawCursor<D>,
    /// Elements not yet yielded.
    remaining: usize,
}

impl<'a, T, C, D: Direction> KeyIter<'a, T, C, D> {
    pub(super) fn new(set: &'a mut AvlSet<T, C>) -> Self {
        let cursor = RawCursor::new(&set.tree);
        let remaining = set.len();
        KeyIter { set, cursor, remaining }
    }

    /// Returns `true` if [`next`](Iterator::next) would yield another element.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.cursor.has_next()
    }
}

impl<T, C: Comparator<T>, D: Direction> KeyIter<'_, T, C, D> {
    /// Removes the element returned by the most recent call to `next` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AvlSetError::NothingToRemove`] if `next` has not yielded anything yet, or if the
    /// element it yielded last has already been removed.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self) -> Result<T, AvlSetError> {
        self.cursor.remove(&mut self.set.tree).ok_or(AvlSetError::NothingToRemove)
    }
}

impl<T: Clone, C, D: Direction> Iterator for KeyIter<'_, T, C, D> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let handle = self.cursor.advance(&self.set.tree)?;
        self.remaining -= 1;
        Some(self.set.tree.key(handle).clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone, C, D: Direction> ExactSizeIterator for KeyIter<'_, T, C, D> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: Clone, C, D: Direction> FusedIterator for KeyIter<'_, T, C, D> {}

impl<T, C, D> fmt::Debug for KeyIter<'_, T, C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyIter").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}
