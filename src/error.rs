use thiserror::Error;

/// Errors reported by [`AvlSet`](crate::AvlSet) and its removable iterators.
///
/// Every failure is deterministic: the same sequence of calls on the same set always fails
/// the same way, so these indicate a violated precondition rather than a transient condition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum AvlSetError {
    /// The set has no elements, so it has no first or last element either.
    #[error("the set is empty")]
    Empty,
    /// [`KeyIter::remove`](crate::avl_set::KeyIter::remove) was called before the first
    /// advance, or twice for the same yielded element.
    #[error("no yielded element is available to remove")]
    NothingToRemove,
}
