use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes.
///
/// A node keeps its handle for as long as it is linked into the tree; rotations only rewrite
/// links, so a handle held by a cursor stays valid until that exact node is unlinked.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    /// Number of elements the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional.saturating_sub(self.vacant.len()));
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub(crate) fn insert(&mut self, element: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.to_index()] = Some(element);
            return handle;
        }

        // A fresh slot gets index `slots.len()`, which must itself be a valid handle index.
        assert!(self.slots.len() <= Handle::MAX, "`Arena::insert()` - arena is full ({} slots)", Handle::MAX + 1);
        self.slots.push(Some(element));
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.to_index()] {
            Some(element) => element,
            None => panic!("`Arena::get()` - {handle:?} is vacant!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.to_index()] {
            Some(element) => element,
            None => panic!("`Arena::get_mut()` - {handle:?} is vacant!"),
        }
    }

    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let Some(element) = self.slots[handle.to_index()].take() else {
            panic!("`Arena::remove()` - {handle:?} is vacant!");
        };
        self.vacant.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}
