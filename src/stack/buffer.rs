use crate::stack::error::{StackError, StackResult};

/// Backing storage with the capacity tracked as policy state.
///
/// The inner `Vec` is storage only: `capacity` is the number of slots the
/// container has decided to keep allocated, and every reallocation goes
/// through [`grow`](Buffer::grow) or [`shrink`](Buffer::shrink).
#[derive(Debug)]
pub(crate) struct Buffer<T> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T> Buffer<T> {
    pub(crate) fn new(capacity: usize) -> StackResult<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| StackError::OutOfMemory)?;
        Ok(Self { slots, capacity })
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reallocates to `new_capacity` slots, copying the live elements. On
    /// failure the buffer keeps its previous allocation and capacity.
    pub(crate) fn grow(&mut self, new_capacity: usize) -> StackResult<()> {
        debug_assert!(new_capacity > self.capacity);
        let additional = new_capacity - self.slots.len();
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| StackError::OutOfMemory)?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Hands slots beyond `new_capacity` back to the allocator. Infallible:
    /// if the allocator keeps the old block, the buffer merely stays big.
    pub(crate) fn shrink(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.slots.len());
        self.slots.shrink_to(new_capacity);
        self.capacity = new_capacity;
    }

    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(self.slots.len() < self.capacity);
        self.slots.push(value);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.slots.pop()
    }
}
