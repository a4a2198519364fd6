mod buffer;
mod error;

pub use error::{StackError, StackResult};

use crate::{
    config::{INITIAL_CAPACITY, MAX_CAPACITY, MAX_ELEMENT_BYTE_SIZE},
    element::Element,
};
use buffer::Buffer;

/// Resizable LIFO stack with a bounded logical size.
///
/// The buffer starts at [`INITIAL_CAPACITY`] slots, doubles when a push
/// would overflow it, and halves (never below the initial capacity) once
/// occupancy drops under a quarter. Logical size is capped at
/// [`MAX_CAPACITY`] no matter how the buffer is sized. Dropping the stack
/// releases the buffer and every element still on it.
///
/// Not synchronized; a stack belongs to one owner at a time.
#[derive(Debug)]
pub struct Stack<T> {
    buf: Buffer<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with the initial buffer already allocated.
    ///
    /// # Errors
    ///
    /// [`StackError::OutOfMemory`] if the initial allocation fails; no
    /// partially-built stack is returned.
    pub fn new() -> StackResult<Self> {
        Ok(Self {
            buf: Buffer::new(INITIAL_CAPACITY)?,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Whether the stack has reached [`MAX_CAPACITY`], the hard ceiling on
    /// logical size. Unrelated to the current buffer capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buf.len() >= MAX_CAPACITY
    }

    /// Current buffer capacity in slots. Always between
    /// [`INITIAL_CAPACITY`] and [`MAX_CAPACITY`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Removes and returns the top element, transferring ownership to the
    /// caller. If occupancy then sits below a quarter of the buffer, the
    /// buffer is halved, but never below [`INITIAL_CAPACITY`].
    ///
    /// # Errors
    ///
    /// [`StackError::StackEmpty`] if there is nothing to pop.
    pub fn pop(&mut self) -> StackResult<T> {
        let item = self.buf.pop().ok_or(StackError::StackEmpty)?;

        // The shrink check uses the post-pop length.
        if self.buf.len() < self.buf.capacity() / 4 && self.buf.capacity() > INITIAL_CAPACITY {
            let new_capacity = (self.buf.capacity() / 2).max(INITIAL_CAPACITY);
            self.buf.shrink(new_capacity);
        }

        #[cfg(feature = "check-invariants")]
        self.check_invariants();
        Ok(item)
    }

    #[cfg(feature = "check-invariants")]
    fn check_invariants(&self) {
        assert!(self.buf.len() <= self.buf.capacity());
        assert!(self.buf.capacity() >= INITIAL_CAPACITY);
        assert!(self.buf.capacity() <= MAX_CAPACITY);
    }
}

impl<T: Element> Stack<T> {
    /// Pushes an element onto the top of the stack, growing the buffer
    /// first if the push would overflow it. Growth is lazy: the buffer is
    /// only reallocated on the push that needs the room.
    ///
    /// # Errors
    ///
    /// - [`StackError::ElementTooLarge`] if the element reports a
    ///   serialized length of [`MAX_ELEMENT_BYTE_SIZE`] bytes or more.
    /// - [`StackError::StackFull`] if the stack already holds
    ///   [`MAX_CAPACITY`] elements.
    /// - [`StackError::OutOfMemory`] if growing the buffer fails.
    ///
    /// On any error the stack is left exactly as it was.
    pub fn push(&mut self, item: T) -> StackResult<()> {
        if let Some(size) = item.byte_len() {
            if size >= MAX_ELEMENT_BYTE_SIZE {
                return Err(StackError::ElementTooLarge { size });
            }
        }
        if self.is_full() {
            return Err(StackError::StackFull);
        }
        if self.buf.len() == self.buf.capacity() {
            let new_capacity = (self.buf.capacity() * 2).min(MAX_CAPACITY);
            self.buf.grow(new_capacity)?;
        }
        self.buf.push(item);

        #[cfg(feature = "check-invariants")]
        self.check_invariants();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_pop_returns_the_same_value() {
        let mut s = Stack::new().unwrap();
        s.push(String::from("x")).unwrap();
        assert_eq!(s.pop().unwrap(), "x");
        assert!(s.is_empty());
        assert_eq!(s.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn growth_is_lazy() {
        let mut s = Stack::new().unwrap();
        for i in 0..16u64 {
            s.push(i).unwrap();
        }
        // Exactly full, but the overflowing push has not happened yet.
        assert_eq!(s.capacity(), 16);
        s.push(16).unwrap();
        assert_eq!(s.capacity(), 32);
        assert_eq!(s.len(), 17);
    }

    #[test]
    fn shrink_waits_for_quarter_occupancy() {
        let mut s = Stack::new().unwrap();
        for i in 0..17u64 {
            s.push(i).unwrap();
        }
        assert_eq!(s.capacity(), 32);

        // 32 / 4 = 8: popping down to 8 must not shrink yet.
        while s.len() > 8 {
            s.pop().unwrap();
        }
        assert_eq!(s.capacity(), 32);

        // One more pop puts the post-pop length at 7, below the threshold.
        s.pop().unwrap();
        assert_eq!(s.capacity(), 16);
        assert_eq!(s.len(), 7);
    }

    #[test]
    fn capacity_never_drops_below_the_floor() {
        let mut s = Stack::new().unwrap();
        for i in 0..4u64 {
            s.push(i).unwrap();
        }
        while !s.is_empty() {
            s.pop().unwrap();
        }
        assert_eq!(s.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn fixed_size_elements_skip_the_size_check() {
        let mut s = Stack::new().unwrap();
        s.push(u128::MAX).unwrap();
        assert_eq!(s.pop().unwrap(), u128::MAX);
    }

    #[test]
    fn oversized_element_is_rejected_without_mutation() {
        let mut s = Stack::new().unwrap();
        s.push(vec![0u8; 10]).unwrap();

        let err = s.push(vec![0u8; MAX_ELEMENT_BYTE_SIZE]).unwrap_err();
        assert_eq!(
            err,
            StackError::ElementTooLarge {
                size: MAX_ELEMENT_BYTE_SIZE
            }
        );
        assert_eq!(s.len(), 1);

        // One byte under the limit is fine.
        s.push(vec![0u8; MAX_ELEMENT_BYTE_SIZE - 1]).unwrap();
        assert_eq!(s.len(), 2);
    }
}
