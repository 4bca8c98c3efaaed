use core::fmt;

use tracing::warn;

use crate::constants::DEFAULT_CAPACITY;

/// Error returned when reading the top of an empty [`Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalIndex;

impl fmt::Display for IllegalIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attempt to access empty stack")
    }
}

impl std::error::Error for IllegalIndex {}

/// Bounded last-in, first-out stack.
///
/// The capacity is fixed at construction; pushing onto a full stack hands
/// the value back instead of growing. Cloning copies the elements and the
/// capacity; the copy is independent of the original.
#[derive(Clone)]
pub struct Stack<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    /// Stack holding up to [`DEFAULT_CAPACITY`] elements.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Stack holding up to `capacity` elements. A capacity of zero is
    /// replaced by [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };

        let stack = Self {
            data: Vec::with_capacity(capacity),
            capacity,
        };

        assert!(stack.is_empty());
        assert!(stack.data.capacity() >= capacity);

        stack
    }

    #[inline]
    fn assert_invariants(&self) {
        assert!(self.capacity > 0);
        assert!(self.data.len() <= self.capacity);
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        assert!(self.data.len() <= self.capacity);
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Pushes `value`, returning `Err(value)` if the stack is already full.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        let old_len = self.data.len();
        self.data.push(value);

        assert_eq!(self.data.len(), old_len + 1);
        self.assert_invariants();

        Ok(())
    }

    /// Removes and returns the top element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.data.pop();
        self.assert_invariants();
        value
    }

    /// Borrows the top element, or `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Borrows the top element. Unlike [`last`](Self::last), an empty stack
    /// is reported as an [`IllegalIndex`] error.
    pub fn peek(&self) -> Result<&T, IllegalIndex> {
        self.data.last().ok_or_else(|| {
            warn!(capacity = self.capacity, "peek on empty stack");
            IllegalIndex
        })
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}
