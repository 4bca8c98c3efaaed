use core::{fmt, slice};
use std::io::{self, BufRead};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::constants::{ARRAY_FIELD_WIDTH, ARRAY_FIELDS_PER_ROW, DEFAULT_CAPACITY};
use crate::stdx::columns::{Columns, Field};
use crate::stdx::scan::{ReadError, next_token};

/// Error returned when an [`Array`] is accessed at or past its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub capacity: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attempt to access an index out of array bounds: index {} >= capacity {}",
            self.index, self.capacity
        )
    }
}

impl std::error::Error for IndexOutOfBounds {}

#[inline]
const fn effective_capacity(requested: usize) -> usize {
    if requested == 0 {
        DEFAULT_CAPACITY
    } else {
        requested
    }
}

/// Fixed-capacity, heap-backed array with checked element access.
///
/// Every slot is always initialized, so the capacity doubles as the length.
/// The capacity is chosen at construction and only changes when the whole
/// array is assigned from one of a different capacity.
pub struct Array<T> {
    data: Box<[T]>,
}

impl<T: Default> Array<T> {
    /// Array of [`DEFAULT_CAPACITY`] default-valued elements.
    #[inline]
    pub fn new() -> Self {
        Self::filled(DEFAULT_CAPACITY)
    }

    /// Array of `capacity` default-valued elements. A capacity of zero is
    /// replaced by [`DEFAULT_CAPACITY`].
    pub fn filled(capacity: usize) -> Self {
        let capacity = effective_capacity(capacity);
        assert!(capacity <= isize::MAX as usize);

        let data: Box<[T]> = (0..capacity).map(|_| T::default()).collect();
        let arr = Self { data };

        arr.assert_invariants();
        assert_eq!(arr.capacity(), capacity);

        arr
    }
}

impl<T> Array<T> {
    #[inline]
    fn assert_invariants(&self) {
        assert!(!self.data.is_empty());
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        let capacity = self.capacity();
        if index >= capacity {
            warn!(index, capacity, "array index out of bounds");
            return Err(IndexOutOfBounds { index, capacity });
        }
        Ok(())
    }

    /// Number of element slots. Never zero.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Borrows the element at `index`.
    #[inline]
    pub fn get_ref(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    /// Mutably borrows the element at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.data[index])
    }

    /// Replaces the element at `index`, leaving the array untouched on error.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

impl<T: Clone> Array<T> {
    /// Copy of the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.get_ref(index).cloned()
    }

    /// Makes `self` an element-wise copy of `other`, taking on its capacity.
    ///
    /// Storage is reallocated only when the capacities differ.
    #[inline]
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

impl<T: FromStr> Array<T> {
    /// Fills every slot, in order, from whitespace-delimited tokens.
    ///
    /// Exactly `capacity` tokens are consumed on success. On failure the
    /// slots filled so far keep their new values and the rest are untouched.
    pub fn read_from<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> Result<(), ReadError> {
        let expected = self.capacity();

        for index in 0..expected {
            let Some(token) = next_token(reader)? else {
                return Err(ReadError::UnexpectedEof {
                    read: index,
                    expected,
                });
            };

            match token.parse::<T>() {
                Ok(value) => self.data[index] = value,
                Err(_) => return Err(ReadError::Parse { index, token }),
            }
        }

        Ok(())
    }
}

impl<T: Field> Array<T> {
    /// Writes the columnar rendering produced by `Display`.
    pub fn write_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl<T: Default> Default for Array<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        let copy = Self {
            data: self.data.clone(),
        };
        assert_eq!(copy.capacity(), self.capacity());
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity() != source.capacity() {
            debug!(
                from = self.capacity(),
                to = source.capacity(),
                "reallocating array storage for assignment"
            );
            self.data = source.data.clone();
        } else {
            self.data.clone_from_slice(&source.data);
        }

        self.assert_invariants();
        assert_eq!(self.capacity(), source.capacity());
    }
}

impl<T> TryFrom<Vec<T>> for Array<T> {
    type Error = Vec<T>;

    /// Takes ownership of a non-empty vector; an empty one is handed back.
    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        if values.is_empty() {
            return Err(values);
        }

        let arr = Self {
            data: values.into_boxed_slice(),
        };
        arr.assert_invariants();

        Ok(arr)
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.capacity() != other.capacity() {
            return false;
        }
        self.data.iter().zip(other.data.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: core::hash::Hash> core::hash::Hash for Array<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

/// Twelve columns per element, four elements per line. Floats are written
/// with six significant digits.
impl<T: Field> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(
            &Columns::new(&self.data, ARRAY_FIELD_WIDTH, ARRAY_FIELDS_PER_ROW),
            f,
        )
    }
}

impl<T> core::ops::Index<usize> for Array<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get_ref(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> core::ops::IndexMut<usize> for Array<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
