//! Crate-wide error type.
//!
//! Each module reports its own error type. [`Error`] gathers them for callers
//! that chain operations from several modules with `?`; the variant records
//! which module failed.

use core::fmt;

use crate::postfix::PostfixError;
use crate::stdx::{IllegalIndex, IndexOutOfBounds, ReadError};

#[derive(Debug)]
pub enum Error {
    /// Array access at or past capacity.
    IndexOutOfBounds(IndexOutOfBounds),
    /// Read of the top of an empty stack.
    IllegalIndex(IllegalIndex),
    /// Array stream input failed.
    Read(ReadError),
    /// Malformed infix expression.
    Postfix(PostfixError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds(err) => fmt::Display::fmt(err, f),
            Self::IllegalIndex(err) => fmt::Display::fmt(err, f),
            Self::Read(err) => fmt::Display::fmt(err, f),
            Self::Postfix(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IndexOutOfBounds(err) => Some(err),
            Self::IllegalIndex(err) => Some(err),
            Self::Read(err) => Some(err),
            Self::Postfix(err) => Some(err),
        }
    }
}

impl From<IndexOutOfBounds> for Error {
    fn from(err: IndexOutOfBounds) -> Self {
        Self::IndexOutOfBounds(err)
    }
}

impl From<IllegalIndex> for Error {
    fn from(err: IllegalIndex) -> Self {
        Self::IllegalIndex(err)
    }
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        Self::Read(err)
    }
}

impl From<PostfixError> for Error {
    fn from(err: PostfixError) -> Self {
        Self::Postfix(err)
    }
}
