//! Whitespace-delimited token scanning over a [`BufRead`].
//!
//! Tokens are pulled straight from the reader's buffer so that the byte
//! following a token is never consumed. Several readers can then take turns
//! on one stream, each seeing only the tokens it asked for.

use core::fmt;
use std::io::{self, BufRead};

/// Reads the next whitespace-delimited token from `reader`.
///
/// Leading whitespace is skipped. Returns `Ok(None)` when the input ends
/// before any token byte is seen.
pub fn next_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token: Vec<u8> = Vec::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut complete = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    used += 1;
                    continue;
                }
                complete = true;
                break;
            }
            token.push(byte);
            used += 1;
        }

        assert!(used <= buf.len());
        reader.consume(used);

        if complete {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }

    String::from_utf8(token)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Errors from filling a container with tokens read from a stream.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The stream ended after `read` of the `expected` values.
    UnexpectedEof { read: usize, expected: usize },
    /// The token destined for slot `index` did not parse as the element type.
    Parse { index: usize, token: String },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "read failed: {err}"),
            Self::UnexpectedEof { read, expected } => {
                write!(f, "input ended after {read} of {expected} values")
            }
            Self::Parse { index, token } => {
                write!(f, "cannot parse token {token:?} for element {index}")
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
