pub mod constants;
pub mod error;
pub mod postfix;
pub mod sort;
pub mod stdx;

#[cfg(test)]
mod test_utils;

pub use error::Error;
