pub mod array;
pub mod columns;
pub mod scan;
pub mod stack;

pub use array::{Array, IndexOutOfBounds};
pub use columns::{Columns, Field, print_columns};
pub use scan::{ReadError, next_token};
pub use stack::{IllegalIndex, Stack};
