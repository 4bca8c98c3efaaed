//! Capacity and formatting constants shared by the containers.
//!
//! All invariants verified at compile time via `const` assertions.

// =============================================================================
// Capacity
// =============================================================================

/// Capacity used when a container is built without one, or with a requested
/// capacity of zero.
pub const DEFAULT_CAPACITY: usize = 10;

// =============================================================================
// Columnar output
// =============================================================================

/// Field width for [`Array`](crate::stdx::Array) output. Each element is
/// right-aligned within this many columns.
pub const ARRAY_FIELD_WIDTH: usize = 12;

/// Number of [`Array`](crate::stdx::Array) elements written per output line.
pub const ARRAY_FIELDS_PER_ROW: usize = 4;

/// Field width for plain slice output via [`print_columns`](crate::stdx::print_columns).
pub const PRINT_FIELD_WIDTH: usize = 10;

/// Number of slice elements written per line by [`print_columns`](crate::stdx::print_columns).
pub const PRINT_FIELDS_PER_ROW: usize = 5;

/// Significant digits a floating-point field is written with before it is
/// shortened to fit its column.
pub const FLOAT_SIGNIFICANT_DIGITS: usize = 6;

// =============================================================================
// Compile-time design integrity assertions
// =============================================================================

const _: () = assert!(DEFAULT_CAPACITY > 0, "default capacity must be non-zero");
const _: () = assert!(DEFAULT_CAPACITY <= isize::MAX as usize);

const _: () = assert!(ARRAY_FIELD_WIDTH > 0);
const _: () = assert!(ARRAY_FIELDS_PER_ROW > 0);
const _: () = assert!(PRINT_FIELD_WIDTH > 0);
const _: () = assert!(PRINT_FIELDS_PER_ROW > 0);

// "-1e+100" is the shortest a finite float can get; every column must fit it
// with a blank to spare.
const _: () = assert!(FLOAT_SIGNIFICANT_DIGITS > 0);
const _: () = assert!(ARRAY_FIELD_WIDTH > 7);
const _: () = assert!(PRINT_FIELD_WIDTH > 7);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_ten() {
        assert_eq!(DEFAULT_CAPACITY, 10);
    }

    #[test]
    fn array_row_is_four_fields_of_twelve() {
        assert_eq!(ARRAY_FIELD_WIDTH, 12);
        assert_eq!(ARRAY_FIELDS_PER_ROW, 4);
        assert_eq!(ARRAY_FIELD_WIDTH * ARRAY_FIELDS_PER_ROW, 48);
    }

    #[test]
    fn print_row_is_five_fields_of_ten() {
        assert_eq!(PRINT_FIELD_WIDTH, 10);
        assert_eq!(PRINT_FIELDS_PER_ROW, 5);
    }
}
