use core::fmt;
use std::io;

use crate::constants::{FLOAT_SIGNIFICANT_DIGITS, PRINT_FIELD_WIDTH, PRINT_FIELDS_PER_ROW};

/// A value that can be written right-aligned into a fixed-width column.
///
/// Integers, characters and strings are written as `Display` renders them and
/// run past the field when they are wider than it. Floats are written with
/// [`FLOAT_SIGNIFICANT_DIGITS`] significant digits in `%g` style and lose
/// digits until at least one blank is left in front of them, so two floats
/// never run together.
pub trait Field {
    fn write_field(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result;
}

macro_rules! display_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Field for $ty {
                #[inline]
                fn write_field(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
                    write!(f, "{self:>width$}")
                }
            }
        )*
    };
}

display_field!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

impl<T: Field + ?Sized> Field for &T {
    #[inline]
    fn write_field(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
        (**self).write_field(f, width)
    }
}

impl Field for f64 {
    fn write_field(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
        let mut digits = FLOAT_SIGNIFICANT_DIGITS;
        let mut text = general(*self, digits);

        while text.len() >= width && digits > 1 {
            digits -= 1;
            text = general(*self, digits);
        }

        write!(f, "{text:>width$}")
    }
}

impl Field for f32 {
    #[inline]
    fn write_field(&self, f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
        f64::from(*self).write_field(f, width)
    }
}

/// `%g` rendering: `digits` significant digits, fixed notation for decimal
/// exponents in `-4..digits`, scientific otherwise, trailing zeros dropped.
///
/// ```text
/// 1.0 / 3.0  -> 0.333333
/// 0.1 + 0.2  -> 0.3
/// 1e6        -> 1e+06
/// 1.5e-5     -> 1.5e-05
/// ```
fn general(value: f64, digits: usize) -> String {
    assert!(digits > 0);

    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    // Exponent after rounding to `digits`: 999999.7 becomes 1e+06.
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let digits = digits as i32;
    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Display adapter that lays a slice out in fixed-width, right-aligned
/// columns.
///
/// A line break follows every full row. When the last row is short it gets
/// its own line break, so non-empty output always ends in exactly one.
/// An empty slice renders as nothing.
///
/// ```text
/// width 4, per_row 3, [1, 2, 3, 4]:
///    1   2   3
///    4
/// ```
#[derive(Clone, Copy)]
pub struct Columns<'a, T> {
    items: &'a [T],
    width: usize,
    per_row: usize,
}

impl<'a, T> Columns<'a, T> {
    pub fn new(items: &'a [T], width: usize, per_row: usize) -> Self {
        assert!(per_row > 0, "per_row must be non-zero");

        Self {
            items,
            width,
            per_row,
        }
    }
}

impl<T: Field> fmt::Display for Columns<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            item.write_field(f, self.width)?;

            if (i + 1) % self.per_row == 0 {
                writeln!(f)?;
            }
        }

        if !self.items.len().is_multiple_of(self.per_row) {
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Writes `items` to `out` ten columns wide, five per line.
pub fn print_columns<W, T>(out: &mut W, items: &[T]) -> io::Result<()>
where
    W: io::Write + ?Sized,
    T: Field,
{
    write!(
        out,
        "{}",
        Columns::new(items, PRINT_FIELD_WIDTH, PRINT_FIELDS_PER_ROW)
    )
}
