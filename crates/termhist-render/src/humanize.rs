//! Byte size formatting with binary units

use num_traits::PrimInt;
use std::fmt::Display;

/// Binary unit ladder; a `u64` cannot reach the next step
const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Column width of [`bytes_padded`] output
pub const PADDED_WIDTH: usize = 10;

/// Format a byte count with the largest binary unit it reaches
///
/// Plain bytes are printed as integers, larger units with one decimal.
/// Negative values are printed as plain bytes.
///
/// # Examples
///
/// ```rust
/// use termhist_render::humanize::bytes;
///
/// assert_eq!(bytes(0u32), "0 B");
/// assert_eq!(bytes(1024u64), "1.0 KiB");
/// assert_eq!(bytes(600_000i64), "585.9 KiB");
/// ```
pub fn bytes<T: PrimInt + Display>(value: T) -> String {
    let Some(magnitude) = value.to_u64() else {
        return format!("{value} B");
    };

    let mut exponent = 0;
    let mut scale = 1u64;
    while exponent < UNITS.len() - 1 && magnitude / scale >= 1024 {
        scale *= 1024;
        exponent += 1;
    }

    if exponent == 0 {
        format!("{value} B")
    } else {
        format!("{:.1} {}", magnitude as f64 / scale as f64, UNITS[exponent])
    }
}

/// Format a byte count right-aligned in [`PADDED_WIDTH`] columns
///
/// The unit always occupies the last three columns, so plain byte counts
/// line up with `KiB`, `MiB` and the rest in a table.
///
/// ```rust
/// use termhist_render::humanize::bytes_padded;
///
/// assert_eq!(bytes_padded(10u32), "  10     B");
/// assert_eq!(bytes_padded(10_000u32), "   9.8 KiB");
/// ```
pub fn bytes_padded<T: PrimInt + Display>(value: T) -> String {
    let text = bytes(value);
    let text = match text.strip_suffix(" B") {
        Some(number) => format!("{number}     B"),
        None => text,
    };
    format!("{text:>width$}", width = PADDED_WIDTH)
}
