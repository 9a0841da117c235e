//! Configuration types for text rendering

use crate::humanize::bytes_padded;
use num_traits::PrimInt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use termhist_core::{Error, Numeric, Result};

/// Shared value formatter used for edges and sums
pub type Formatter<T> = Arc<dyn Fn(T) -> String + Send + Sync>;

/// Glyphs and layout of a rendered chart
///
/// Plain data, so it can be loaded from a config file. Missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Number of columns in a bar
    pub width: usize,
    /// Printed at the start of every line
    pub prefix: String,
    /// Marks the (normalized) count of a bucket
    pub symbol: char,
    /// Fills the bar up to the count mark
    pub pad_symbol: char,
    /// Marks the (normalized) sum of a bucket; sums are hidden when unset
    pub sum_symbol: Option<char>,
    /// Used instead of `sum_symbol` when count and sum share a column
    pub combined_symbol: Option<char>,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width: 60,
            prefix: "  ".to_string(),
            symbol: '|',
            pad_symbol: '-',
            sum_symbol: None,
            combined_symbol: None,
        }
    }
}

impl BarStyle {
    /// Check that the style can be rendered
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidParameter(
                "bar width must be at least 1 column".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether sums are plotted alongside counts
    pub fn shows_sums(&self) -> bool {
        self.sum_symbol.is_some()
    }
}

/// Options for [`print`](crate::print)
///
/// A [`BarStyle`] plus an optional formatter for edge and sum values. Without
/// a formatter, values are rendered with their `Display` implementation.
pub struct PrintOptions<T: Numeric> {
    /// Layout and glyphs
    pub style: BarStyle,
    /// Formatter for edges and sums
    pub format: Option<Formatter<T>>,
}

impl<T: Numeric> PrintOptions<T> {
    /// Create options with the default style and `Display` formatting
    pub fn new() -> Self {
        Self {
            style: BarStyle::default(),
            format: None,
        }
    }

    /// Replace the whole style
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the bar width in columns
    pub fn with_width(mut self, width: usize) -> Self {
        self.style.width = width;
        self
    }

    /// Set the line prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.style.prefix = prefix.into();
        self
    }

    /// Set the count glyph
    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.style.symbol = symbol;
        self
    }

    /// Set the padding glyph
    pub fn with_pad_symbol(mut self, pad_symbol: char) -> Self {
        self.style.pad_symbol = pad_symbol;
        self
    }

    /// Plot bucket sums with this glyph
    pub fn with_sum_symbol(mut self, sum_symbol: char) -> Self {
        self.style.sum_symbol = Some(sum_symbol);
        self
    }

    /// Glyph for a count mark and sum mark in the same column
    pub fn with_combined_symbol(mut self, combined_symbol: char) -> Self {
        self.style.combined_symbol = Some(combined_symbol);
        self
    }

    /// Format edges and sums with a custom function
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(T) -> String + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(format));
        self
    }

    /// Format a value with the configured formatter
    pub fn format_value(&self, value: T) -> String {
        match &self.format {
            Some(format) => format(value),
            None => value.to_string(),
        }
    }
}

impl<T: Numeric + PrimInt> PrintOptions<T> {
    /// Options for histograms of byte sizes
    ///
    /// Values are humanized in fixed-width columns. With `print_sum`, bucket
    /// sums are plotted with `S`, or `$` where they meet the count mark.
    pub fn bytes(width: usize, print_sum: bool) -> Self {
        let options = Self::new()
            .with_width(width)
            .with_prefix("  ")
            .with_symbol('|')
            .with_pad_symbol('-')
            .with_format(bytes_padded::<T>);
        if print_sum {
            options.with_sum_symbol('S').with_combined_symbol('$')
        } else {
            options
        }
    }
}

impl<T: Numeric> Default for PrintOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> Clone for PrintOptions<T> {
    fn clone(&self) -> Self {
        Self {
            style: self.style.clone(),
            format: self.format.clone(),
        }
    }
}

impl<T: Numeric> fmt::Debug for PrintOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintOptions")
            .field("style", &self.style)
            .field("format", &self.format.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
