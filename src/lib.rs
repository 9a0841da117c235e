//! Histograms of integer or float samples, rendered as text bar charts
//!
//! This crate re-exports the termhist workspace:
//!
//! - [`core`]: the [`Numeric`] sample trait, slice helpers and [`Error`]
//! - [`histogram`]: linear and logarithmic binning
//! - [`render`]: fixed-width text charts and byte-size formatting
//!
//! # Example
//!
//! ```rust
//! use termhist::{create_log, render_to_string, PrintOptions};
//!
//! let latencies_us: Vec<u32> = vec![12, 15, 15, 18, 22, 40, 95, 300, 1200];
//! let hist = create_log(&latencies_us, 4).unwrap();
//! let chart = render_to_string(&hist, &PrintOptions::new().with_width(30)).unwrap();
//! assert_eq!(chart.lines().count(), hist.len() + 1);
//! ```

pub use termhist_core as core;
pub use termhist_histogram as histogram;
pub use termhist_render as render;

pub use termhist_core::{Error, Numeric, Result};
pub use termhist_histogram::{
    bin, create_linear, create_log, Bucket, Histogram, HistogramBuilder, Linear, LinearBuilder,
    Log10, LogBuilder, Transform,
};
pub use termhist_render::{
    bytes, bytes_padded, print, render_to_string, BarStyle, PrintOptions,
};
