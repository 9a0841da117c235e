//! Text bar charts for histograms
//!
//! Renders a [`Histogram`](termhist_histogram::Histogram) as one line per
//! bucket, highest bucket first. Each line carries a fixed-width bar with a
//! mark at the bucket's count scaled to the bar width, and optionally a
//! second mark for the bucket's sum on the same row.
//!
//! # Examples
//!
//! ```rust
//! use termhist_histogram::create_linear;
//! use termhist_render::{render_to_string, PrintOptions};
//!
//! let hist = create_linear(&[0.0f32, 0.0, 1.0, 2.0, 8.0], 4).unwrap();
//! let options = PrintOptions::new()
//!     .with_width(20)
//!     .with_prefix("  ")
//!     .with_symbol('>')
//!     .with_pad_symbol('-');
//!
//! let chart = render_to_string(&hist, &options).unwrap();
//! assert_eq!(chart.lines().next(), Some("    8"));
//! assert!(chart.ends_with("  > 0: -------------------> (3)\n"));
//! ```
//!
//! ## Byte Sizes With Sums
//!
//! ```rust
//! use termhist_histogram::create_log;
//! use termhist_render::{print, PrintOptions};
//!
//! let sizes: Vec<u64> = vec![10, 20, 300, 1000, 2000, 3000, 10_000];
//! let hist = create_log(&sizes, 3).unwrap();
//! print(&mut std::io::stdout(), &hist, &PrintOptions::bytes(40, true)).unwrap();
//! ```

pub mod bar;
pub mod humanize;
pub mod options;
pub mod print;

pub use bar::{bar, normalize_to_width};
pub use humanize::{bytes, bytes_padded};
pub use options::{BarStyle, Formatter, PrintOptions};
pub use print::{print, render_to_string};

pub use termhist_core::{Error, Result};
