//! Linear and logarithmic histogram binning
//!
//! This crate turns a slice of integer or floating point samples into an
//! ordered [`Histogram`] of [`Bucket`]s, each carrying the count, sum and
//! observed extremes of the samples that fell into it.
//!
//! # Key Features
//!
//! - **Linear binning**: equal-width buckets in the sample domain
//! - **Logarithmic binning**: equal-width buckets in `log10` space, with
//!   zero and negative samples folded into the lowest bucket
//! - **Integer aware**: narrow integer ranges get one bucket per value
//! - **Pluggable edges**: any order-preserving [`Transform`] can place edges
//!
//! # Examples
//!
//! ## Linear Buckets
//!
//! ```rust
//! use termhist_histogram::create_linear;
//!
//! let hist = create_linear(&[0.0f32, 0.0, 1.0, 2.0, 8.0], 4).unwrap();
//! assert_eq!(hist.edges(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
//! assert_eq!(hist.counts(), vec![3, 1, 0, 1]);
//! ```
//!
//! ## Logarithmic Buckets
//!
//! ```rust
//! use termhist_histogram::{HistogramBuilder, LogBuilder};
//!
//! let sizes = [0u64, 10, 20, 300, 1000, 9500];
//! let hist = LogBuilder::new(3).build(&sizes).unwrap();
//!
//! // The zero sample is binned with the smallest positive one, and the
//! // first edge shows the real minimum.
//! assert_eq!(hist.buckets()[0].low, 0);
//! assert_eq!(hist.total_count(), sizes.len());
//! ```
//!
//! ## Custom Transforms
//!
//! ```rust
//! use termhist_histogram::{bin, Transform};
//!
//! struct Sqrt;
//!
//! impl Transform<f64> for Sqrt {
//!     fn forward(&self, value: f64) -> f64 {
//!         value.max(0.0).sqrt()
//!     }
//!     fn inverse(&self, value: f64) -> f64 {
//!         value * value
//!     }
//! }
//!
//! let hist = bin(&[0.0, 1.0, 4.0, 9.0, 16.0], 4, &Sqrt).unwrap();
//! assert_eq!(hist.edges(), vec![0.0, 1.0, 4.0, 9.0, 16.0]);
//! ```

pub mod builders;
pub mod traits;
pub mod transform;
pub mod types;

// Re-export main types and traits
pub use builders::{bin, LinearBuilder, LogBuilder};
pub use traits::HistogramBuilder;
pub use transform::{Linear, Log10, Transform};
pub use types::{Bucket, Histogram};

pub use termhist_core::{Error, Numeric, Result};

// Convenience functions
/// Create a histogram with `bucket_count` equal-width buckets
pub fn create_linear<T: Numeric>(samples: &[T], bucket_count: usize) -> Result<Histogram<T>> {
    LinearBuilder::new(bucket_count).build(samples)
}

/// Create a histogram with `bucket_count` buckets of equal width in log10 space
pub fn create_log<T: Numeric>(samples: &[T], bucket_count: usize) -> Result<Histogram<T>> {
    LogBuilder::new(bucket_count).build(samples)
}
