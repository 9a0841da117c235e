//! Core traits for histogram building

use crate::types::Histogram;
use termhist_core::{Numeric, Result};

/// Trait for building histograms from sample data
pub trait HistogramBuilder<T: Numeric = f64> {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[T]) -> Result<Histogram<T>>;

    /// Get the requested number of buckets (if known)
    ///
    /// Integer samples with a narrow range may produce fewer buckets.
    fn target_buckets(&self) -> Option<usize> {
        None
    }
}
