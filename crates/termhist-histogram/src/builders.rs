//! Linear and logarithmic histogram builders

use crate::traits::HistogramBuilder;
use crate::transform::{Linear, Log10, Transform};
use crate::types::{bucket_index, Bucket, Histogram};
use termhist_core::{utils, Error, Numeric, Result};
use tracing::{debug, instrument};

/// Bin samples into `bucket_count` buckets whose edges are placed by `transform`
///
/// Returns an empty histogram for an empty sample. For integer samples
/// whose range is narrower than `bucket_count`, one bucket per integer
/// value is produced instead and the top edge sits one past the maximum.
/// The last bucket's high edge is always set exactly, never derived from
/// the spacing.
#[instrument(level = "debug", skip(samples, transform), fields(n_samples = samples.len()))]
pub fn bin<T, F>(samples: &[T], bucket_count: usize, transform: &F) -> Result<Histogram<T>>
where
    T: Numeric,
    F: Transform<T>,
{
    if samples.is_empty() {
        return Ok(Histogram::empty());
    }
    validate(samples, bucket_count)?;

    let (Some(lo), Some(mut hi)) = (utils::min(samples), utils::max(samples)) else {
        return Ok(Histogram::empty());
    };

    let mut bucket_count = bucket_count;
    let range = hi.to_f64() - lo.to_f64();
    if T::IS_INTEGER && range < bucket_count as f64 {
        bucket_count = range as usize + 1;
        hi = hi.checked_increment().ok_or_else(|| {
            Error::InvalidInput(format!("maximum sample {hi} leaves no room for a top edge"))
        })?;
        debug!(bucket_count, "integer range narrower than requested buckets");
    }

    let lows = transform.lower_edges(lo, hi, bucket_count);
    let mut buckets: Vec<Bucket<T>> = lows
        .iter()
        .enumerate()
        .map(|(i, &low)| Bucket::new(low, lows.get(i + 1).copied().unwrap_or(hi)))
        .collect();

    for &value in samples {
        let i = bucket_index(&buckets, value);
        buckets[i].add(value);
    }

    Ok(Histogram::new(buckets))
}

/// Reject a zero bucket count and NaN or infinite samples
fn validate<T: Numeric>(samples: &[T], bucket_count: usize) -> Result<()> {
    if bucket_count == 0 {
        return Err(Error::zero_buckets());
    }
    if samples.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("samples"));
    }
    Ok(())
}

/// Equal-width histogram builder
///
/// Creates a histogram with the requested number of buckets of equal width
/// in the sample domain.
#[derive(Debug, Clone, Copy)]
pub struct LinearBuilder {
    bucket_count: usize,
}

impl LinearBuilder {
    /// Create a new linear histogram builder
    pub fn new(bucket_count: usize) -> Self {
        Self { bucket_count }
    }
}

impl<T: Numeric> HistogramBuilder<T> for LinearBuilder {
    fn build(&self, sample: &[T]) -> Result<Histogram<T>> {
        bin(sample, self.bucket_count, &Linear)
    }

    fn target_buckets(&self) -> Option<usize> {
        Some(self.bucket_count)
    }
}

/// Logarithmic histogram builder
///
/// Bucket edges are evenly spaced in `log10` space. Zero and negative
/// samples are binned as if they were the smallest positive sample, and
/// the first bucket's low edge is then lowered to the true minimum so the
/// chart shows the real floor of the data.
#[derive(Debug, Clone, Copy)]
pub struct LogBuilder {
    bucket_count: usize,
}

impl LogBuilder {
    /// Create a new logarithmic histogram builder
    pub fn new(bucket_count: usize) -> Self {
        Self { bucket_count }
    }
}

impl<T: Numeric> HistogramBuilder<T> for LogBuilder {
    fn build(&self, sample: &[T]) -> Result<Histogram<T>> {
        let Some(abs_min) = utils::min(sample) else {
            return Ok(Histogram::empty());
        };
        validate(sample, self.bucket_count)?;
        let floor = utils::min_positive(sample).ok_or_else(|| {
            Error::InvalidInput("logarithmic binning needs at least one positive sample".to_string())
        })?;
        debug!(%floor, %abs_min, "clamping log scale at smallest positive sample");

        let mut histogram = bin(sample, self.bucket_count, &Log10::new(floor))?;
        if let Some(first) = histogram.buckets_mut().first_mut() {
            first.low = abs_min;
        }
        Ok(histogram)
    }

    fn target_buckets(&self) -> Option<usize> {
        Some(self.bucket_count)
    }
}
