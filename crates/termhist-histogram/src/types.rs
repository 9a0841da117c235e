//! Core types for histogram representation

use std::fmt;
use termhist_core::Numeric;

/// A single bucket in a histogram
///
/// Buckets are never compared as a whole, so no equality is derived;
/// compare individual fields instead.
#[derive(Debug, Clone)]
pub struct Bucket<T: Numeric = f64> {
    /// Low edge of the bucket (inclusive)
    pub low: T,
    /// High edge of the bucket (exclusive, except for the last bucket)
    pub high: T,
    /// Smallest value in this bucket, if `count > 0`
    pub min: T,
    /// Largest value in this bucket, if `count > 0`
    pub max: T,
    /// Number of values in this bucket
    pub count: usize,
    /// Sum of all values in this bucket
    pub sum: T,
}

impl<T: Numeric> Bucket<T> {
    /// Create an empty bucket spanning `[low, high)`
    pub fn new(low: T, high: T) -> Self {
        Self {
            low,
            high,
            min: T::zero(),
            max: T::zero(),
            count: 0,
            sum: T::zero(),
        }
    }

    /// Record a value in this bucket
    ///
    /// Min and max are updated as an either/or chain: a value that lowers
    /// the minimum is never also tested against the maximum.
    pub(crate) fn add(&mut self, value: T) {
        self.count += 1;
        self.sum = self.sum.wrapping_add(value);
        if self.count == 1 {
            self.min = value;
            self.max = value;
        } else if self.min > value {
            self.min = value;
        } else if self.max < value {
            self.max = value;
        }
    }

    /// Check if no values fell into this bucket
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the width of the bucket
    ///
    /// Computed in `f64`, since an integer bucket can be wider than its
    /// sample type can hold.
    pub fn width(&self) -> f64 {
        self.high.to_f64() - self.low.to_f64()
    }

    /// Check if a value falls within `[low, high)`
    ///
    /// The high edge is always excluded, including on the last bucket of a
    /// histogram. [`Histogram::find_bucket`] assigns a value equal to the
    /// final edge to the last bucket; use it when the closing edge matters.
    pub fn contains(&self, value: T) -> bool {
        value >= self.low && value < self.high
    }
}

impl<T: Numeric> fmt::Display for Bucket<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}): count={}, sum={}",
            self.low, self.high, self.count, self.sum
        )
    }
}

/// An ordered sequence of buckets, ascending by low edge
#[derive(Debug, Clone)]
pub struct Histogram<T: Numeric = f64> {
    buckets: Vec<Bucket<T>>,
}

impl<T: Numeric> Histogram<T> {
    /// Create a histogram from buckets already in ascending order
    pub fn new(buckets: Vec<Bucket<T>>) -> Self {
        Self { buckets }
    }

    /// Create a histogram with no buckets
    pub fn empty() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }

    /// Get the buckets
    pub fn buckets(&self) -> &[Bucket<T>] {
        &self.buckets
    }

    /// Get mutable access to buckets (for internal use)
    pub(crate) fn buckets_mut(&mut self) -> &mut [Bucket<T>] {
        &mut self.buckets
    }

    /// Iterate over buckets in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<T>> {
        self.buckets.iter()
    }

    /// Get the number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if the histogram has no buckets
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Get the total count of samples across all buckets
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Get the maximum count in any bucket
    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.count).collect()
    }

    /// Get per-bucket sums as a vector
    pub fn sums(&self) -> Vec<T> {
        self.buckets.iter().map(|b| b.sum).collect()
    }

    /// Get bucket edges (every low edge plus the final high edge)
    pub fn edges(&self) -> Vec<T> {
        let Some(last) = self.buckets.last() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.buckets.len() + 1);
        edges.extend(self.buckets.iter().map(|b| b.low));
        edges.push(last.high);
        edges
    }

    /// Find which bucket a value would be assigned to
    ///
    /// Values at or below the first edge map to bucket 0 and values at the
    /// final edge map to the last bucket. Values outside the histogram's
    /// range return `None`.
    pub fn find_bucket(&self, value: T) -> Option<usize> {
        let first = self.buckets.first()?;
        let last = self.buckets.last()?;
        if value < first.low || value > last.high {
            return None;
        }
        Some(bucket_index(&self.buckets, value))
    }
}

/// Index of the bucket that receives `value`
///
/// Searches for the first low edge strictly greater than `value` and steps
/// back one. Values not above the first edge land in bucket 0, values past
/// the last low edge land in the last bucket.
pub(crate) fn bucket_index<T: Numeric>(buckets: &[Bucket<T>], value: T) -> usize {
    match buckets.first() {
        Some(first) if value > first.low => {
            buckets.partition_point(|b| b.low <= value) - 1
        }
        _ => 0,
    }
}

impl<'a, T: Numeric> IntoIterator for &'a Histogram<T> {
    type Item = &'a Bucket<T>;
    type IntoIter = std::slice::Iter<'a, Bucket<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

impl<T: Numeric> fmt::Display for Histogram<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.buckets.first(), self.buckets.last()) {
            (Some(first), Some(last)) => write!(
                f,
                "Histogram({} buckets, n={}, range=[{}, {}])",
                self.len(),
                self.total_count(),
                first.low,
                last.high
            ),
            _ => write!(f, "Histogram(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_buckets() -> Histogram<f64> {
        let mut buckets = vec![
            Bucket::new(0.0, 1.0),
            Bucket::new(1.0, 2.0),
            Bucket::new(2.0, 3.0),
        ];
        for v in [0.5, 1.0, 1.5, 1.25, 3.0] {
            let i = bucket_index(&buckets, v);
            buckets[i].add(v);
        }
        Histogram::new(buckets)
    }

    #[test]
    fn test_bucket_add() {
        let mut bucket = Bucket::<i32>::new(0, 10);
        assert!(bucket.is_empty());

        bucket.add(5);
        assert_eq!((bucket.min, bucket.max, bucket.count, bucket.sum), (5, 5, 1, 5));

        bucket.add(2);
        bucket.add(8);
        assert_eq!((bucket.min, bucket.max, bucket.count, bucket.sum), (2, 8, 3, 15));
        assert_eq!(bucket.width(), 10.0);
        assert!(bucket.contains(0));
        assert!(!bucket.contains(10)); // High edge is exclusive
    }

    #[test]
    fn test_bucket_wider_than_sample_type() {
        let mut bucket = Bucket::<i8>::new(-100, 101);
        assert_eq!(bucket.width(), 201.0);
        bucket.add(100);
        bucket.add(100);
        assert_eq!(bucket.sum, -56);
        assert_eq!((bucket.min, bucket.max), (100, 100));
    }

    #[test]
    fn test_bucket_add_is_either_or() {
        let mut bucket = Bucket::<i32>::new(0, 10);
        bucket.add(5);
        bucket.add(3);
        assert_eq!((bucket.min, bucket.max), (3, 5));
        bucket.add(4);
        assert_eq!((bucket.min, bucket.max), (3, 5));
    }

    #[test]
    fn test_histogram() {
        let hist = three_buckets();

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.total_count(), 5);
        assert_eq!(hist.max_count(), 3);
        assert_eq!(hist.counts(), vec![1, 3, 1]);
        assert_eq!(hist.sums(), vec![0.5, 3.75, 3.0]);
        assert_eq!(hist.edges(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(hist.iter().count(), 3);
    }

    #[test]
    fn test_find_bucket() {
        let hist = three_buckets();
        assert_eq!(hist.find_bucket(0.0), Some(0));
        assert_eq!(hist.find_bucket(1.0), Some(1));
        assert_eq!(hist.find_bucket(2.999), Some(2));
        assert_eq!(hist.find_bucket(3.0), Some(2)); // Last bucket includes high edge
        assert!(!hist.buckets()[2].contains(3.0));
        assert_eq!(hist.find_bucket(-0.1), None);
        assert_eq!(hist.find_bucket(3.1), None);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::<u32>::empty();
        assert!(hist.is_empty());
        assert!(hist.edges().is_empty());
        assert_eq!(hist.max_count(), 0);
        assert_eq!(hist.find_bucket(1), None);
        assert_eq!(hist.to_string(), "Histogram(empty)");
    }

    #[test]
    fn test_display() {
        let hist = three_buckets();
        assert_eq!(hist.to_string(), "Histogram(3 buckets, n=5, range=[0, 3])");
        assert_eq!(
            hist.buckets()[1].to_string(),
            "[1, 2): count=3, sum=3.75"
        );
    }
}
