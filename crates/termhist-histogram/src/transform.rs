//! Coordinate transforms used to place bucket edges
//!
//! A transform maps samples into a space where edges are spaced evenly and
//! maps edge positions back into the sample domain. Both directions must
//! preserve ordering: `a < b` implies `forward(a) <= forward(b)`, and the
//! same for `inverse`. Bucket assignment relies on ascending low edges.

use termhist_core::Numeric;

/// Forward/inverse coordinate mapping for edge placement
pub trait Transform<T: Numeric> {
    /// Map a sample into transformed space
    fn forward(&self, value: T) -> f64;

    /// Map a transformed-space position back into the sample domain
    fn inverse(&self, value: f64) -> T;

    /// Low edges of `bucket_count` evenly spaced buckets covering `[lo, hi]`
    ///
    /// The default spaces edges uniformly in transformed space.
    fn lower_edges(&self, lo: T, hi: T, bucket_count: usize) -> Vec<T> {
        let start = self.forward(lo);
        let spacing = (self.forward(hi) - start) / bucket_count as f64;
        (0..bucket_count)
            .map(|i| self.inverse(start + i as f64 * spacing))
            .collect()
    }
}

/// Identity transform: equal-width buckets in the sample domain
///
/// Edge spacing uses the sample type's own arithmetic, so integer
/// samples get truncated spacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl<T: Numeric> Transform<T> for Linear {
    fn forward(&self, value: T) -> f64 {
        value.to_f64()
    }

    fn inverse(&self, value: f64) -> T {
        T::from_f64(value)
    }

    fn lower_edges(&self, lo: T, hi: T, bucket_count: usize) -> Vec<T> {
        if bucket_count == 0 {
            return Vec::new();
        }
        match (hi.checked_sub(lo), T::checked_from_usize(bucket_count)) {
            (Some(range), Some(count)) => {
                let spacing = range / count;
                (0..bucket_count)
                    .map(|i| lo + T::from_usize(i) * spacing)
                    .collect()
            }
            // Range or count does not fit the sample type
            _ => {
                let mut spacing = (hi.to_f64() - lo.to_f64()) / bucket_count as f64;
                if T::IS_INTEGER {
                    spacing = spacing.trunc();
                }
                let start = lo.to_f64();
                (0..bucket_count)
                    .map(|i| T::from_f64(start + i as f64 * spacing))
                    .collect()
            }
        }
    }
}

/// Base-10 logarithmic transform
///
/// Values below `floor` are clamped to it before taking the logarithm,
/// so zero and negative samples share the lowest bucket.
#[derive(Debug, Clone, Copy)]
pub struct Log10<T: Numeric> {
    floor: T,
}

impl<T: Numeric> Log10<T> {
    /// Create a log transform clamping at `floor`, which must be positive
    pub fn new(floor: T) -> Self {
        Self { floor }
    }

    /// Get the clamping floor
    pub fn floor(&self) -> T {
        self.floor
    }
}

impl<T: Numeric> Transform<T> for Log10<T> {
    fn forward(&self, value: T) -> f64 {
        let clamped = if value < self.floor { self.floor } else { value };
        clamped.to_f64().log10()
    }

    fn inverse(&self, value: f64) -> T {
        T::from_f64(10f64.powf(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_integer_spacing_truncates() {
        let edges = <Linear as Transform<i64>>::lower_edges(&Linear, 10, 10_000, 4);
        assert_eq!(edges, vec![10, 2507, 5004, 7501]);
    }

    #[test]
    fn test_linear_spacing_past_type_range() {
        let edges = <Linear as Transform<i8>>::lower_edges(&Linear, -100, 100, 4);
        assert_eq!(edges, vec![-100, -50, 0, 50]);

        // 255 buckets do not fit in an i8 count
        let edges = <Linear as Transform<i8>>::lower_edges(&Linear, -128, 127, 255);
        assert_eq!(edges.len(), 255);
        assert_eq!(edges[0], -128);
        assert_eq!(edges[254], 126);

        assert!(<Linear as Transform<u8>>::lower_edges(&Linear, 0, 9, 0).is_empty());
    }

    #[test]
    fn test_linear_float_spacing() {
        let edges = <Linear as Transform<f32>>::lower_edges(&Linear, 0.0, 8.0, 4);
        assert_eq!(edges, vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_log10_clamps_below_floor() {
        let log = Log10::new(10i32);
        assert_relative_eq!(log.forward(0), 1.0);
        assert_relative_eq!(log.forward(-5), 1.0);
        assert_relative_eq!(log.forward(1000), 3.0);
        assert_eq!(log.floor(), 10);
    }

    #[test]
    fn test_log10_edges_round_for_integers() {
        let log = Log10::new(10i32);
        assert_eq!(log.lower_edges(10, 10_000, 4), vec![10, 56, 316, 1778]);
    }

    #[test]
    fn test_log10_edges_for_floats() {
        let log = Log10::new(1.0f64);
        let edges = log.lower_edges(1.0, 1000.0, 3);
        assert_eq!(edges.len(), 3);
        assert_relative_eq!(edges[0], 1.0);
        assert_relative_eq!(edges[1], 10.0, max_relative = 1e-12);
        assert_relative_eq!(edges[2], 100.0, max_relative = 1e-12);
    }
}
