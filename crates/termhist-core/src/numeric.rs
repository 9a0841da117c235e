//! Generic numeric trait for histogram samples
//!
//! Histograms are built over any primitive integer or floating point type.
//! The [`Numeric`] trait captures what binning and rendering need from a
//! sample type: arithmetic in the sample's own domain, ordering, and a
//! lossy bridge to `f64` for transformed-space arithmetic.
//!
//! Integer and float samples behave differently in two places:
//!
//! - edge spacing is computed with the sample type's own division, so
//!   integer spacing truncates
//! - values mapped back from `f64` are rounded to the nearest integer

use bytemuck::Pod;
use num_traits::Num;
use std::fmt::{Debug, Display};

/// Base trait for numeric types that can be binned and rendered
pub trait Numeric:
    Pod + Num + Copy + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Whether this is an integer kind (division truncates)
    const IS_INTEGER: bool;

    /// Convert to f64 for transformed-space arithmetic
    fn to_f64(self) -> f64;

    /// Convert from f64, rounding to nearest for integer kinds
    fn from_f64(val: f64) -> Self;

    /// Convert a bucket index or count into the sample domain
    fn from_usize(n: usize) -> Self;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Add one, or `None` if that would overflow
    fn checked_increment(self) -> Option<Self>;

    /// Subtract, or `None` if the difference does not fit the type
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Convert a count into the sample domain, or `None` if it does not fit
    fn checked_from_usize(n: usize) -> Option<Self>;

    /// Add, wrapping around at the type's bounds for integer kinds
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            const IS_INTEGER: bool = true;

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(val: f64) -> Self {
                val.round() as $t
            }

            fn from_usize(n: usize) -> Self {
                n as $t
            }

            fn is_finite(&self) -> bool {
                true
            }

            fn checked_increment(self) -> Option<Self> {
                self.checked_add(1)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }

            fn checked_from_usize(n: usize) -> Option<Self> {
                <$t>::try_from(n).ok()
            }

            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            const IS_INTEGER: bool = false;

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(val: f64) -> Self {
                val as $t
            }

            fn from_usize(n: usize) -> Self {
                n as $t
            }

            fn is_finite(&self) -> bool {
                <$t>::is_finite(*self)
            }

            fn checked_increment(self) -> Option<Self> {
                Some(self + 1.0)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            fn checked_from_usize(n: usize) -> Option<Self> {
                Some(n as $t)
            }

            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);
