//! Utility functions for working with sample slices

use crate::numeric::Numeric;

/// Sum of a slice
///
/// Returns zero for empty slices. Integer sums wrap at the type's bounds.
///
/// # Examples
///
/// ```rust
/// use termhist_core::utils::sum;
///
/// assert_eq!(sum(&[1, 2, 3]), 6);
/// assert_eq!(sum::<f64>(&[]), 0.0);
/// ```
pub fn sum<T: Numeric>(data: &[T]) -> T {
    data.iter().fold(T::zero(), |acc, &x| acc.wrapping_add(x))
}

/// Smallest value of a slice, or `None` when empty
///
/// # Examples
///
/// ```rust
/// use termhist_core::utils::min;
///
/// assert_eq!(min(&[3.0, 1.0, 2.0]), Some(1.0));
/// assert_eq!(min::<i32>(&[]), None);
/// ```
pub fn min<T: Numeric>(data: &[T]) -> Option<T> {
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().fold(first, |acc, &x| if x < acc { x } else { acc }))
}

/// Largest value of a slice, or `None` when empty
pub fn max<T: Numeric>(data: &[T]) -> Option<T> {
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().fold(first, |acc, &x| if x > acc { x } else { acc }))
}

/// Smallest strictly positive value of a slice
pub fn min_positive<T: Numeric>(data: &[T]) -> Option<T> {
    data.iter()
        .copied()
        .filter(|&x| x > T::zero())
        .fold(None, |acc, x| match acc {
            Some(m) if m <= x => Some(m),
            _ => Some(x),
        })
}
