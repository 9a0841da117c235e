//! Scaling series to columns and drawing single-row bars

use termhist_core::{utils, Error, Numeric, Result};

/// Scale a series to column positions in `[0, width)`
///
/// Each value becomes `round(value / max * (width - 1))`, so the largest
/// value lands on the last column. A series whose maximum is not positive
/// cannot be scaled (it would divide by zero or flip the axis), and a
/// negative value would land left of the first column; both are reported
/// as [`Error::Computation`].
pub fn normalize_to_width<T: Numeric>(series: &[T], width: usize) -> Result<Vec<usize>> {
    if width == 0 {
        return Err(Error::InvalidParameter(
            "bar width must be at least 1 column".to_string(),
        ));
    }
    let Some(max) = utils::max(series) else {
        return Ok(Vec::new());
    };
    let max = max.to_f64();
    if !(max > 0.0) {
        return Err(Error::empty_series("series"));
    }

    let last_column = (width - 1) as f64;
    series
        .iter()
        .map(|&value| {
            let column = (value.to_f64() / max * last_column).round();
            if column < 0.0 {
                return Err(Error::Computation(format!(
                    "value {value} maps left of the first column"
                )));
            }
            Ok(column as usize)
        })
        .collect()
}

/// Draw one bar of `width` columns
///
/// `count_column` pad glyphs are followed by the count glyph and the rest
/// is filled with spaces. With a sum glyph, column `sum_column` is then
/// overwritten by it, or by the combined glyph when both marks share a
/// column.
pub fn bar(
    width: usize,
    count_column: usize,
    sum_column: usize,
    pad_symbol: char,
    symbol: char,
    sum_symbol: Option<char>,
    combined_symbol: Option<char>,
) -> String {
    let mut columns: Vec<char> = std::iter::repeat(pad_symbol).take(count_column).collect();
    columns.push(symbol);
    if columns.len() < width {
        columns.resize(width, ' ');
    }

    if let Some(sum_symbol) = sum_symbol {
        let glyph = match combined_symbol {
            Some(combined) if count_column == sum_column => combined,
            _ => sum_symbol,
        };
        if let Some(slot) = columns.get_mut(sum_column) {
            *slot = glyph;
        }
    }

    columns.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_counts() {
        assert_eq!(normalize_to_width(&[3usize, 1, 0, 1], 20).unwrap(), vec![19, 6, 0, 6]);
        assert_eq!(normalize_to_width(&[25usize, 3, 0, 2], 30).unwrap(), vec![29, 3, 0, 2]);
    }

    #[test]
    fn test_normalize_sums() {
        let sums = [4520i64, 9000, 0, 19500];
        assert_eq!(normalize_to_width(&sums, 30).unwrap(), vec![7, 13, 0, 29]);
    }

    #[test]
    fn test_normalize_single_column() {
        assert_eq!(normalize_to_width(&[5.0, 2.0], 1).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_normalize_empty_series() {
        assert!(normalize_to_width::<u32>(&[], 10).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_all_zero_is_an_error() {
        let err = normalize_to_width(&[0usize, 0, 0], 10).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
        let err = normalize_to_width(&[0.0, 0.0], 10).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn test_normalize_negative_is_an_error() {
        let err = normalize_to_width(&[-3i32, -1], 10).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
        let err = normalize_to_width(&[-3i32, 6], 10).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn test_normalize_zero_width() {
        let err = normalize_to_width(&[1u8], 0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_bar_counts_only() {
        assert_eq!(bar(20, 6, 0, '-', '>', None, None), "------>             ");
        assert_eq!(bar(20, 0, 0, '-', '>', None, None), ">                   ");
        assert_eq!(bar(20, 19, 0, '-', '>', None, None), "------------------->");
    }

    #[test]
    fn test_bar_with_sum_mark() {
        assert_eq!(
            bar(30, 29, 7, '-', '|', Some('S'), Some('$')),
            "-------S---------------------|"
        );
        assert_eq!(
            bar(30, 3, 13, '-', '|', Some('S'), Some('$')),
            "---|         S                "
        );
    }

    #[test]
    fn test_bar_combined_mark() {
        assert_eq!(
            bar(10, 0, 0, '-', '|', Some('S'), Some('$')),
            "$         "
        );
        // Without a combined glyph the sum glyph wins
        assert_eq!(bar(10, 2, 2, '-', '|', Some('S'), None), "--S       ");
    }

    #[test]
    fn test_bar_multibyte_glyphs() {
        let drawn = bar(6, 2, 4, '═', '●', Some('◆'), None);
        assert_eq!(drawn, "══● ◆ ");
        assert_eq!(drawn.chars().count(), 6);
    }

    proptest! {
        #[test]
        fn prop_bar_is_exactly_width(
            width in 1usize..80,
            count_frac in 0.0f64..=1.0,
            sum_frac in 0.0f64..=1.0,
        ) {
            let last = (width - 1) as f64;
            let count_column = (count_frac * last).round() as usize;
            let sum_column = (sum_frac * last).round() as usize;
            let drawn = bar(width, count_column, sum_column, '-', '|', Some('S'), Some('$'));
            prop_assert_eq!(drawn.chars().count(), width);
        }
    }
}
