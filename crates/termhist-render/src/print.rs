//! Writing histograms as text bar charts

use crate::bar::{bar, normalize_to_width};
use crate::options::PrintOptions;
use std::io::Write;
use termhist_core::{Error, Numeric, Result};
use termhist_histogram::Histogram;
use tracing::{debug, instrument, trace};

/// Write `histogram` to `w` as a text bar chart
///
/// The first line shows the top edge of the histogram. It is followed by one
/// line per bucket, highest bucket first, each showing the bucket's low
/// edge, a bar whose mark sits at the bucket's count scaled to the bar
/// width, and the count itself. When the style has a sum glyph, sums are
/// scaled separately, marked on the same bar, and printed after the count.
///
/// An empty histogram writes nothing.
///
/// # Errors
///
/// Fails on a zero-width style, on a sum series that cannot be scaled
/// (all sums zero, or negative sums), and on write errors.
#[instrument(level = "debug", skip_all, fields(buckets = histogram.len(), width = options.style.width))]
pub fn print<T, W>(w: &mut W, histogram: &Histogram<T>, options: &PrintOptions<T>) -> Result<()>
where
    T: Numeric,
    W: Write + ?Sized,
{
    let Some(top) = histogram.buckets().last() else {
        debug!("empty histogram, nothing to render");
        return Ok(());
    };
    let style = &options.style;
    style.validate()?;

    let count_columns = normalize_to_width(&histogram.counts(), style.width)?;
    let sum_columns = if style.shows_sums() {
        Some(normalize_to_width(&histogram.sums(), style.width)?)
    } else {
        None
    };
    let count_digits = histogram.max_count().to_string().len();

    writeln!(w, "{}  {}", style.prefix, options.format_value(top.high))?;
    for (i, bucket) in histogram.iter().enumerate().rev() {
        let sum_column = sum_columns.as_ref().map_or(0, |columns| columns[i]);
        let drawn = bar(
            style.width,
            count_columns[i],
            sum_column,
            style.pad_symbol,
            style.symbol,
            style.sum_symbol,
            style.combined_symbol,
        );

        let mut totals = format!("{:>count_digits$}", bucket.count);
        if style.shows_sums() {
            totals.push_str("; ");
            totals.push_str(&options.format_value(bucket.sum));
        }

        trace!(bucket = i, count = bucket.count, column = count_columns[i], "rendered bucket");
        writeln!(
            w,
            "{}> {}: {} ({})",
            style.prefix,
            options.format_value(bucket.low),
            drawn,
            totals
        )?;
    }
    Ok(())
}

/// Render `histogram` into a `String`
pub fn render_to_string<T: Numeric>(
    histogram: &Histogram<T>,
    options: &PrintOptions<T>,
) -> Result<String> {
    let mut buffer = Vec::new();
    print(&mut buffer, histogram, options)?;
    String::from_utf8(buffer).map_err(|e| Error::Other(e.into()))
}
