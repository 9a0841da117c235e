//! Prints linear and logarithmic charts of a skewed set of file sizes
//!
//! Run with `RUST_LOG=debug` to see binning decisions.

use std::io::Write;
use termhist_histogram::{create_linear, create_log};
use termhist_render::{print, PrintOptions};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Mostly small files with a long tail of large ones
    let sizes: Vec<u64> = (0..2000u64)
        .map(|i| {
            let x = i as f64 / 200.0;
            (x.exp() * 64.0) as u64
        })
        .chain([0, 0, 1])
        .collect();

    let options = PrintOptions::bytes(50, true);
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "=== Linear buckets ===")?;
    print(&mut stdout, &create_linear(&sizes, 8)?, &options)?;

    writeln!(stdout, "\n=== Logarithmic buckets ===")?;
    print(&mut stdout, &create_log(&sizes, 8)?, &options)?;

    Ok(())
}
