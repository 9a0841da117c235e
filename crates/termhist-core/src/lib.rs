//! Core traits and types for termhist
//!
//! This crate provides the foundation shared by the binning and rendering
//! crates: the [`Numeric`] sample trait, small slice helpers, and the
//! unified [`Error`] type.
//!
//! # Example
//!
//! ```rust
//! use termhist_core::{utils, Numeric};
//!
//! let samples = [10u64, 20, 300, 1000];
//! assert_eq!(utils::min(&samples), Some(10));
//! assert_eq!(utils::max(&samples), Some(1000));
//! assert_eq!(utils::sum(&samples), 1330);
//! assert!(u64::IS_INTEGER);
//! ```

pub mod error;
pub mod numeric;
pub mod utils;

pub use error::{Error, Result};
pub use numeric::Numeric;
