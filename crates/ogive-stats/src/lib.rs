//! Cumulative-frequency ("ogive") analysis of one-dimensional samples.
//!
//! This crate provides the statistical transforms behind the `ogive` tool:
//!
//! - **Samples**: a validated, non-empty, finite sequence of values
//! - **Binning**: equal-width bins over the closed value range, with counts
//! - **Curves**: less-than (ascending) and greater-than (descending)
//!   cumulative-percentage curves built from the bins
//! - **Interpolation**: linear lookup between value space and percentage space,
//!   clamped at both ends
//! - **Frequency tables**: per-bin count, relative and cumulative frequencies
//! - **Descriptive statistics** and **percentiles** of the raw values
//!
//! Data flows one way: sample → [`binning`] → [`curve`] / [`frequency_table`],
//! with [`analysis`] bundling all of it for one `(sample, bin_count)` pair.
//!
//! # Modules
//!
//! - [`sample`]: Validated sample type
//! - [`binning`]: Equal-width binning
//! - [`curve`]: Ogive curves and bidirectional lookup
//! - [`interpolation`]: Piecewise-linear interpolation over monotone tables
//! - [`frequency_table`]: Per-bin frequency report
//! - [`descriptive`]: Descriptive statistics for summarizing samples
//! - [`percentiles`]: Percentile computation and storage
//! - [`analysis`]: Everything above, computed together
//!
//! # Examples
//!
//! ```
//! use ogive_stats::{
//!     binning::Binning,
//!     curve::{OgiveCurve, QueryAxis},
//!     frequency_table::FrequencyTable,
//!     sample::Sample,
//! };
//!
//! let sample = Sample::new(vec![10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 40.0, 40.0]).unwrap();
//! let binning = Binning::new(&sample, 4).unwrap();
//!
//! let curve = OgiveCurve::less_than(binning.edges(), binning.counts()).unwrap();
//! assert_eq!(curve.interpolate(QueryAxis::Value, 25.0), 50.0);
//! assert_eq!(curve.interpolate(QueryAxis::Percentage, 50.0), 25.0);
//!
//! let table = FrequencyTable::new(binning.edges(), binning.counts()).unwrap();
//! assert_eq!(table.rows().last().unwrap().cumulative_percent, 100.0);
//! ```

pub use self::error::OgiveError;

pub mod analysis;
pub mod binning;
pub mod curve;
pub mod descriptive;
mod error;
pub mod frequency_table;
pub mod interpolation;
pub mod percentiles;
pub mod sample;
