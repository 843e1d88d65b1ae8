//! Sample acquisition for the `ogive` tool.
//!
//! Provides the data that [`ogive_stats`] analyzes:
//!
//! - [`synthetic`]: seeded generator of exam-like scores
//! - [`external`]: single-column CSV from a file or URL
//! - [`provider`]: picks a source and falls back to synthetic data when
//!   external data is unavailable, recording where the sample came from
//!
//! # Examples
//!
//! ```
//! use ogive_sample::{
//!     provider::{Provenance, SampleSource, acquire},
//!     synthetic::SyntheticConfig,
//! };
//!
//! let config = SyntheticConfig { size: 120, seed: 7, regeneration: 0 };
//! let acquired = acquire(&SampleSource::Synthetic, &config).unwrap();
//! assert_eq!(acquired.provenance, Provenance::Simulated);
//! assert_eq!(acquired.sample.len(), 120);
//! ```

pub mod external;
pub mod provider;
pub mod synthetic;
