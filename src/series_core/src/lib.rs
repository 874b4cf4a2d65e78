//! # Series Core
//! Rounding error in three algebraically equivalent partial sums of the convergent
//! series `sum 1 / (2n (2n + 1))`.
//!
//! The same value is computed by an alternating sum, by the difference of two large
//! running sums, and by a direct sum of positive terms. In exact arithmetic these
//! agree, any difference is rounding error. The direct sum is the best conditioned
//! and serves as the reference.
//!
//! This crate is left as a stand alone Rust crate, completely independent of the
//! Python wrappers.
//!

pub mod accumulate;
pub mod analysis;
pub mod errors;
pub mod report;
pub mod sample;
pub mod sweep;
pub mod terms;

/// Common useful imports
pub mod prelude {
    pub use crate::accumulate::{Strategy, sum_s1, sum_s2, sum_s3};
    pub use crate::analysis::{Analysis, SeriesRecord, analyze, analyze_par, relative_error};
    pub use crate::errors::{Error, SeriesResult};
    pub use crate::report::{default_report, format_table};
    pub use crate::sample::SampleSize;
    pub use crate::sweep::SweepConfig;
}
