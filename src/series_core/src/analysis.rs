//! # Error analysis
//!
//! Evaluate all three accumulators over a set of sample sizes and compare them
//! against the direct sum.
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
use std::ops::Index;

use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::accumulate::Strategy;
use crate::errors::{Error, SeriesResult};
use crate::sample::SampleSize;

/// Relative difference of `candidate` from `reference`, `|(c - r) / r|`.
///
/// ```
///     use series_core::prelude::relative_error;
///     assert_eq!(relative_error(1.5, 2.0).unwrap(), 0.25);
///     assert!(relative_error(1.0, 0.0).is_err());
/// ```
///
/// # Errors
/// [`Error::UndefinedRelativeError`] when the reference is zero or non-finite.
pub fn relative_error(candidate: f64, reference: f64) -> SeriesResult<f64> {
    if reference == 0.0 || !reference.is_finite() {
        Err(Error::UndefinedRelativeError(reference))?;
    }
    Ok(((candidate - reference) / reference).abs())
}

/// All three partial sums for a single sample size, along with the relative errors of
/// `S1` and `S2` measured against `S3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    /// Sample size.
    pub n: usize,

    /// Alternating form.
    pub s1: f64,

    /// Two running sums form.
    pub s2: f64,

    /// Direct form, the reference.
    pub s3: f64,

    /// Relative error of `s1`.
    pub err1: f64,

    /// Relative error of `s2`.
    pub err2: f64,
}

impl SeriesRecord {
    /// Evaluate every strategy at `n`.
    ///
    /// # Errors
    /// [`Error::UndefinedRelativeError`] if the reference sum is zero, which does not
    /// happen for any valid sample size of this series.
    pub fn try_compute(n: SampleSize) -> SeriesResult<Self> {
        let s1: f64 = Strategy::Alternating.partial_sum(n);
        let s2: f64 = Strategy::TwoRunningSums.partial_sum(n);
        let s3: f64 = Strategy::REFERENCE.partial_sum(n);
        Ok(Self {
            n: n.get(),
            s1,
            s2,
            s3,
            err1: relative_error(s1, s3)?,
            err2: relative_error(s2, s3)?,
        })
    }

    /// Partial sum computed by the given strategy.
    #[must_use]
    pub fn value(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Alternating => self.s1,
            Strategy::TwoRunningSums => self.s2,
            Strategy::Direct => self.s3,
        }
    }
}

/// Ordered collection of [`SeriesRecord`], one per requested sample size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis(Vec<SeriesRecord>);

impl Analysis {
    /// Records in the order the sample sizes were given.
    #[must_use]
    pub fn records(&self) -> &[SeriesRecord] {
        &self.0
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no sample sizes were analyzed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sample sizes, in order.
    #[must_use]
    pub fn sample_sizes(&self) -> Vec<usize> {
        self.0.iter().map(|r| r.n).collect_vec()
    }

    /// Relative errors of `S1`, in order.
    #[must_use]
    pub fn err1(&self) -> Vec<f64> {
        self.0.iter().map(|r| r.err1).collect_vec()
    }

    /// Relative errors of `S2`, in order.
    #[must_use]
    pub fn err2(&self) -> Vec<f64> {
        self.0.iter().map(|r| r.err2).collect_vec()
    }

    /// Consume the analysis, returning the records.
    #[must_use]
    pub fn into_inner(self) -> Vec<SeriesRecord> {
        self.0
    }
}

impl Index<usize> for Analysis {
    type Output = SeriesRecord;
    fn index(&self, index: usize) -> &Self::Output {
        self.0.index(index)
    }
}

impl From<Vec<SeriesRecord>> for Analysis {
    fn from(value: Vec<SeriesRecord>) -> Self {
        Self(value)
    }
}

/// Compute a [`SeriesRecord`] for every sample size, preserving order and duplicates.
///
/// Every sample size is validated before any sum is evaluated.
///
/// ```
///     use series_core::prelude::analyze;
///     let analysis = analyze(&[10, 1000]).unwrap();
///     assert_eq!(analysis.sample_sizes(), [10, 1000]);
///     assert!(analysis[1].err2 > analysis[1].err1);
/// ```
///
/// # Errors
/// [`Error::NonPositiveSampleSize`] if any sample size is zero.
pub fn analyze(n_values: &[usize]) -> SeriesResult<Analysis> {
    SampleSize::try_from_slice(n_values)?
        .into_iter()
        .map(SeriesRecord::try_compute)
        .collect::<SeriesResult<Vec<_>>>()
        .map(Analysis)
}

/// Same as [`analyze`], with the sample sizes evaluated in parallel.
///
/// # Errors
/// [`Error::NonPositiveSampleSize`] if any sample size is zero.
pub fn analyze_par(n_values: &[usize]) -> SeriesResult<Analysis> {
    SampleSize::try_from_slice(n_values)?
        .into_par_iter()
        .map(SeriesRecord::try_compute)
        .collect::<SeriesResult<Vec<_>>>()
        .map(Analysis)
}
