//! # Sweeps
//!
//! Configuration of the set of sample sizes the analysis is run over.
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
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, analyze_par};
use crate::errors::{Error, SeriesResult};

/// Log-spaced sweep over sample sizes.
///
/// Generates `num` exponents evenly spaced between `start_exp` and `stop_exp`
/// (inclusive), raises 10 to each, and truncates toward zero. Duplicates produced by
/// the truncation at small sizes are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Base 10 exponent of the first sample size.
    pub start_exp: f64,

    /// Base 10 exponent of the last sample size.
    pub stop_exp: f64,

    /// Number of sample sizes.
    pub num: usize,
}

impl Default for SweepConfig {
    /// 50 sample sizes from 1 to 10,000.
    fn default() -> Self {
        Self {
            start_exp: 0.0,
            stop_exp: 4.0,
            num: 50,
        }
    }
}

impl SweepConfig {
    /// Construct a new validated sweep.
    ///
    /// # Errors
    /// [`Error::ValueError`] if the configuration cannot produce positive sample
    /// sizes, see [`SweepConfig::validate`].
    pub fn try_new(start_exp: f64, stop_exp: f64, num: usize) -> SeriesResult<Self> {
        let config = Self {
            start_exp,
            stop_exp,
            num,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every generated sample size is a positive, representable integer.
    ///
    /// # Errors
    /// [`Error::ValueError`] when `num` is zero, either exponent is not finite, the
    /// start is negative, the stop precedes the start, or the largest sample size
    /// does not fit in a `usize`.
    pub fn validate(&self) -> SeriesResult<()> {
        if self.num == 0 {
            Err(Error::ValueError("Sweep must contain at least one sample size.".into()))?;
        }
        if !self.start_exp.is_finite() || !self.stop_exp.is_finite() {
            Err(Error::ValueError("Sweep exponents must be finite.".into()))?;
        }
        if self.start_exp < 0.0 {
            Err(Error::ValueError(
                "Sweep start exponent must be non-negative, smaller sizes truncate to 0."
                    .into(),
            ))?;
        }
        if self.stop_exp < self.start_exp {
            Err(Error::ValueError(
                "Sweep stop exponent must not be less than the start.".into(),
            ))?;
        }
        if pow10(self.stop_exp) >= usize::MAX as f64 {
            Err(Error::ValueError(format!(
                "Sweep stop exponent {} is too large.",
                self.stop_exp
            )))?;
        }
        Ok(())
    }

    /// Base 10 exponents of the sweep, evenly spaced and ending exactly on `stop_exp`.
    fn exponents(&self) -> Vec<f64> {
        if self.num == 1 {
            return vec![self.start_exp];
        }
        let step = (self.stop_exp - self.start_exp) / (self.num - 1) as f64;
        let mut exponents = (0..self.num)
            .map(|idx| self.start_exp + idx as f64 * step)
            .collect_vec();
        if let Some(last) = exponents.last_mut() {
            *last = self.stop_exp;
        }
        exponents
    }

    /// Generate the sample sizes of the sweep.
    ///
    /// ```
    ///     use series_core::prelude::SweepConfig;
    ///     let sizes = SweepConfig::default().sample_sizes().unwrap();
    ///     assert_eq!(sizes.len(), 50);
    ///     assert_eq!(sizes[0], 1);
    ///     assert_eq!(sizes[49], 10_000);
    /// ```
    ///
    /// # Errors
    /// [`Error::ValueError`] if the configuration is invalid.
    pub fn sample_sizes(&self) -> SeriesResult<Vec<usize>> {
        self.validate()?;
        #[allow(
            clippy::cast_sign_loss,
            clippy::cast_possible_truncation,
            reason = "Validated to be positive and within range."
        )]
        let sizes = self
            .exponents()
            .into_iter()
            .map(|exp| pow10(exp) as usize)
            .collect_vec();
        Ok(sizes)
    }

    /// Run the analysis across every sample size of the sweep.
    ///
    /// Sample sizes are independent, so they are evaluated in parallel.
    ///
    /// # Errors
    /// [`Error::ValueError`] if the configuration is invalid.
    pub fn analyze(&self) -> SeriesResult<Analysis> {
        analyze_par(&self.sample_sizes()?)
    }
}

/// `10^exp`, exact when the exponent is a whole number.
fn pow10(exp: f64) -> f64 {
    if exp.fract() == 0.0 && exp.abs() <= f64::from(i32::MAX) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Checked to be a whole number within i32 range."
        )]
        let exp = exp as i32;
        10_f64.powi(exp)
    } else {
        10_f64.powf(exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep() {
        let sizes = SweepConfig::default().sample_sizes().unwrap();
        assert_eq!(sizes.len(), 50);
        assert_eq!(sizes.first(), Some(&1));
        assert_eq!(sizes.last(), Some(&10_000));

        // truncation gives repeated small sizes
        assert_eq!(sizes[..4], [1, 1, 1, 1]);
        assert_eq!(sizes[4], 2);
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_decades() {
        let sizes = SweepConfig::try_new(1.0, 3.0, 3)
            .unwrap()
            .sample_sizes()
            .unwrap();
        assert_eq!(sizes, [10, 100, 1000]);

        let single = SweepConfig::try_new(2.0, 2.0, 1)
            .unwrap()
            .sample_sizes()
            .unwrap();
        assert_eq!(single, [100]);
    }

    #[test]
    fn test_invalid() {
        assert!(SweepConfig::try_new(0.0, 4.0, 0).is_err());
        assert!(SweepConfig::try_new(-1.0, 4.0, 10).is_err());
        assert!(SweepConfig::try_new(3.0, 2.0, 10).is_err());
        assert!(SweepConfig::try_new(0.0, f64::NAN, 10).is_err());
        assert!(SweepConfig::try_new(0.0, 400.0, 10).is_err());

        let bad = SweepConfig {
            num: 0,
            ..SweepConfig::default()
        };
        assert!(bad.sample_sizes().is_err());
        assert!(bad.analyze().is_err());
    }

    #[test]
    fn test_sweep_analysis() {
        let analysis = SweepConfig::try_new(0.0, 3.0, 4)
            .unwrap()
            .analyze()
            .unwrap();
        assert_eq!(analysis.sample_sizes(), [1, 10, 100, 1000]);
    }
}
