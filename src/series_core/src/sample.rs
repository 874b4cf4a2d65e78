//! # Sample sizes
//!
//! Validated number of terms to sum.
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
use std::{fmt, num::NonZeroUsize};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, SeriesResult};

/// Number of series terms controlling an accumulator, always at least 1.
///
/// The alternating accumulator sums `2N` terms, the other two sum `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SampleSize(NonZeroUsize);

impl SampleSize {
    /// Smallest valid sample size.
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// Construct a new sample size, failing when `n` is zero.
    ///
    /// # Errors
    /// [`Error::NonPositiveSampleSize`] if `n == 0`.
    pub fn try_new(n: usize) -> SeriesResult<Self> {
        NonZeroUsize::new(n)
            .map(Self)
            .ok_or(Error::NonPositiveSampleSize(0))
    }

    /// The sample size as a plain integer.
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Validate every value of a sequence, failing on the first invalid entry.
    ///
    /// # Errors
    /// [`Error::NonPositiveSampleSize`] if any value is zero.
    pub fn try_from_slice(values: &[usize]) -> SeriesResult<Vec<Self>> {
        values.iter().map(|&n| Self::try_new(n)).collect()
    }
}

impl TryFrom<usize> for SampleSize {
    type Error = Error;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<i64> for SampleSize {
    type Error = Error;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(Error::NonPositiveSampleSize(value))
    }
}

impl From<SampleSize> for usize {
    fn from(value: SampleSize) -> Self {
        value.get()
    }
}

impl fmt::Display for SampleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::SampleSize;
    use crate::errors::Error;

    #[test]
    fn test_zero_rejected() {
        assert_eq!(
            SampleSize::try_new(0),
            Err(Error::NonPositiveSampleSize(0))
        );
        assert_eq!(SampleSize::try_new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(
            SampleSize::try_from(-5_i64),
            Err(Error::NonPositiveSampleSize(-5))
        );
        assert!(SampleSize::try_from(0_i64).is_err());
        assert_eq!(SampleSize::try_from(12_i64).unwrap().get(), 12);
    }

    #[test]
    fn test_slice() {
        let sizes = SampleSize::try_from_slice(&[3, 1, 3]).unwrap();
        assert_eq!(sizes.iter().map(|s| s.get()).collect::<Vec<_>>(), [3, 1, 3]);
        assert!(SampleSize::try_from_slice(&[4, 0, 2]).is_err());
        assert_eq!(SampleSize::ONE.to_string(), "1");
    }
}
