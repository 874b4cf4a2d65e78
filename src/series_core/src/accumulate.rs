//! # Accumulators
//!
//! Three algebraically equivalent partial sums of the same series, differing only
//! in how the terms are grouped before they are added.
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
use std::fmt;

use num_traits::{Float, NumAssignOps};
use serde::{Deserialize, Serialize};

use crate::errors::SeriesResult;
use crate::sample::SampleSize;
use crate::terms::{alternating_term, direct_term, even_ratio_term, odd_ratio_term};

/// Sum of the alternating form over `2N` terms.
///
/// `S1(N) = sum_{n=1}^{2N} (-1)^n n / (n + 1)`
///
/// Adjacent terms are nearly equal in magnitude and opposite in sign, rounding error
/// grows roughly linearly with the number of additions.
#[must_use]
pub fn alternating_sum<T>(n: SampleSize) -> T
where
    T: Float + NumAssignOps,
{
    let mut result = T::zero();
    for k in 1..=n.get().saturating_mul(2) {
        result += alternating_term(k);
    }
    result
}

/// Difference of two running sums over `N` terms each.
///
/// `S2(N) = -sum_{n=1}^{N} (2n - 1) / (2n) + sum_{n=1}^{N} 2n / (2n + 1)`
///
/// Both running sums grow toward `N` while their difference stays bounded, the final
/// subtraction cancels most of the significant digits.
#[must_use]
pub fn two_running_sums<T>(n: SampleSize) -> T
where
    T: Float + NumAssignOps,
{
    let mut sum1 = T::zero();
    let mut sum2 = T::zero();
    for k in 1..=n.get() {
        sum1 += odd_ratio_term(k);
        sum2 += even_ratio_term(k);
    }
    -sum1 + sum2
}

/// Direct sum of strictly positive terms over `N` terms.
///
/// `S3(N) = sum_{n=1}^{N} 1 / (2n (2n + 1))`
#[must_use]
pub fn direct_sum<T>(n: SampleSize) -> T
where
    T: Float + NumAssignOps,
{
    let mut result = T::zero();
    for k in 1..=n.get() {
        result += direct_term(k);
    }
    result
}

/// The three algebraically equivalent ways of summing the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Alternating form, `S1`.
    Alternating,

    /// Two running sums combined at the end, `S2`.
    TwoRunningSums,

    /// Direct sum of positive terms, `S3`.
    Direct,
}

impl Strategy {
    /// All strategies, in `S1`, `S2`, `S3` order.
    pub const ALL: [Self; 3] = [Self::Alternating, Self::TwoRunningSums, Self::Direct];

    /// Strategy used as ground truth for relative errors.
    pub const REFERENCE: Self = Self::Direct;

    /// Short label, `S1`, `S2` or `S3`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Alternating => "S1",
            Self::TwoRunningSums => "S2",
            Self::Direct => "S3",
        }
    }

    /// Evaluate the partial sum for `n` in the requested float precision.
    ///
    /// ```
    ///     use series_core::prelude::{SampleSize, Strategy};
    ///     let n = SampleSize::try_new(4).unwrap();
    ///     for strategy in Strategy::ALL {
    ///         let value: f64 = strategy.partial_sum(n);
    ///         assert!((value - 0.254365079365079).abs() < 1e-10);
    ///     }
    /// ```
    #[must_use]
    pub fn partial_sum<T>(self, n: SampleSize) -> T
    where
        T: Float + NumAssignOps,
    {
        match self {
            Self::Alternating => alternating_sum(n),
            Self::TwoRunningSums => two_running_sums(n),
            Self::Direct => direct_sum(n),
        }
    }

    /// Number of floating point additions performed for `n`.
    ///
    /// The final combination of the two running sums counts as one addition.
    #[must_use]
    pub fn addition_count(self, n: SampleSize) -> usize {
        let n = n.get();
        match self {
            Self::Alternating => n.saturating_mul(2),
            Self::TwoRunningSums => n.saturating_mul(2).saturating_add(1),
            Self::Direct => n,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `S1(N)` in double precision.
///
/// ```
///     use series_core::prelude::sum_s1;
///     assert!((sum_s1(2).unwrap() - 0.216666666666667).abs() < 1e-10);
///     assert!(sum_s1(0).is_err());
/// ```
///
/// # Errors
/// [`crate::errors::Error::NonPositiveSampleSize`] if `n == 0`.
pub fn sum_s1(n: usize) -> SeriesResult<f64> {
    Ok(alternating_sum(SampleSize::try_new(n)?))
}

/// `S2(N)` in double precision.
///
/// # Errors
/// [`crate::errors::Error::NonPositiveSampleSize`] if `n == 0`.
pub fn sum_s2(n: usize) -> SeriesResult<f64> {
    Ok(two_running_sums(SampleSize::try_new(n)?))
}

/// `S3(N)` in double precision.
///
/// # Errors
/// [`crate::errors::Error::NonPositiveSampleSize`] if `n == 0`.
pub fn sum_s3(n: usize) -> SeriesResult<f64> {
    Ok(direct_sum(SampleSize::try_new(n)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn size(n: usize) -> SampleSize {
        SampleSize::try_new(n).unwrap()
    }

    #[test]
    fn test_known_values() {
        let expected = [
            (1, 0.166666666666667),
            (2, 0.216666666666667),
            (4, 0.254365079365079),
        ];
        for (n, value) in expected {
            assert!((sum_s1(n).unwrap() - value).abs() < 1e-10, "S1 at N={n}");
            assert!((sum_s2(n).unwrap() - value).abs() < 1e-10, "S2 at N={n}");
            assert!((sum_s3(n).unwrap() - value).abs() < 1e-10, "S3 at N={n}");
        }
    }

    #[test]
    fn test_small_n_agreement() {
        for n in 1..=10 {
            let s3 = sum_s3(n).unwrap();
            assert!((sum_s1(n).unwrap() - s3).abs() < 1e-10);
            assert!((sum_s2(n).unwrap() - s3).abs() < 1e-10);
        }
    }

    #[test]
    fn test_monotonic() {
        for strategy in Strategy::ALL {
            let small: f64 = strategy.partial_sum(size(10));
            let large: f64 = strategy.partial_sum(size(100));
            assert!(large > small, "{strategy} should increase with N");
        }
    }

    #[test]
    fn test_bit_identical() {
        for strategy in Strategy::ALL {
            let a: f64 = strategy.partial_sum(size(5000));
            let b: f64 = strategy.partial_sum(size(5000));
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_converges_to_limit() {
        // sum 1/(2n(2n+1)) = 1 - ln 2, the tail after N terms is about 1/(4N).
        let limit = 1.0 - 2_f64.ln();
        let s3 = sum_s3(100_000).unwrap();
        assert!(s3 < limit);
        assert!((limit - s3) < 1e-5);
    }

    #[test]
    fn test_non_positive() {
        assert_eq!(sum_s1(0), Err(Error::NonPositiveSampleSize(0)));
        assert_eq!(sum_s2(0), Err(Error::NonPositiveSampleSize(0)));
        assert_eq!(sum_s3(0), Err(Error::NonPositiveSampleSize(0)));
    }

    #[test]
    fn test_single_precision() {
        let n = size(100);
        let single: f32 = Strategy::Direct.partial_sum(n);
        let double: f64 = Strategy::Direct.partial_sum(n);
        assert!((f64::from(single) - double).abs() < 1e-6);
    }

    #[test]
    fn test_addition_count() {
        let n = size(10);
        assert_eq!(Strategy::Alternating.addition_count(n), 20);
        assert_eq!(Strategy::TwoRunningSums.addition_count(n), 21);
        assert_eq!(Strategy::Direct.addition_count(n), 10);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Strategy::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["S1", "S2", "S3"]);
        assert_eq!(Strategy::REFERENCE, Strategy::Direct);
    }
}

#[cfg(test)]
mod proptests {
    use super::{SampleSize, Strategy};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn sums_increase_with_n(a in 1_usize..2000, b in 1_usize..2000) {
            prop_assume!(a != b);
            let (low, high) = (a.min(b), a.max(b));
            for strategy in Strategy::ALL {
                let low_sum: f64 = strategy.partial_sum(SampleSize::try_new(low).unwrap());
                let high_sum: f64 = strategy.partial_sum(SampleSize::try_new(high).unwrap());
                prop_assert!(high_sum > low_sum, "{} not increasing: N={} N={}", strategy, low, high);
            }
        }

        #[test]
        fn sums_bounded_by_limit(n in 1_usize..2000) {
            let limit = 1.0 - 2_f64.ln();
            for strategy in Strategy::ALL {
                let value: f64 = strategy.partial_sum(SampleSize::try_new(n).unwrap());
                prop_assert!(value > 0.0 && value < limit, "{} out of range at N={}", strategy, n);
            }
        }

        #[test]
        fn repeated_calls_identical(n in 1_usize..2000) {
            for strategy in Strategy::ALL {
                let a: f64 = strategy.partial_sum(SampleSize::try_new(n).unwrap());
                let b: f64 = strategy.partial_sum(SampleSize::try_new(n).unwrap());
                prop_assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }
}
