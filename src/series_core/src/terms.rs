//! # Term generators
//!
//! Individual terms of the three equivalent forms of the series
//! `sum 1 / (2n (2n + 1))`.
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
use num_traits::Float;

/// Exact integer converted into the float type, rounded once.
#[inline(always)]
fn exact<T: Float>(n: u128) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}

/// Term `n` of the alternating form, `(-1)^n * n / (n + 1)`.
///
/// The quotient is a single correctly rounded division of two exact integers, the
/// sign is applied afterward and introduces no rounding.
///
/// ```
///     use series_core::terms::alternating_term;
///     assert_eq!(alternating_term::<f64>(1), -0.5);
///     assert_eq!(alternating_term::<f64>(2), 2.0 / 3.0);
/// ```
#[inline(always)]
#[must_use]
pub fn alternating_term<T: Float>(n: usize) -> T {
    let n = n as u128;
    let magnitude = exact::<T>(n) / exact::<T>(n + 1);
    if n % 2 == 0 { magnitude } else { -magnitude }
}

/// Term `n` of the subtracted running sum, `(2n - 1) / (2n)`.
#[inline(always)]
#[must_use]
pub fn odd_ratio_term<T: Float>(n: usize) -> T {
    let two_n = 2 * n as u128;
    exact::<T>(two_n - 1) / exact::<T>(two_n)
}

/// Term `n` of the added running sum, `2n / (2n + 1)`.
#[inline(always)]
#[must_use]
pub fn even_ratio_term<T: Float>(n: usize) -> T {
    let two_n = 2 * n as u128;
    exact::<T>(two_n) / exact::<T>(two_n + 1)
}

/// Term `n` of the direct form, `1 / (2n (2n + 1))`.
///
/// The denominator is formed exactly in integer arithmetic before the division.
///
/// ```
///     use series_core::terms::direct_term;
///     assert_eq!(direct_term::<f64>(1), 1.0 / 6.0);
///     assert_eq!(direct_term::<f64>(2), 1.0 / 20.0);
/// ```
#[inline(always)]
#[must_use]
pub fn direct_term<T: Float>(n: usize) -> T {
    let two_n = 2 * n as u128;
    T::one() / exact::<T>(two_n * (two_n + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_sign() {
        for n in 1..50 {
            let term: f64 = alternating_term(n);
            assert_eq!(term.is_sign_negative(), n % 2 == 1);
            assert!(term.abs() < 1.0);
        }
    }

    #[test]
    fn test_paired_terms_match_direct() {
        // -(2n-1)/(2n) + 2n/(2n+1) == 1/(2n(2n+1))
        for n in 1..20 {
            let pair: f64 = -odd_ratio_term::<f64>(n) + even_ratio_term::<f64>(n);
            assert!((pair - direct_term::<f64>(n)).abs() < 1e-15);

            let alt: f64 = alternating_term::<f64>(2 * n - 1) + alternating_term::<f64>(2 * n);
            assert!((alt - direct_term::<f64>(n)).abs() < 1e-15);
        }
    }

    #[test]
    fn test_f32_terms() {
        assert_eq!(odd_ratio_term::<f32>(1), 0.5);
        assert_eq!(even_ratio_term::<f32>(1), 2.0 / 3.0);
        assert_eq!(direct_term::<f32>(3), 1.0 / 42.0);
    }

    #[test]
    fn test_large_n_denominator() {
        // 2n(2n+1) exceeds u64 here.
        let n = 1_usize << 33;
        let term: f64 = direct_term(n);
        let expected = 1.0 / ((2.0 * n as f64) * (2.0 * n as f64 + 1.0));
        assert!(((term - expected) / expected).abs() < 1e-15);
    }
}
