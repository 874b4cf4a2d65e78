//! Partial sums of the series.
use pyo3::prelude::*;
use series_core::prelude::Strategy;

use crate::utils::{MaybeVec, sample_sizes_from_py};

fn evaluate(strategy: Strategy, n: MaybeVec<i64>) -> PyResult<MaybeVec<f64>> {
    let sums: Vec<f64> = sample_sizes_from_py(n.into())?
        .into_iter()
        .map(|size| strategy.partial_sum(size))
        .collect();
    Ok(sums.into())
}

/// Alternating form of the series, summed over ``2N`` terms.
///
/// .. math::
///
///     S_1(N) = \sum_{n=1}^{2N} (-1)^n \frac{n}{n+1}
///
/// Parameters
/// ----------
/// n:
///     Positive sample size, or a list of them.
#[pyfunction]
#[pyo3(name = "sum_s1")]
pub fn sum_s1_py(n: MaybeVec<i64>) -> PyResult<MaybeVec<f64>> {
    evaluate(Strategy::Alternating, n)
}

/// Difference of two running sums of ``N`` terms each.
///
/// .. math::
///
///     S_2(N) = -\sum_{n=1}^{N} \frac{2n-1}{2n} + \sum_{n=1}^{N} \frac{2n}{2n+1}
///
/// Parameters
/// ----------
/// n:
///     Positive sample size, or a list of them.
#[pyfunction]
#[pyo3(name = "sum_s2")]
pub fn sum_s2_py(n: MaybeVec<i64>) -> PyResult<MaybeVec<f64>> {
    evaluate(Strategy::TwoRunningSums, n)
}

/// Direct sum of ``N`` positive terms, the reference for relative errors.
///
/// .. math::
///
///     S_3(N) = \sum_{n=1}^{N} \frac{1}{2n(2n+1)}
///
/// Parameters
/// ----------
/// n:
///     Positive sample size, or a list of them.
#[pyfunction]
#[pyo3(name = "sum_s3")]
pub fn sum_s3_py(n: MaybeVec<i64>) -> PyResult<MaybeVec<f64>> {
    evaluate(Strategy::Direct, n)
}
