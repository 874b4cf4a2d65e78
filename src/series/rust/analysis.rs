//! Relative error analysis across sample sizes.
use pyo3::prelude::*;
use series_core::prelude::{self, SeriesRecord, SweepConfig};

use crate::utils::checked_sizes_py;

/// Partial sums and relative errors for a single sample size.
///
/// Errors of ``s1`` and ``s2`` are measured relative to ``s3``.
#[pyclass(frozen, module = "series", name = "SeriesRecord")]
#[derive(Clone, Debug)]
pub struct PySeriesRecord(pub SeriesRecord);

impl From<SeriesRecord> for PySeriesRecord {
    fn from(value: SeriesRecord) -> Self {
        Self(value)
    }
}

#[pymethods]
impl PySeriesRecord {
    /// Sample size.
    #[getter]
    pub fn n(&self) -> usize {
        self.0.n
    }

    /// Alternating form.
    #[getter]
    pub fn s1(&self) -> f64 {
        self.0.s1
    }

    /// Two running sums form.
    #[getter]
    pub fn s2(&self) -> f64 {
        self.0.s2
    }

    /// Direct form.
    #[getter]
    pub fn s3(&self) -> f64 {
        self.0.s3
    }

    /// Relative error of ``s1``.
    #[getter]
    pub fn err1(&self) -> f64 {
        self.0.err1
    }

    /// Relative error of ``s2``.
    #[getter]
    pub fn err2(&self) -> f64 {
        self.0.err2
    }

    fn __repr__(&self) -> String {
        format!(
            "SeriesRecord(n={}, s1={:?}, s2={:?}, s3={:?}, err1={:?}, err2={:?})",
            self.0.n, self.0.s1, self.0.s2, self.0.s3, self.0.err1, self.0.err2
        )
    }
}

/// Compute all partial sums and relative errors for every sample size.
///
/// Order and duplicates of the input are preserved.
///
/// Parameters
/// ----------
/// n_values:
///     Positive sample sizes.
/// parallel:
///     Evaluate the sample sizes on multiple threads.
#[pyfunction]
#[pyo3(name = "analyze", signature = (n_values, parallel=false))]
pub fn analyze_py(n_values: Vec<i64>, parallel: bool) -> PyResult<Vec<PySeriesRecord>> {
    let sizes = checked_sizes_py(n_values)?;
    let analysis = if parallel {
        prelude::analyze_par(&sizes)?
    } else {
        prelude::analyze(&sizes)?
    };
    Ok(analysis.into_inner().into_iter().map(Into::into).collect())
}

/// Relative errors of the alternating and two running sum forms.
///
/// Returns two lists, ``(err1, err2)``, one entry per sample size.
///
/// Parameters
/// ----------
/// n_values:
///     Positive sample sizes.
#[pyfunction]
#[pyo3(name = "relative_errors")]
pub fn relative_errors_py(n_values: Vec<i64>) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let analysis = prelude::analyze_par(&checked_sizes_py(n_values)?)?;
    Ok((analysis.err1(), analysis.err2()))
}

/// Log spaced sample sizes, ``10**linspace(start, stop, num)`` truncated to integers.
///
/// Parameters
/// ----------
/// start:
///     Base 10 exponent of the first sample size.
/// stop:
///     Base 10 exponent of the last sample size.
/// num:
///     Number of sample sizes.
#[pyfunction]
#[pyo3(name = "log_sample_sizes", signature = (start=0.0, stop=4.0, num=50))]
pub fn log_sample_sizes_py(start: f64, stop: f64, num: usize) -> PyResult<Vec<usize>> {
    Ok(SweepConfig::try_new(start, stop, num)?.sample_sizes()?)
}

/// Text table of partial sums and relative errors.
///
/// Parameters
/// ----------
/// n_values:
///     Positive sample sizes, defaults to ``[10, 100, 1000, 10000]``.
#[pyfunction]
#[pyo3(name = "format_table", signature = (n_values=None))]
pub fn format_table_py(n_values: Option<Vec<i64>>) -> PyResult<String> {
    match n_values {
        None => Ok(prelude::default_report()?),
        Some(n_values) => {
            let analysis = prelude::analyze(&checked_sizes_py(n_values)?)?;
            Ok(analysis.to_string())
        }
    }
}
