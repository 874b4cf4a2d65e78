//! General purpose utility functions.

use itertools::Itertools;
use pyo3::prelude::*;
use series_core::prelude::{SampleSize, SeriesResult};

/// Polymorphic support for a single value or a vector of values.
#[derive(Debug, FromPyObject, IntoPyObject)]
pub enum MaybeVec<T> {
    /// A single value of type T.
    Single(T),

    /// A vector of values of type T.
    Multiple(Vec<T>),
}

impl<T> From<MaybeVec<T>> for Vec<T> {
    fn from(maybe_vec: MaybeVec<T>) -> Self {
        match maybe_vec {
            MaybeVec::Single(value) => vec![value],
            MaybeVec::Multiple(vec) => vec,
        }
    }
}

impl<T: Clone> From<Vec<T>> for MaybeVec<T> {
    fn from(maybe_vec: Vec<T>) -> Self {
        if maybe_vec.len() == 1 {
            MaybeVec::Single(maybe_vec[0].clone())
        } else {
            MaybeVec::Multiple(maybe_vec)
        }
    }
}

/// Validate python integers as sample sizes.
///
/// Raises a ``ValueError`` on the first value which is zero or negative.
pub fn sample_sizes_from_py(values: Vec<i64>) -> PyResult<Vec<SampleSize>> {
    let sizes = values
        .into_iter()
        .map(|n| SampleSize::try_from(n))
        .collect::<SeriesResult<Vec<_>>>()?;
    Ok(sizes)
}

/// Validate python integers as sample sizes, returning them as plain integers.
pub fn checked_sizes_py(values: Vec<i64>) -> PyResult<Vec<usize>> {
    Ok(sample_sizes_from_py(values)?
        .into_iter()
        .map(usize::from)
        .collect_vec())
}
