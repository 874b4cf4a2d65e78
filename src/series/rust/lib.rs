//! Python bindings to series_core.
//!
//! Exposes the three partial sums and the relative error analysis, plotting is left
//! to the python side.
use pyo3::prelude::*;

pub mod analysis;
pub mod sums;
pub mod utils;

/// Rounding error comparison of three equivalent partial sums.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<analysis::PySeriesRecord>()?;

    m.add_function(wrap_pyfunction!(sums::sum_s1_py, m)?)?;
    m.add_function(wrap_pyfunction!(sums::sum_s2_py, m)?)?;
    m.add_function(wrap_pyfunction!(sums::sum_s3_py, m)?)?;

    m.add_function(wrap_pyfunction!(analysis::analyze_py, m)?)?;
    m.add_function(wrap_pyfunction!(analysis::relative_errors_py, m)?)?;
    m.add_function(wrap_pyfunction!(analysis::log_sample_sizes_py, m)?)?;
    m.add_function(wrap_pyfunction!(analysis::format_table_py, m)?)?;

    Ok(())
}
