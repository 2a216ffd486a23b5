//! Polars frames handed to Python through pyo3-polars.

use polars::prelude::{DataFrame, PolarsResult};
use pyo3::prelude::*;
use pyo3_polars::PyDataFrame;

pub fn polars_to_py(df: DataFrame) -> PyDataFrame {
    PyDataFrame(df)
}

/// Map a frame build result into a Python-ready frame.
pub fn frame_result(df: PolarsResult<DataFrame>) -> PyResult<PyDataFrame> {
    df.map(polars_to_py)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}
