//! PyO3 bindings for entry sizing.

use pyo3::prelude::*;

use sp_core::entries::{self, LegQuote};
use sp_core::error::EntryError;

/// Contracts per leg for a fresh entry.
///
/// `legs` are `(price, size_ratio)` pairs; a `None` price means no quote.
/// Raises ValueError when the entry must be skipped.
#[pyfunction]
#[pyo3(signature = (cash, investment_pct, legs))]
pub fn plan_entry(cash: f64, investment_pct: f64, legs: Vec<(Option<f64>, u32)>) -> PyResult<Vec<u32>> {
    let quotes: Vec<LegQuote> = legs
        .into_iter()
        .map(|(price, size_ratio)| LegQuote { price, size_ratio })
        .collect();

    entries::plan_entry(cash, investment_pct, &quotes)
        .map_err(|e: EntryError| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}
