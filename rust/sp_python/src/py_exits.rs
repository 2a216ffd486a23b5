//! PyO3 bindings for batch profit-target / stop-loss checks.

use polars::prelude::{NamedFrom, Series};
use pyo3::prelude::*;

use sp_core::exits;

/// Exit flags for single-leg positions.
///
/// `quantity` is signed (negative = short); returns are directional, so a
/// short whose price fell counts as a gain.
#[pyfunction]
#[pyo3(signature = (quantity, entry_price, current_price, profit_pct = None, loss_pct = None))]
pub fn compute_exit_mask(
    quantity: Vec<i64>,
    entry_price: Vec<f64>,
    current_price: Vec<f64>,
    profit_pct: Option<f64>,
    loss_pct: Option<f64>,
) -> PyResult<Vec<bool>> {
    if entry_price.len() != quantity.len() || current_price.len() != quantity.len() {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "column lengths differ: quantity {}, entry_price {}, current_price {}",
            quantity.len(),
            entry_price.len(),
            current_price.len()
        )));
    }
    let quantities = Series::new("quantity".into(), &quantity);
    let entries = Series::new("entry_price".into(), &entry_price);
    let currents = Series::new("current_price".into(), &current_price);

    let mask = exits::threshold_exit_mask(&quantities, &entries, &currents, profit_pct, loss_pct)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))?;

    Ok(mask.into_no_null_iter().collect())
}
