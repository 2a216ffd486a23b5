//! PyO3 bindings for the strategy analyzer and chart data.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3_polars::PyDataFrame;

use sp_core::frame::{chart_frame, scenario_frame as build_scenario_frame};
use sp_core::Analyzer;

use crate::arrow_bridge::frame_result;
use crate::convert::{analysis_dict, parse_config, parse_legs};

/// Risk/reward analysis of a set of legs as a dict.
#[pyfunction]
#[pyo3(signature = (legs, current_price, dte, iv, config = None))]
pub fn analyze(
    py: Python<'_>,
    legs: Vec<Bound<'_, PyDict>>,
    current_price: f64,
    dte: u32,
    iv: f64,
    config: Option<&Bound<'_, PyDict>>,
) -> PyResult<PyObject> {
    let legs = parse_legs(&legs)?;
    let analyzer = Analyzer::new(parse_config(config)?);
    let analysis = analyzer.analyze(&legs, current_price, dte, iv);
    Ok(analysis_dict(py, &analysis)?.into())
}

/// Chart points as a (price, pl) DataFrame plus a dict of axis data.
#[pyfunction]
#[pyo3(signature = (legs, current_price, selected_time, dte, iv, config = None))]
pub fn generate_chart(
    py: Python<'_>,
    legs: Vec<Bound<'_, PyDict>>,
    current_price: f64,
    selected_time: u32,
    dte: u32,
    iv: f64,
    config: Option<&Bound<'_, PyDict>>,
) -> PyResult<PyObject> {
    let legs = parse_legs(&legs)?;
    let analyzer = Analyzer::new(parse_config(config)?);
    let chart = analyzer.generate_chart(&legs, current_price, selected_time, dte, iv);

    let axes = PyDict::new(py);
    axes.set_item("min_price", chart.min_price)?;
    axes.set_item("max_price", chart.max_price)?;
    axes.set_item("min_pl", chart.min_pl)?;
    axes.set_item("max_pl", chart.max_pl)?;
    axes.set_item("zero_y", chart.zero_y)?;
    axes.set_item("price_labels", chart.price_labels.clone())?;

    let points = frame_result(chart_frame(&chart))?;
    let result_tuple = pyo3::types::PyTuple::new(py, [
        points.into_pyobject(py)?.into_any(),
        axes.into_any(),
    ])?;
    Ok(result_tuple.into())
}

/// Scenario table (price, move_pct, profit, profit_percent, probability).
#[pyfunction]
#[pyo3(signature = (legs, current_price, dte, iv))]
pub fn scenario_frame(
    legs: Vec<Bound<'_, PyDict>>,
    current_price: f64,
    dte: u32,
    iv: f64,
) -> PyResult<PyDataFrame> {
    let legs = parse_legs(&legs)?;
    let analysis = sp_core::analyze(&legs, current_price, dte, iv);
    frame_result(build_scenario_frame(&analysis.scenarios, current_price))
}
