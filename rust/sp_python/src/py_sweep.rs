//! Parallel scenario sweep using Rayon.
//!
//! One set of legs is analyzed at many (price, dte, iv) points. Legs are
//! parsed once on the GIL thread; the analyses run on a scoped pool with
//! the GIL released.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use rayon::prelude::*;

use sp_core::types::{OptionLeg, StrategyAnalysis};
use sp_core::Analyzer;

use crate::convert::{analysis_dict, get_f64, get_str, get_u32, parse_legs};

struct SweepPoint {
    label: String,
    current_price: f64,
    dte: u32,
    iv: f64,
}

struct SweepResult {
    label: String,
    analysis: StrategyAnalysis,
    elapsed_us: u128,
    error: Option<String>,
}

fn parse_point(dict: &Bound<'_, PyDict>) -> PyResult<SweepPoint> {
    Ok(SweepPoint {
        label: get_str(dict, "label", "")?,
        current_price: get_f64(dict, "current_price", 0.0)?,
        dte: get_u32(dict, "dte", 0)?,
        iv: get_f64(dict, "iv", 0.0)?,
    })
}

fn run_point(analyzer: &Analyzer, legs: &[OptionLeg], point: &SweepPoint) -> SweepResult {
    let start = std::time::Instant::now();
    let error = if point.current_price.is_finite() && point.current_price > 0.0 {
        None
    } else {
        Some(format!("current_price must be positive, got {}", point.current_price))
    };
    let analysis = match error {
        None => analyzer.analyze(legs, point.current_price, point.dte, point.iv),
        Some(_) => StrategyAnalysis::default(),
    };
    SweepResult {
        label: point.label.clone(),
        analysis,
        elapsed_us: start.elapsed().as_micros(),
        error,
    }
}

/// Analyze `legs` at every grid point in parallel.
///
/// Args:
///     legs: Leg dicts shared by every point
///     grid: List of dicts with keys "label", "current_price", "dte", "iv"
///     n_workers: Number of Rayon threads (default: all cores)
///
/// Returns:
///     List of analysis dicts, in grid order, each with "label",
///     "elapsed_us" and "error" added.
#[pyfunction]
#[pyo3(signature = (legs, grid, n_workers = None))]
pub fn parallel_sweep(
    py: Python<'_>,
    legs: Vec<Bound<'_, PyDict>>,
    grid: &Bound<'_, PyList>,
    n_workers: Option<usize>,
) -> PyResult<PyObject> {
    let legs = parse_legs(&legs)?;
    let points: Vec<SweepPoint> = grid
        .iter()
        .map(|item| {
            let dict = item.downcast::<PyDict>().map_err(|e| {
                pyo3::exceptions::PyTypeError::new_err(format!("expected dict: {e}"))
            })?;
            parse_point(dict)
        })
        .collect::<PyResult<Vec<_>>>()?;

    let analyzer = Analyzer::default();
    let results: Vec<SweepResult> = py.allow_threads(|| {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_workers.unwrap_or(0))
            .build()
            .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))?;
        Ok::<_, PyErr>(pool.install(|| {
            points.par_iter().map(|p| run_point(&analyzer, &legs, p)).collect()
        }))
    })?;
    tracing::debug!(points = results.len(), "sweep finished");

    let py_results = PyList::empty(py);
    for r in &results {
        let dict = analysis_dict(py, &r.analysis)?;
        dict.set_item("label", &r.label)?;
        dict.set_item("elapsed_us", r.elapsed_us)?;
        dict.set_item("error", &r.error)?;
        py_results.append(dict)?;
    }
    Ok(py_results.into())
}
