use pyo3::prelude::*;

mod arrow_bridge;
mod convert;
mod py_analysis;
mod py_entries;
mod py_exits;
mod py_sweep;
mod py_validation;

#[pymodule]
fn _sp_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_analysis::analyze, m)?)?;
    m.add_function(wrap_pyfunction!(py_analysis::generate_chart, m)?)?;
    m.add_function(wrap_pyfunction!(py_analysis::scenario_frame, m)?)?;
    m.add_function(wrap_pyfunction!(py_sweep::parallel_sweep, m)?)?;
    m.add_function(wrap_pyfunction!(py_entries::plan_entry, m)?)?;
    m.add_function(wrap_pyfunction!(py_exits::compute_exit_mask, m)?)?;
    m.add_function(wrap_pyfunction!(py_validation::validate_configuration, m)?)?;
    Ok(())
}
