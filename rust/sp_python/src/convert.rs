//! Dict <-> core type conversions shared by the bindings.

use chrono::NaiveDate;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use sp_core::error::ParseError;
use sp_core::types::{Action, Greeks, OptionLeg, OptionType, PriceScenario, StrategyAnalysis};
use sp_core::AnalyzerConfig;

pub fn value_err(e: impl std::fmt::Display) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(e.to_string())
}

pub fn get_str(d: &Bound<'_, PyDict>, key: &str, default: &str) -> PyResult<String> {
    Ok(d.get_item(key)?.map(|v| v.extract::<String>()).transpose()?.unwrap_or_else(|| default.into()))
}
pub fn get_f64(d: &Bound<'_, PyDict>, key: &str, default: f64) -> PyResult<f64> {
    Ok(d.get_item(key)?.map(|v| v.extract::<f64>()).transpose()?.unwrap_or(default))
}
pub fn get_u32(d: &Bound<'_, PyDict>, key: &str, default: u32) -> PyResult<u32> {
    Ok(d.get_item(key)?.map(|v| v.extract::<u32>()).transpose()?.unwrap_or(default))
}
pub fn get_usize(d: &Bound<'_, PyDict>, key: &str, default: usize) -> PyResult<usize> {
    Ok(d.get_item(key)?.map(|v| v.extract::<usize>()).transpose()?.unwrap_or(default))
}

fn require<'py>(d: &Bound<'py, PyDict>, key: &str) -> PyResult<Bound<'py, PyAny>> {
    d.get_item(key)?
        .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(key.to_string()))
}

/// Leg dict: `{action, type, strike, quantity, price, delta, expiration}`.
///
/// `quantity` defaults to 1 and `price`/`delta` to 0.
pub fn parse_leg(d: &Bound<'_, PyDict>) -> PyResult<OptionLeg> {
    let action: Action = require(d, "action")?.extract::<String>()?.parse().map_err(value_err)?;
    let option_type: OptionType = require(d, "type")?.extract::<String>()?.parse().map_err(value_err)?;
    let strike = require(d, "strike")?.extract::<f64>()?;
    let raw_exp = require(d, "expiration")?.extract::<String>()?;
    let expiration = NaiveDate::parse_from_str(raw_exp.trim(), "%Y-%m-%d")
        .map_err(|_| value_err(ParseError::Expiration(raw_exp.clone())))?;

    Ok(OptionLeg::new(
        action,
        option_type,
        strike,
        get_u32(d, "quantity", 1)?,
        get_f64(d, "price", 0.0)?,
        get_f64(d, "delta", 0.0)?,
        expiration,
    ))
}

pub fn parse_legs(legs: &[Bound<'_, PyDict>]) -> PyResult<Vec<OptionLeg>> {
    legs.iter().map(parse_leg).collect()
}

/// Analyzer config from an optional dict of overrides.
pub fn parse_config(config: Option<&Bound<'_, PyDict>>) -> PyResult<AnalyzerConfig> {
    let mut cfg = AnalyzerConfig::default();
    let Some(d) = config else { return Ok(cfg) };

    cfg.sample_range_pct = get_f64(d, "sample_range_pct", cfg.sample_range_pct)?;
    cfg.sample_step = get_f64(d, "sample_step", cfg.sample_step)?;
    cfg.chart_range_pct = get_f64(d, "chart_range_pct", cfg.chart_range_pct)?;
    cfg.chart_points = get_usize(d, "chart_points", cfg.chart_points)?;
    cfg.price_labels = get_usize(d, "price_labels", cfg.price_labels)?;
    cfg.scenario_kernel_scale = get_f64(d, "scenario_kernel_scale", cfg.scenario_kernel_scale)?;
    cfg.probability_cap = get_f64(d, "probability_cap", cfg.probability_cap)?;
    cfg.profit_zone_padding = get_f64(d, "profit_zone_padding", cfg.profit_zone_padding)?;
    cfg.breakeven_divisor = get_f64(d, "breakeven_divisor", cfg.breakeven_divisor)?;
    if let Some(moves) = d.get_item("scenario_moves")? {
        cfg.scenario_moves = moves.extract::<Vec<f64>>()?;
    }
    if let Some(g) = d.get_item("placeholder_greeks")? {
        let g = g.downcast::<PyDict>().map_err(|e| pyo3::exceptions::PyTypeError::new_err(e.to_string()))?;
        let base = cfg.placeholder_greeks;
        cfg.placeholder_greeks = Greeks::new(
            get_f64(g, "delta", base.delta)?,
            get_f64(g, "gamma", base.gamma)?,
            get_f64(g, "theta", base.theta)?,
            get_f64(g, "vega", base.vega)?,
        );
    }

    cfg.validate().map_err(value_err)?;
    Ok(cfg)
}

pub fn greeks_dict<'py>(py: Python<'py>, g: &Greeks) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("delta", g.delta)?;
    dict.set_item("gamma", g.gamma)?;
    dict.set_item("theta", g.theta)?;
    dict.set_item("vega", g.vega)?;
    Ok(dict)
}

fn scenario_dict<'py>(py: Python<'py>, s: &PriceScenario) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("price", s.price)?;
    dict.set_item("profit", s.profit)?;
    dict.set_item("profit_percent", s.profit_percent)?;
    dict.set_item("probability", s.probability)?;
    Ok(dict)
}

pub fn analysis_dict<'py>(py: Python<'py>, a: &StrategyAnalysis) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("max_profit", a.max_profit)?;
    dict.set_item("max_loss", a.max_loss)?;
    dict.set_item("breakevens", a.breakevens.clone())?;
    dict.set_item("probability_of_profit", a.probability_of_profit)?;
    dict.set_item("risk_reward_ratio", a.risk_reward_ratio)?;
    dict.set_item("margin_requirement", a.margin_requirement)?;

    let zone = PyDict::new(py);
    zone.set_item("lower", a.profit_zone.lower)?;
    zone.set_item("upper", a.profit_zone.upper)?;
    dict.set_item("profit_zone", zone)?;
    dict.set_item("greeks", greeks_dict(py, &a.greeks)?)?;

    let scenarios = PyList::empty(py);
    for s in &a.scenarios {
        scenarios.append(scenario_dict(py, s)?)?;
    }
    dict.set_item("scenarios", scenarios)?;
    Ok(dict)
}
