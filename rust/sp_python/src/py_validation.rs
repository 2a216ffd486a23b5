//! PyO3 bindings for bot configuration validation.

use chrono::NaiveTime;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use sp_core::validation::{self, BotConfig, EntryWindow, Finding, MarketSnapshot};

use crate::convert::{get_f64, get_str, get_u32, parse_legs, value_err};

fn parse_time(raw: &str) -> PyResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
        .map_err(|_| value_err(format!("invalid time {raw:?} (expected HH:MM)")))
}

fn parse_bot(d: &Bound<'_, PyDict>) -> PyResult<BotConfig> {
    let legs: Vec<Bound<'_, PyDict>> = d
        .get_item("legs")?
        .map(|v| v.extract::<Vec<Bound<'_, PyDict>>>())
        .transpose()?
        .unwrap_or_default();

    let start = get_str(d, "entry_start", "")?;
    let end = get_str(d, "entry_end", "")?;
    let entry_window = if start.is_empty() || end.is_empty() {
        None
    } else {
        Some(EntryWindow { start: parse_time(&start)?, end: parse_time(&end)? })
    };

    Ok(BotConfig {
        name: get_str(d, "name", "")?,
        trading_account: get_str(d, "trading_account", "")?,
        underlying_symbol: get_str(d, "underlying_symbol", "")?,
        strategy: get_str(d, "strategy", "")?,
        legs: parse_legs(&legs)?,
        days_to_expiration: get_u32(d, "days_to_expiration", 0)?,
        quantity: get_u32(d, "quantity", 0)?,
        profit_target: get_f64(d, "profit_target", 0.0)?,
        stop_loss: get_f64(d, "stop_loss", 0.0)?,
        max_trades_per_day: get_u32(d, "max_trades_per_day", 0)?,
        entry_window,
    })
}

fn parse_market(d: &Bound<'_, PyDict>) -> PyResult<MarketSnapshot> {
    Ok(MarketSnapshot {
        current_price: get_f64(d, "current_price", 0.0)?,
        implied_volatility: get_f64(d, "implied_volatility", 0.0)?,
        volume: get_f64(d, "volume", 0.0)?,
        options_volume: get_f64(d, "options_volume", 0.0)?,
    })
}

fn findings_list<'py>(py: Python<'py>, findings: &[Finding]) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty(py);
    for f in findings {
        let dict = PyDict::new(py);
        dict.set_item("field", f.field)?;
        dict.set_item("code", f.code())?;
        dict.set_item("severity", f.severity.as_str())?;
        dict.set_item("category", f.category.as_str())?;
        dict.set_item("passed", f.outcome.passed)?;
        dict.set_item("message", &f.outcome.message)?;
        dict.set_item("suggestion", &f.outcome.suggestion)?;
        list.append(dict)?;
    }
    Ok(list)
}

/// Validate a bot config dict, optionally against a market snapshot dict.
///
/// Entry window times are "HH:MM" strings under "entry_start"/"entry_end".
#[pyfunction]
#[pyo3(signature = (config, market = None))]
pub fn validate_configuration(
    py: Python<'_>,
    config: &Bound<'_, PyDict>,
    market: Option<&Bound<'_, PyDict>>,
) -> PyResult<PyObject> {
    let bot = parse_bot(config)?;
    let market = market.map(parse_market).transpose()?;
    let report = validation::validate_configuration(&bot, market.as_ref());

    let dict = PyDict::new(py);
    dict.set_item("is_valid", report.is_valid())?;
    dict.set_item("score", report.score)?;
    dict.set_item("errors", findings_list(py, &report.errors)?)?;
    dict.set_item("warnings", findings_list(py, &report.warnings)?)?;
    dict.set_item("infos", findings_list(py, &report.infos)?)?;
    Ok(dict.into())
}
