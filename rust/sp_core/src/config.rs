//! Analyzer configuration.
//!
//! Every sampling constant of the preview lives here. `Default` reproduces
//! the dashboard's behavior exactly; hosts may override individual fields.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Greeks;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Half-width of the max profit/loss sampling range, as a fraction of price.
    pub sample_range_pct: f64,
    /// Distance between max profit/loss samples, in price units.
    pub sample_step: f64,
    /// Half-width of the chart range, as a fraction of price.
    pub chart_range_pct: f64,
    pub chart_points: usize,
    pub price_labels: usize,
    /// Relative price moves evaluated as scenarios.
    pub scenario_moves: Vec<f64>,
    pub scenario_kernel_scale: f64,
    pub probability_cap: f64,
    /// Distance beyond the furthest strike for a one-sided profit zone.
    pub profit_zone_padding: f64,
    /// Net credit is divided by this before shifting breakevens off a strike.
    pub breakeven_divisor: f64,
    /// Per-contract gamma/theta/vega used for every leg. `delta` is ignored.
    pub placeholder_greeks: Greeks,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_range_pct: 0.5,
            sample_step: 5.0,
            chart_range_pct: 0.4,
            chart_points: 101,
            price_labels: 7,
            scenario_moves: vec![-0.2, -0.1, 0.0, 0.1, 0.2],
            scenario_kernel_scale: 20.0,
            probability_cap: 100.0,
            profit_zone_padding: 50.0,
            breakeven_divisor: 100.0,
            placeholder_greeks: Greeks::new(0.0, 0.01, -0.05, 0.1),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a (possibly partial) JSON object; missing keys keep defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: AnalyzerConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sample_step", self.sample_step)?;
        positive("breakeven_divisor", self.breakeven_divisor)?;
        if self.sample_range_pct < 0.0 {
            return Err(ConfigError::NotPositive { field: "sample_range_pct", value: self.sample_range_pct });
        }
        if self.chart_range_pct < 0.0 {
            return Err(ConfigError::NotPositive { field: "chart_range_pct", value: self.chart_range_pct });
        }
        if self.chart_points < 2 {
            return Err(ConfigError::TooFew { field: "chart_points", min: 2, got: self.chart_points });
        }
        if self.price_labels < 2 {
            return Err(ConfigError::TooFew { field: "price_labels", min: 2, got: self.price_labels });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = AnalyzerConfig::from_json(r#"{"sample_step": 1.0, "chart_points": 51}"#).unwrap();
        assert_eq!(cfg.sample_step, 1.0);
        assert_eq!(cfg.chart_points, 51);
        assert_eq!(cfg.scenario_moves, vec![-0.2, -0.1, 0.0, 0.1, 0.2]);
        assert_eq!(cfg.breakeven_divisor, 100.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(AnalyzerConfig::from_json("{}").unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn rejects_zero_step() {
        let err = AnalyzerConfig::from_json(r#"{"sample_step": 0.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "sample_step", .. }));
    }

    #[test]
    fn rejects_single_chart_point() {
        let err = AnalyzerConfig::from_json(r#"{"chart_points": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::TooFew { field: "chart_points", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(AnalyzerConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
