//! Tabular exports of chart, scenario and leg data as Polars DataFrames.

use polars::prelude::*;

use crate::types::{ChartData, OptionLeg, PriceScenario};

pub fn chart_frame(chart: &ChartData) -> PolarsResult<DataFrame> {
    let prices: Vec<f64> = chart.points.iter().map(|p| p.price).collect();
    let pls: Vec<f64> = chart.points.iter().map(|p| p.pl).collect();
    DataFrame::new(vec![
        Column::new("price".into(), prices),
        Column::new("pl".into(), pls),
    ])
}

/// Scenario table with each price's move relative to `current_price`.
pub fn scenario_frame(scenarios: &[PriceScenario], current_price: f64) -> PolarsResult<DataFrame> {
    let n = scenarios.len();
    let mut prices = Vec::with_capacity(n);
    let mut profits = Vec::with_capacity(n);
    let mut profit_pcts = Vec::with_capacity(n);
    let mut probabilities = Vec::with_capacity(n);
    let mut moves = Vec::with_capacity(n);

    for s in scenarios {
        prices.push(s.price);
        profits.push(s.profit);
        profit_pcts.push(s.profit_percent);
        probabilities.push(s.probability);
        let move_pct = if current_price != 0.0 { (s.price - current_price) / current_price * 100.0 } else { 0.0 };
        moves.push(move_pct);
    }

    DataFrame::new(vec![
        Column::new("price".into(), prices),
        Column::new("move_pct".into(), moves),
        Column::new("profit".into(), profits),
        Column::new("profit_percent".into(), profit_pcts),
        Column::new("probability".into(), probabilities),
    ])
}

pub fn legs_frame(legs: &[OptionLeg]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("action".into(), legs.iter().map(|l| l.action.as_str()).collect::<Vec<_>>()),
        Column::new("type".into(), legs.iter().map(|l| l.option_type.as_str()).collect::<Vec<_>>()),
        Column::new("strike".into(), legs.iter().map(|l| l.strike).collect::<Vec<_>>()),
        Column::new("quantity".into(), legs.iter().map(|l| l.quantity).collect::<Vec<_>>()),
        Column::new("price".into(), legs.iter().map(|l| l.price).collect::<Vec<_>>()),
        Column::new("delta".into(), legs.iter().map(|l| l.delta).collect::<Vec<_>>()),
        Column::new(
            "expiration".into(),
            legs.iter().map(|l| l.expiration.format("%Y-%m-%d").to_string()).collect::<Vec<_>>(),
        ),
    ])
}
