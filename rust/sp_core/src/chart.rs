//! P&L curve sampling for the payoff chart.

use crate::analysis::Analyzer;
use crate::payoff::{net_credit, payoff_at_expiration, payoff_before_expiration};
use crate::types::{ChartData, ChartPoint, OptionLeg};

/// Chart data with the default configuration.
///
/// `selected_time` is the number of days before expiration to evaluate at;
/// 0 means at expiration.
pub fn generate_chart(
    legs: &[OptionLeg],
    current_price: f64,
    selected_time: u32,
    dte: u32,
    iv: f64,
) -> ChartData {
    Analyzer::default().generate_chart(legs, current_price, selected_time, dte, iv)
}

impl Analyzer {
    /// Evenly spaced, ascending price points with their P&L, plus axis bounds.
    ///
    /// `iv` is unused by the time-decay approximation.
    pub fn generate_chart(
        &self,
        legs: &[OptionLeg],
        current_price: f64,
        selected_time: u32,
        dte: u32,
        _iv: f64,
    ) -> ChartData {
        let half_range = current_price * self.config.chart_range_pct;
        let min_price = current_price - half_range;
        let max_price = current_price + half_range;
        let nc = net_credit(legs);

        let segments = self.config.chart_points.max(2) - 1;
        let step = (max_price - min_price) / segments as f64;

        let points: Vec<ChartPoint> = (0..=segments)
            .map(|i| {
                let price = if i == segments { max_price } else { min_price + i as f64 * step };
                let pl = if selected_time == 0 {
                    payoff_at_expiration(legs, price, nc)
                } else {
                    payoff_before_expiration(legs, price, nc, selected_time as f64, dte)
                };
                ChartPoint { price, pl }
            })
            .collect();

        let min_pl = points.iter().map(|p| p.pl).fold(f64::INFINITY, f64::min);
        let max_pl = points.iter().map(|p| p.pl).fold(f64::NEG_INFINITY, f64::max);
        let zero_y = if max_pl > min_pl { max_pl / (max_pl - min_pl) * 100.0 } else { 50.0 };

        let label_segments = self.config.price_labels.max(2) - 1;
        let price_labels = (0..=label_segments)
            .map(|i| min_price + (i as f64 / label_segments as f64) * (max_price - min_price))
            .collect();

        ChartData {
            points,
            min_price,
            max_price,
            min_pl,
            max_pl,
            zero_y,
            price_labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, OptionType};
    use chrono::NaiveDate;

    fn put_credit_spread() -> Vec<OptionLeg> {
        let exp = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
        vec![
            OptionLeg::new(Action::Sell, OptionType::Put, 440.0, 1, 2.0, -0.3, exp),
            OptionLeg::new(Action::Buy, OptionType::Put, 435.0, 1, 0.5, -0.2, exp),
        ]
    }

    #[test]
    fn chart_has_101_ascending_points() {
        let c = generate_chart(&put_credit_spread(), 450.0, 0, 30, 0.25);
        assert_eq!(c.points.len(), 101);
        assert!((c.min_price - 270.0).abs() < 1e-9);
        assert!((c.max_price - 630.0).abs() < 1e-9);
        assert_eq!(c.points[0].price, c.min_price);
        assert_eq!(c.points[100].price, c.max_price);
        assert!(c.points.windows(2).all(|w| w[0].price < w[1].price));
    }

    #[test]
    fn chart_bounds_at_expiration() {
        let c = generate_chart(&put_credit_spread(), 450.0, 0, 30, 0.25);
        assert!((c.min_pl + 3.5).abs() < 1e-9);
        assert!((c.max_pl - 1.5).abs() < 1e-9);
        // 1.5 / 5.0 of the height from the top
        assert!((c.zero_y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn chart_before_expiration_uses_decay() {
        let legs = put_credit_spread();
        let c = generate_chart(&legs, 450.0, 15, 30, 0.25);
        let last = c.points.last().unwrap();
        // Above both strikes only half the credit is left.
        assert!((last.pl - 0.75).abs() < 1e-9);
    }

    #[test]
    fn price_labels_span_range() {
        let c = generate_chart(&put_credit_spread(), 450.0, 0, 30, 0.25);
        assert_eq!(c.price_labels.len(), 7);
        assert!((c.price_labels[0] - 270.0).abs() < 1e-9);
        assert!((c.price_labels[3] - 450.0).abs() < 1e-9);
        assert!((c.price_labels[6] - 630.0).abs() < 1e-9);
    }

    #[test]
    fn flat_curve_centers_zero_line() {
        let c = generate_chart(&[], 450.0, 0, 30, 0.25);
        assert_eq!(c.points.len(), 101);
        assert!(c.points.iter().all(|p| p.pl == 0.0));
        assert_eq!(c.zero_y, 50.0);
    }

    #[test]
    fn chart_is_deterministic() {
        let legs = put_credit_spread();
        assert_eq!(
            generate_chart(&legs, 447.25, 7, 30, 0.25),
            generate_chart(&legs, 447.25, 7, 30, 0.25)
        );
    }
}
