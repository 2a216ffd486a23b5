/// Core domain types for composing and previewing multi-leg option strategies.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
}

impl Action {
    /// Sign of the premium cash flow: selling collects, buying pays.
    pub fn sign(self) -> f64 {
        match self {
            Action::Buy => -1.0,
            Action::Sell => 1.0,
        }
    }

    /// Sign of the exposure to the option's value (intrinsic and Greeks).
    pub fn position_sign(self) -> f64 {
        -self.sign()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
        }
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "long" => Ok(Action::Buy),
            "sell" | "short" => Ok(Action::Sell),
            _ => Err(ParseError::Action(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "CALL",
            OptionType::Put => "PUT",
        }
    }

    /// Value at expiration per unit of underlying.
    pub fn intrinsic(self, strike: f64, price: f64) -> f64 {
        match self {
            OptionType::Call => (price - strike).max(0.0),
            OptionType::Put => (strike - price).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(ParseError::OptionType(s.to_string())),
        }
    }
}

/// One constituent of a multi-leg position.
///
/// `price` is the per-share premium and `quantity` the number of contracts.
/// Leg order only matters for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionLeg {
    pub action: Action,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub strike: f64,
    pub quantity: u32,
    pub price: f64,
    pub delta: f64,
    pub expiration: NaiveDate,
}

impl OptionLeg {
    pub fn new(
        action: Action,
        option_type: OptionType,
        strike: f64,
        quantity: u32,
        price: f64,
        delta: f64,
        expiration: NaiveDate,
    ) -> Self {
        Self { action, option_type, strike, quantity, price, delta, expiration }
    }

    /// Premium flow of this leg: positive when collected.
    pub fn premium(&self) -> f64 {
        self.action.sign() * self.price * self.quantity as f64
    }

    /// Signed intrinsic contribution at an underlying price.
    pub fn intrinsic_pl(&self, price: f64) -> f64 {
        self.action.position_sign() * self.option_type.intrinsic(self.strike, price) * self.quantity as f64
    }
}

/// Aggregated Greeks for a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64) -> Self {
        Self { delta, gamma, theta, vega }
    }

    pub fn scale(self, s: f64) -> Self {
        Self {
            delta: self.delta * s,
            gamma: self.gamma * s,
            theta: self.theta * s,
            vega: self.vega * s,
        }
    }
}

impl std::ops::Add for Greeks {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            theta: self.theta + rhs.theta,
            vega: self.vega + rhs.vega,
        }
    }
}

impl std::ops::AddAssign for Greeks {
    fn add_assign(&mut self, rhs: Self) {
        self.delta += rhs.delta;
        self.gamma += rhs.gamma;
        self.theta += rhs.theta;
        self.vega += rhs.vega;
    }
}

/// Underlying price interval where the position is expected to profit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitZone {
    pub lower: f64,
    pub upper: f64,
}

impl ProfitZone {
    pub fn is_empty(&self) -> bool {
        self.lower >= self.upper
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScenario {
    pub price: f64,
    pub profit: f64,
    pub profit_percent: f64,
    /// Relative likelihood weight. Not normalized across scenarios.
    pub probability: f64,
}

/// Risk/reward profile of a strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyAnalysis {
    pub max_profit: f64,
    pub max_loss: f64,
    pub breakevens: Vec<f64>,
    /// Heuristic score built from unnormalized scenario weights.
    pub probability_of_profit: f64,
    pub risk_reward_ratio: f64,
    pub margin_requirement: f64,
    pub profit_zone: ProfitZone,
    pub greeks: Greeks,
    pub scenarios: Vec<PriceScenario>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub price: f64,
    pub pl: f64,
}

/// Sampled P&L curve plus the axis data a line chart needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub points: Vec<ChartPoint>,
    pub min_price: f64,
    pub max_price: f64,
    pub min_pl: f64,
    pub max_pl: f64,
    /// Zero line position in percent of chart height, measured from the top.
    pub zero_y: f64,
    pub price_labels: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()
    }

    #[test]
    fn action_sign() {
        assert_eq!(Action::Buy.sign(), -1.0);
        assert_eq!(Action::Sell.sign(), 1.0);
        assert_eq!(Action::Buy.position_sign(), 1.0);
        assert_eq!(Action::Sell.position_sign(), -1.0);
    }

    #[test]
    fn parse_labels() {
        assert_eq!("SELL".parse::<Action>().unwrap(), Action::Sell);
        assert_eq!(" long ".parse::<Action>().unwrap(), Action::Buy);
        assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!("hold".parse::<Action>().is_err());
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[test]
    fn intrinsic_values() {
        assert_eq!(OptionType::Call.intrinsic(100.0, 110.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(100.0, 90.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(100.0, 90.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(100.0, 110.0), 0.0);
    }

    #[test]
    fn leg_premium_and_intrinsic() {
        let short_put = OptionLeg::new(Action::Sell, OptionType::Put, 440.0, 2, 2.0, -0.3, expiry());
        assert!((short_put.premium() - 4.0).abs() < 1e-10);
        assert!((short_put.intrinsic_pl(430.0) + 20.0).abs() < 1e-10);

        let long_call = OptionLeg::new(Action::Buy, OptionType::Call, 460.0, 1, 1.5, 0.25, expiry());
        assert!((long_call.premium() + 1.5).abs() < 1e-10);
        assert!((long_call.intrinsic_pl(470.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn leg_json_shape() {
        let leg = OptionLeg::new(Action::Sell, OptionType::Put, 440.0, 1, 2.0, -0.3, expiry());
        let json = serde_json::to_value(&leg).unwrap();
        assert_eq!(json["action"], "SELL");
        assert_eq!(json["type"], "PUT");
        assert_eq!(json["expiration"], "2025-03-21");
    }

    #[test]
    fn greeks_add() {
        let a = Greeks::new(1.0, 2.0, 3.0, 4.0);
        let b = Greeks::new(0.5, 0.5, 0.5, 0.5);
        let c = a + b;
        assert!((c.delta - 1.5).abs() < 1e-10);
        assert!((c.gamma - 2.5).abs() < 1e-10);
    }

    #[test]
    fn greeks_scale() {
        let g = Greeks::new(1.0, 2.0, 3.0, 4.0).scale(2.0);
        assert!((g.delta - 2.0).abs() < 1e-10);
        assert!((g.vega - 8.0).abs() < 1e-10);
    }

    #[test]
    fn profit_zone_empty() {
        assert!(ProfitZone::default().is_empty());
        assert!(!ProfitZone { lower: 430.0, upper: 470.0 }.is_empty());
    }
}
