//! Strategy analyzer: risk/reward profile of a leg set at expiration.
//!
//! Everything here is a pure function of (legs, price, dte, iv). Results are
//! sampling approximations:
//! - max profit/loss only look at sampled prices inside the configured range,
//!   so unlimited-risk positions report the worst sampled value;
//! - breakevens use a strike-offset heuristic that fits verticals and condors,
//!   not a root finder over the payoff;
//! - gamma/theta/vega are fixed per-contract placeholders;
//! - scenario probabilities are unnormalized kernel weights.

use tracing::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::payoff::{net_credit, payoff_at_expiration};
use crate::types::{Greeks, OptionLeg, PriceScenario, ProfitZone, StrategyAnalysis};

const DAYS_PER_YEAR: f64 = 365.0;

/// Upper bound on max profit/loss samples; wider ranges get a coarser step.
pub const MAX_SAMPLE_STEPS: usize = 100_000;

/// Analyze with the default configuration.
pub fn analyze(legs: &[OptionLeg], current_price: f64, dte: u32, iv: f64) -> StrategyAnalysis {
    Analyzer::default().analyze(legs, current_price, dte, iv)
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    pub config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Full risk/reward profile. Never fails: an empty leg set yields the
    /// all-zero analysis.
    ///
    /// `current_price`, `dte` and `iv` are not validated; callers supply sane
    /// market inputs.
    pub fn analyze(&self, legs: &[OptionLeg], current_price: f64, dte: u32, iv: f64) -> StrategyAnalysis {
        if legs.is_empty() {
            return StrategyAnalysis::default();
        }

        let nc = net_credit(legs);
        let breakevens = self.breakevens(legs, nc);
        let (max_profit, max_loss) = self.sampled_extremes(legs, current_price, nc);
        let profit_zone = self.profit_zone(legs, nc);
        let greeks = self.portfolio_greeks(legs);
        let scenarios = self.price_scenarios(legs, current_price, nc, iv, dte);

        let probability_of_profit = scenarios
            .iter()
            .filter(|s| s.profit > 0.0)
            .map(|s| s.probability)
            .sum();

        let risk_reward_ratio = if max_profit > 0.0 { max_loss.abs() / max_profit } else { 0.0 };

        debug!(
            legs = legs.len(),
            net_credit = nc,
            max_profit,
            max_loss,
            breakevens = breakevens.len(),
            "strategy analyzed"
        );

        StrategyAnalysis {
            max_profit,
            max_loss,
            breakevens,
            probability_of_profit,
            risk_reward_ratio,
            margin_requirement: max_loss.abs(),
            profit_zone,
            greeks,
            scenarios,
        }
    }

    /// Running max/min of the expiration payoff, seeded with the net credit.
    fn sampled_extremes(&self, legs: &[OptionLeg], current_price: f64, nc: f64) -> (f64, f64) {
        let half_range = current_price * self.config.sample_range_pct;
        let lo = current_price - half_range;
        let hi = current_price + half_range;
        let mut step = self.config.sample_step;

        let mut max_profit = nc;
        let mut max_loss = nc;
        if !(step > 0.0) || hi < lo {
            return (max_profit, max_loss);
        }

        // Index-based stepping so accumulated float error cannot drop the last sample.
        let mut steps = ((hi - lo) / step + 1e-9).floor() as usize;
        if steps > MAX_SAMPLE_STEPS {
            warn!(current_price, steps, "sampling range too wide, coarsening step");
            steps = MAX_SAMPLE_STEPS;
            step = (hi - lo) / MAX_SAMPLE_STEPS as f64;
        }
        for i in 0..=steps {
            let pl = payoff_at_expiration(legs, lo + i as f64 * step, nc);
            max_profit = max_profit.max(pl);
            max_loss = max_loss.min(pl);
        }
        (max_profit, max_loss)
    }

    /// Heuristic breakevens shifted off the outer strikes by the net credit.
    ///
    /// The credit is divided by `breakeven_divisor` (100) although payoffs use
    /// the credit unscaled. Kept as the dashboard computes it.
    pub fn breakevens(&self, legs: &[OptionLeg], nc: f64) -> Vec<f64> {
        if legs.len() < 2 {
            return Vec::new();
        }

        let mut strikes: Vec<f64> = legs.iter().map(|leg| leg.strike).collect();
        strikes.sort_by(|a, b| a.total_cmp(b));
        strikes.dedup();
        let lowest = strikes[0];
        let highest = strikes[strikes.len() - 1];
        let shift = nc / self.config.breakeven_divisor;

        let mut out = Vec::with_capacity(2);
        if nc > 0.0 {
            out.push(lowest + shift);
            if strikes.len() > 2 {
                out.push(highest - shift);
            }
        } else {
            out.push(lowest - shift);
            if strikes.len() > 2 {
                out.push(highest + shift);
            }
        }
        out.retain(|&be| be > 0.0);
        out
    }

    pub fn profit_zone(&self, legs: &[OptionLeg], nc: f64) -> ProfitZone {
        let breakevens = self.breakevens(legs, nc);
        match breakevens.as_slice() {
            [] => ProfitZone::default(),
            [be] => {
                let pad = self.config.profit_zone_padding;
                if nc > 0.0 {
                    let top = legs.iter().map(|l| l.strike).fold(f64::NEG_INFINITY, f64::max);
                    ProfitZone { lower: *be, upper: top + pad }
                } else {
                    let bottom = legs.iter().map(|l| l.strike).fold(f64::INFINITY, f64::min);
                    ProfitZone { lower: bottom - pad, upper: *be }
                }
            }
            many => ProfitZone {
                lower: many.iter().copied().fold(f64::INFINITY, f64::min),
                upper: many.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            },
        }
    }

    /// Delta from the legs; gamma/theta/vega from the placeholder constants.
    pub fn portfolio_greeks(&self, legs: &[OptionLeg]) -> Greeks {
        let per_contract = self.config.placeholder_greeks;
        let mut total = Greeks::default();
        for leg in legs {
            let weight = leg.action.position_sign() * leg.quantity as f64;
            total += Greeks::new(leg.delta, per_contract.gamma, per_contract.theta, per_contract.vega).scale(weight);
        }
        total
    }

    /// Expiration P&L at fixed relative moves with Gaussian-kernel weights.
    pub fn price_scenarios(
        &self,
        legs: &[OptionLeg],
        current_price: f64,
        nc: f64,
        iv: f64,
        dte: u32,
    ) -> Vec<PriceScenario> {
        let sigma = iv * (dte as f64 / DAYS_PER_YEAR).sqrt();
        self.config
            .scenario_moves
            .iter()
            .map(|&change| {
                let price = current_price * (1.0 + change);
                let profit = payoff_at_expiration(legs, price, nc);
                let profit_percent = if nc != 0.0 { profit / nc.abs() * 100.0 } else { 0.0 };
                PriceScenario {
                    price,
                    profit,
                    profit_percent,
                    probability: self.kernel_weight(change, sigma),
                }
            })
            .collect()
    }

    fn kernel_weight(&self, change: f64, sigma: f64) -> f64 {
        let raw = if sigma != 0.0 {
            (-0.5 * (change / sigma).powi(2)).exp()
        } else if change == 0.0 {
            1.0
        } else {
            0.0
        };
        (raw * self.config.scenario_kernel_scale).min(self.config.probability_cap)
    }
}
