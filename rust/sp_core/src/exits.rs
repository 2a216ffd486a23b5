//! Exit decisions for an open bot position.
//!
//! 1. Mark the position to market (contract-scaled P&L)
//! 2. Check the profit target (percent, fixed net dollars or fixed closing price)
//! 3. Fall back to a time exit a few days before the nearest expiry
//!
//! `threshold_exit_mask` evaluates profit/stop thresholds for many positions
//! at once.

use chrono::NaiveDate;
use polars::prelude::*;
use tracing::debug;

use crate::entries::SHARES_PER_CONTRACT;

/// An open leg. `quantity` is signed: positive long, negative short.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeldLeg {
    pub quantity: i64,
    pub entry_price: f64,
    pub last_price: Option<f64>,
    pub expiration: NaiveDate,
}

impl HeldLeg {
    pub fn is_long(&self) -> bool {
        self.quantity > 0
    }
}

/// Entry value and directional profit of one leg, contract-scaled.
///
/// Longs gain when the price rises, shorts when it falls.
fn leg_pnl(quantity: i64, entry_price: f64, last_price: f64) -> (f64, f64) {
    let contracts = quantity.unsigned_abs() as f64;
    let entry_value = contracts * entry_price * SHARES_PER_CONTRACT;
    let current_value = contracts * last_price * SHARES_PER_CONTRACT;
    let profit = if quantity > 0 { current_value - entry_value } else { entry_value - current_value };
    (entry_value, profit)
}

/// Dollar profit and profit as a fraction of entry value.
///
/// Legs without a last price are left out. The fraction is `None` when no
/// entry value was counted.
pub fn position_pnl(legs: &[HeldLeg]) -> (f64, Option<f64>) {
    let mut total_entry = 0.0;
    let mut total_profit = 0.0;
    for leg in legs {
        let Some(last) = leg.last_price else { continue };
        let (entry_value, profit) = leg_pnl(leg.quantity, leg.entry_price, last);
        total_entry += entry_value;
        total_profit += profit;
    }
    let pct = if total_entry != 0.0 { Some(total_profit / total_entry) } else { None };
    (total_profit, pct)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfitTarget {
    /// Profit as a fraction of entry value, e.g. 0.30 for +30%.
    Percent(f64),
    /// Dollar profit across all legs.
    FixedNet(f64),
    /// Long legs trading at or above and short legs at or below this price.
    FixedClosing(f64),
}

impl Default for ProfitTarget {
    fn default() -> Self {
        ProfitTarget::Percent(0.30)
    }
}

impl ProfitTarget {
    pub fn is_hit(&self, legs: &[HeldLeg]) -> bool {
        match *self {
            ProfitTarget::Percent(target) => matches!(position_pnl(legs).1, Some(pct) if pct >= target),
            ProfitTarget::FixedNet(target) => position_pnl(legs).0 >= target,
            ProfitTarget::FixedClosing(target) => legs.iter().all(|leg| match leg.last_price {
                None => false,
                Some(last) if leg.quantity > 0 => last >= target,
                Some(last) if leg.quantity < 0 => last <= target,
                Some(_) => true,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitRules {
    pub profit_target: ProfitTarget,
    /// Close everything once the nearest expiry is this many days away.
    pub days_before_exit: i64,
}

impl Default for ExitRules {
    fn default() -> Self {
        Self { profit_target: ProfitTarget::default(), days_before_exit: 5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Hold,
    ProfitTarget,
    TimeExit,
}

pub fn evaluate_exit(rules: &ExitRules, legs: &[HeldLeg], today: NaiveDate) -> ExitDecision {
    if legs.is_empty() {
        return ExitDecision::Hold;
    }
    if rules.profit_target.is_hit(legs) {
        debug!(target = ?rules.profit_target, "profit target reached");
        return ExitDecision::ProfitTarget;
    }
    let min_dte = legs.iter().map(|l| (l.expiration - today).num_days()).min().unwrap_or(i64::MAX);
    if min_dte <= rules.days_before_exit {
        debug!(min_dte, "near expiration, time exit");
        return ExitDecision::TimeExit;
    }
    ExitDecision::Hold
}

/// Profit-target / stop-loss flags for many single-leg positions at once.
///
/// Row i is a position of `quantities[i]` contracts (negative = short) opened
/// at `entry_prices[i]` and now quoted at `current_prices[i]`. Its return is
/// the same directional figure `position_pnl` reports, so a short whose
/// premium halved is up 50%.
///
/// Rows with a null, zero quantity or zero entry price never exit.
pub fn threshold_exit_mask(
    quantities: &Series,
    entry_prices: &Series,
    current_prices: &Series,
    profit_pct: Option<f64>,
    loss_pct: Option<f64>,
) -> PolarsResult<BooleanChunked> {
    let qty = quantities.i64()?;
    let entry = entry_prices.f64()?;
    let current = current_prices.f64()?;

    let mask: BooleanChunked = qty
        .into_iter()
        .zip(entry.into_iter())
        .zip(current.into_iter())
        .map(|((q, e), c)| {
            let (Some(q), Some(e), Some(c)) = (q, e, c) else { return Some(false) };
            let (entry_value, profit) = leg_pnl(q, e, c);
            if entry_value == 0.0 {
                return Some(false);
            }
            let ret = profit / entry_value.abs();
            let profit_hit = profit_pct.is_some_and(|p| ret >= p);
            let loss_hit = loss_pct.is_some_and(|l| ret <= -l);
            Some(profit_hit || loss_hit)
        })
        .collect();

    Ok(mask)
}
