//! Entry planning for a bot opening a new multi-leg position.
//!
//! 1. Pick an expiration from the listed chain (exact DTE or target window)
//! 2. Pick a strike per leg (explicit strike or closest target delta)
//! 3. Size every leg from the cash allocated to the entry

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::error::EntryError;

/// Contracts control this many shares.
pub const SHARES_PER_CONTRACT: f64 = 100.0;

/// Entries with less investable cash than this are skipped.
pub const MIN_INVESTABLE_CASH: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DteRule {
    /// Only the expiry exactly `days` out qualifies.
    Exact(u32),
    /// Any expiry inside [min, max] days, preferring the one closest to `days`.
    Target { days: u32, min: u32, max: u32 },
}

impl DteRule {
    /// Target window of ±10 days around `days`, never below 1 day.
    pub fn target(days: u32) -> Self {
        DteRule::Target {
            days,
            min: days.saturating_sub(10).max(1),
            max: days + 10,
        }
    }
}

/// Choose an expiration among `available` dates. First match wins ties.
pub fn select_expiration(available: &[NaiveDate], rule: DteRule, today: NaiveDate) -> Option<NaiveDate> {
    match rule {
        DteRule::Exact(days) => {
            let desired = today + Duration::days(days as i64);
            available.iter().copied().find(|&d| d == desired)
        }
        DteRule::Target { days, min, max } => {
            let desired = today + Duration::days(days as i64);
            let mut best: Option<(NaiveDate, i64)> = None;
            for &exp in available {
                let dte = (exp - today).num_days();
                if dte < min as i64 || dte > max as i64 {
                    continue;
                }
                let distance = (exp - desired).num_days().abs();
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((exp, distance));
                }
            }
            best.map(|(exp, _)| exp)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrikeRule {
    /// Use this strike, or the closest listed one.
    Explicit(f64),
    /// Strike whose |delta| is closest to |target|.
    TargetDelta(f64),
}

/// Choose a strike. `deltas` pairs strikes with their delta where known.
pub fn select_strike(strikes: &[f64], deltas: &[(f64, Option<f64>)], rule: StrikeRule) -> Option<f64> {
    match rule {
        StrikeRule::Explicit(strike) => {
            if strikes.contains(&strike) {
                return Some(strike);
            }
            closest_by(strikes.iter().copied(), |s| (s - strike).abs())
        }
        StrikeRule::TargetDelta(target) => {
            let target = target.abs();
            let known = deltas.iter().filter_map(|&(s, d)| d.map(|d| (s, d)));
            let mut best: Option<(f64, f64)> = None;
            for (strike, delta) in known {
                let diff = (delta.abs() - target).abs();
                if best.map_or(true, |(_, b)| diff < b) {
                    best = Some((strike, diff));
                }
            }
            best.map(|(s, _)| s)
        }
    }
}

fn closest_by(values: impl Iterator<Item = f64>, key: impl Fn(f64) -> f64) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for v in values {
        let k = key(v);
        if best.map_or(true, |(_, b)| k < b) {
            best = Some((v, k));
        }
    }
    best.map(|(v, _)| v)
}

/// Quote and relative size of one leg of a planned entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegQuote {
    /// Mid price when available, else last price.
    pub price: Option<f64>,
    /// Whole-number ratio inside the combo; values below 1 count as 1.
    pub size_ratio: u32,
}

/// Contracts per leg for a fresh entry.
///
/// The investable cash (`available_cash × investment_pct`) is split into
/// ratio units; each leg gets as many contracts as its share of units buys.
pub fn plan_entry(available_cash: f64, investment_pct: f64, legs: &[LegQuote]) -> Result<Vec<u32>, EntryError> {
    let investable = available_cash * investment_pct;
    if investable < MIN_INVESTABLE_CASH {
        warn!(investable, "allocated cash too small, skipping entry");
        return Err(EntryError::InsufficientCash { investable, minimum: MIN_INVESTABLE_CASH });
    }
    if legs.is_empty() {
        return Err(EntryError::NoLegs);
    }

    let total_ratio: u32 = legs.iter().map(|l| l.size_ratio.max(1)).sum();
    let cash_per_unit = investable / total_ratio as f64;

    let mut quantities = Vec::with_capacity(legs.len());
    for (i, leg) in legs.iter().enumerate() {
        let price = match leg.price {
            Some(p) if p > 0.0 => p,
            _ => return Err(EntryError::PriceUnavailable { leg: i }),
        };
        let budget = cash_per_unit * leg.size_ratio.max(1) as f64;
        let qty = (budget / (price * SHARES_PER_CONTRACT)).floor();
        if qty <= 0.0 {
            return Err(EntryError::Unaffordable { leg: i, price });
        }
        quantities.push(qty as u32);
    }

    debug!(investable, legs = legs.len(), ?quantities, "entry planned");
    Ok(quantities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn target_rule_window() {
        assert_eq!(DteRule::target(30), DteRule::Target { days: 30, min: 20, max: 40 });
        assert_eq!(DteRule::target(5), DteRule::Target { days: 5, min: 1, max: 15 });
    }

    #[test]
    fn exact_expiration() {
        let today = day(2025, 1, 6);
        let chain = [day(2025, 1, 31), day(2025, 2, 5)];
        assert_eq!(select_expiration(&chain, DteRule::Exact(30), today), Some(day(2025, 2, 5)));
        assert_eq!(select_expiration(&chain, DteRule::Exact(29), today), None);
    }

    #[test]
    fn target_expiration_closest() {
        let today = day(2025, 1, 6);
        let chain = [day(2025, 1, 17), day(2025, 1, 31), day(2025, 2, 7), day(2025, 2, 21)];
        // Preferred 2025-02-05: Feb 7 is 2 days off, Jan 31 is 5.
        assert_eq!(select_expiration(&chain, DteRule::target(30), today), Some(day(2025, 2, 7)));
    }

    #[test]
    fn target_expiration_outside_window() {
        let today = day(2025, 1, 6);
        let chain = [day(2025, 1, 10), day(2025, 4, 17)];
        assert_eq!(select_expiration(&chain, DteRule::target(30), today), None);
    }

    #[test]
    fn target_expiration_tie_keeps_first() {
        let today = day(2025, 1, 1);
        let chain = [day(2025, 1, 29), day(2025, 2, 2)];
        assert_eq!(select_expiration(&chain, DteRule::target(30), today), Some(day(2025, 1, 29)));
    }

    #[test]
    fn explicit_strike() {
        let strikes = [430.0, 435.0, 440.0, 445.0];
        assert_eq!(select_strike(&strikes, &[], StrikeRule::Explicit(440.0)), Some(440.0));
        assert_eq!(select_strike(&strikes, &[], StrikeRule::Explicit(441.0)), Some(440.0));
        assert_eq!(select_strike(&[], &[], StrikeRule::Explicit(441.0)), None);
    }

    #[test]
    fn delta_strike() {
        let deltas = [(430.0, Some(-0.15)), (435.0, Some(-0.22)), (440.0, None), (445.0, Some(-0.40))];
        assert_eq!(select_strike(&[], &deltas, StrikeRule::TargetDelta(0.25)), Some(435.0));
        assert_eq!(select_strike(&[], &deltas, StrikeRule::TargetDelta(-0.45)), Some(445.0));
        assert_eq!(select_strike(&[], &[(440.0, None)], StrikeRule::TargetDelta(0.25)), None);
    }

    #[test]
    fn plan_two_leg_entry() {
        // 10% of 100k = 10k over 2 units → 5k per leg
        let legs = [
            LegQuote { price: Some(2.0), size_ratio: 1 },
            LegQuote { price: Some(0.5), size_ratio: 1 },
        ];
        assert_eq!(plan_entry(100_000.0, 0.10, &legs).unwrap(), vec![25, 100]);
    }

    #[test]
    fn plan_respects_ratio() {
        let legs = [
            LegQuote { price: Some(1.0), size_ratio: 2 },
            LegQuote { price: Some(1.0), size_ratio: 0 },
        ];
        // 3000 over 3 units: leg0 2000, leg1 1000
        assert_eq!(plan_entry(30_000.0, 0.10, &legs).unwrap(), vec![20, 10]);
    }

    #[test]
    fn plan_rejects_small_cash() {
        let legs = [LegQuote { price: Some(1.0), size_ratio: 1 }];
        assert!(matches!(plan_entry(400.0, 0.10, &legs), Err(EntryError::InsufficientCash { .. })));
    }

    #[test]
    fn plan_rejects_missing_price() {
        let legs = [
            LegQuote { price: Some(1.0), size_ratio: 1 },
            LegQuote { price: None, size_ratio: 1 },
        ];
        assert_eq!(plan_entry(100_000.0, 0.10, &legs), Err(EntryError::PriceUnavailable { leg: 1 }));
    }

    #[test]
    fn plan_rejects_unaffordable_leg() {
        let legs = [LegQuote { price: Some(25.0), size_ratio: 1 }];
        assert_eq!(
            plan_entry(10_000.0, 0.10, &legs),
            Err(EntryError::Unaffordable { leg: 0, price: 25.0 })
        );
    }

    #[test]
    fn plan_rejects_no_legs() {
        assert_eq!(plan_entry(100_000.0, 0.10, &[]), Err(EntryError::NoLegs));
    }
}
