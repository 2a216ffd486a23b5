//! Payoff of a leg set as a function of the underlying price.
//!
//! All values are per share: premiums and intrinsic values are never scaled
//! by the contract multiplier here.

use crate::types::OptionLeg;

/// Net premium of the legs. Positive = credit received, negative = debit paid.
pub fn net_credit(legs: &[OptionLeg]) -> f64 {
    legs.iter().map(OptionLeg::premium).sum()
}

/// P&L at expiration: premium plus the signed intrinsic value of every leg.
pub fn payoff_at_expiration(legs: &[OptionLeg], price: f64, net_credit: f64) -> f64 {
    net_credit + legs.iter().map(|leg| leg.intrinsic_pl(price)).sum::<f64>()
}

/// P&L `time_to_expiration` days before expiry.
///
/// Lightweight approximation, not an option pricing model: intrinsic value
/// plus the premium decayed linearly over the `dte` days of the position.
/// With `dte == 0` there is no time left to decay and the premium term is 0.
pub fn payoff_before_expiration(
    legs: &[OptionLeg],
    price: f64,
    net_credit: f64,
    time_to_expiration: f64,
    dte: u32,
) -> f64 {
    let decay = if dte == 0 { 0.0 } else { time_to_expiration / dte as f64 };
    payoff_at_expiration(legs, price, 0.0) + net_credit * decay
}
