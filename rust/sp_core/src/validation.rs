//! Bot configuration validation.
//!
//! Each `Rule` inspects one aspect of a `BotConfig` (optionally against a
//! market snapshot) and yields outcomes. `validate_configuration` runs every
//! rule and buckets the findings by severity.

use chrono::NaiveTime;
use serde::Serialize;

use crate::types::{OptionLeg, OptionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Required,
    Business,
    Risk,
    Market,
    Performance,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Required => "required",
            Category::Business => "business",
            Category::Risk => "risk",
            Category::Market => "market",
            Category::Performance => "performance",
        }
    }
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub passed: bool,
    pub message: String,
    pub suggestion: Option<String>,
}

impl Outcome {
    fn pass(message: &str) -> Self {
        Self { passed: true, message: message.into(), suggestion: None }
    }

    fn fail(message: &str) -> Self {
        Self { passed: false, message: message.into(), suggestion: None }
    }

    fn note(message: &str, suggestion: &str) -> Self {
        Self { passed: true, message: message.into(), suggestion: Some(suggestion.into()) }
    }

    fn fail_with(message: &str, suggestion: &str) -> Self {
        Self { passed: false, message: message.into(), suggestion: Some(suggestion.into()) }
    }
}

/// An outcome tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub field: &'static str,
    pub severity: Severity,
    pub category: Category,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Finding {
    pub fn code(&self) -> String {
        format!("{}_{}", self.category.as_str(), self.field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Default)]
pub struct BotConfig {
    pub name: String,
    /// Brokerage account the bot trades in.
    pub trading_account: String,
    pub underlying_symbol: String,
    /// Strategy slug, e.g. `iron-condor` or `put-credit-spread`.
    pub strategy: String,
    pub legs: Vec<OptionLeg>,
    pub days_to_expiration: u32,
    pub quantity: u32,
    /// Percent of max profit, e.g. 50.0.
    pub profit_target: f64,
    /// Percent of credit, e.g. 200.0.
    pub stop_loss: f64,
    pub max_trades_per_day: u32,
    pub entry_window: Option<EntryWindow>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub current_price: f64,
    /// Implied volatility in percent points, e.g. 25.0.
    pub implied_volatility: f64,
    pub volume: f64,
    pub options_volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    BotName,
    TradingAccount,
    UnderlyingSymbol,
    StrikePrice,
    DaysToExpiration,
    Quantity,
    ProfitTarget,
    StopLoss,
    EntryTimeWindow,
    MaxTradesPerDay,
    MarketConditions,
    StrategyConsistency,
}

impl Rule {
    pub const ALL: [Rule; 12] = [
        Rule::BotName,
        Rule::TradingAccount,
        Rule::UnderlyingSymbol,
        Rule::StrikePrice,
        Rule::DaysToExpiration,
        Rule::Quantity,
        Rule::ProfitTarget,
        Rule::StopLoss,
        Rule::EntryTimeWindow,
        Rule::MaxTradesPerDay,
        Rule::MarketConditions,
        Rule::StrategyConsistency,
    ];

    pub fn field(self) -> &'static str {
        match self {
            Rule::BotName => "botName",
            Rule::TradingAccount => "tradingAccount",
            Rule::UnderlyingSymbol => "underlyingSymbol",
            Rule::StrikePrice => "strikePrice",
            Rule::DaysToExpiration => "daysToExpiration",
            Rule::Quantity => "quantity",
            Rule::ProfitTarget => "profitTarget",
            Rule::StopLoss => "stopLoss",
            Rule::EntryTimeWindow => "entryTimeWindow",
            Rule::MaxTradesPerDay => "maxTradesPerDay",
            Rule::MarketConditions => "marketConditions",
            Rule::StrategyConsistency => "strategyConsistency",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Rule::BotName
            | Rule::TradingAccount
            | Rule::UnderlyingSymbol
            | Rule::Quantity
            | Rule::StrategyConsistency => Severity::Error,
            Rule::MarketConditions => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Rule::BotName | Rule::TradingAccount | Rule::UnderlyingSymbol => Category::Required,
            Rule::StrikePrice | Rule::DaysToExpiration | Rule::Quantity | Rule::StopLoss => Category::Risk,
            Rule::ProfitTarget | Rule::MaxTradesPerDay => Category::Performance,
            Rule::EntryTimeWindow | Rule::MarketConditions => Category::Market,
            Rule::StrategyConsistency => Category::Business,
        }
    }

    /// Outcomes of this rule. Strike checks yield one outcome per leg.
    pub fn check(self, config: &BotConfig, market: Option<&MarketSnapshot>) -> Vec<Outcome> {
        match self {
            Rule::BotName => vec![check_name(&config.name)],
            Rule::TradingAccount => vec![check_account(&config.trading_account)],
            Rule::UnderlyingSymbol => vec![check_symbol(&config.underlying_symbol, market)],
            Rule::StrikePrice => config.legs.iter().map(|leg| check_strike(leg.strike, market)).collect(),
            Rule::DaysToExpiration => vec![check_dte(config.days_to_expiration)],
            Rule::Quantity => vec![check_quantity(config.quantity, market)],
            Rule::ProfitTarget => vec![check_profit_target(config.profit_target, &config.strategy)],
            Rule::StopLoss => vec![check_stop_loss(config.stop_loss, config.profit_target)],
            Rule::EntryTimeWindow => vec![check_entry_window(config.entry_window)],
            Rule::MaxTradesPerDay => vec![check_max_trades(config.max_trades_per_day)],
            Rule::MarketConditions => vec![check_market_conditions(&config.strategy, market)],
            Rule::StrategyConsistency => vec![check_strategy_consistency(&config.strategy, config.legs.len())],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub infos: Vec<Finding>,
    /// Share of passed checks, 0-100.
    pub score: u32,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_configuration(config: &BotConfig, market: Option<&MarketSnapshot>) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut total = 0usize;
    let mut passed = 0usize;

    for rule in Rule::ALL {
        for outcome in rule.check(config, market) {
            total += 1;
            if outcome.passed {
                passed += 1;
            }
            let ok = outcome.passed;
            let finding = Finding {
                field: rule.field(),
                severity: rule.severity(),
                category: rule.category(),
                outcome,
            };
            match (finding.severity, ok) {
                (Severity::Error, false) => report.errors.push(finding),
                (Severity::Warning, false) => report.warnings.push(finding),
                (Severity::Info, _) => report.infos.push(finding),
                _ => {}
            }
        }
    }

    report.score = if total > 0 { (passed as f64 / total as f64 * 100.0).round() as u32 } else { 0 };
    report
}

fn is_credit_strategy(strategy: &str) -> bool {
    strategy == "iron-condor" || strategy.contains("credit")
}

fn check_name(name: &str) -> Outcome {
    let len = name.chars().count();
    if name.trim().is_empty() {
        return Outcome::fail("Bot name is required");
    }
    if len < 3 {
        return Outcome::fail("Bot name must be at least 3 characters long");
    }
    if len > 50 {
        return Outcome::fail("Bot name must be less than 50 characters");
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '_' || c == '-';
    if !name.chars().all(allowed) {
        return Outcome::fail("Bot name can only contain letters, numbers, spaces, hyphens, and underscores");
    }
    Outcome::pass("Valid bot name")
}

fn check_account(account: &str) -> Outcome {
    if account.trim().is_empty() {
        return Outcome::fail("Trading account selection is required");
    }
    Outcome::pass("Trading account selected")
}

fn check_symbol(symbol: &str, market: Option<&MarketSnapshot>) -> Outcome {
    if symbol.is_empty() {
        return Outcome::fail("Underlying symbol is required");
    }
    if symbol.len() > 5 || !symbol.chars().all(|c| c.is_ascii_uppercase()) {
        return Outcome::fail("Symbol must be 1-5 uppercase letters");
    }
    if let Some(m) = market {
        if m.volume < 1_000_000.0 {
            return Outcome::fail_with(
                "Low volume symbol may result in poor fills",
                "Consider using high-volume ETFs like SPY, QQQ, or IWM",
            );
        }
    }
    Outcome::pass("Valid symbol")
}

fn check_strike(strike: f64, market: Option<&MarketSnapshot>) -> Outcome {
    if strike <= 0.0 || strike.is_nan() {
        return Outcome::fail("Strike price must be greater than 0");
    }
    if let Some(m) = market {
        let percent_diff = ((strike - m.current_price) / m.current_price).abs() * 100.0;
        if percent_diff > 50.0 {
            return Outcome::fail_with(
                "Strike price is too far from current market price",
                "Consider strikes within 50% of current price for better liquidity",
            );
        }
        if percent_diff < 2.0 {
            return Outcome::note(
                "Strike very close to current price - high gamma risk",
                "Monitor position closely due to high gamma exposure",
            );
        }
    }
    Outcome::pass("Valid strike price")
}

fn check_dte(dte: u32) -> Outcome {
    if dte == 0 {
        return Outcome::fail("Days to expiration must be greater than 0");
    }
    if dte > 365 {
        return Outcome::fail("Days to expiration cannot exceed 365 days");
    }
    if dte < 7 {
        return Outcome::note(
            "Very short DTE increases gamma risk significantly",
            "Consider using 14+ DTE for more manageable risk",
        );
    }
    if dte > 90 {
        return Outcome::note(
            "Long DTE reduces time decay benefits",
            "Consider 30-60 DTE for optimal theta decay",
        );
    }
    Outcome::pass("Valid expiration period")
}

fn check_quantity(quantity: u32, market: Option<&MarketSnapshot>) -> Outcome {
    if quantity == 0 {
        return Outcome::fail("Quantity must be greater than 0");
    }
    if quantity > 100 {
        return Outcome::fail_with(
            "Quantity exceeds maximum recommended limit",
            "Consider starting with smaller position sizes for risk management",
        );
    }
    if let Some(m) = market {
        if m.options_volume > 0.0 && quantity as f64 / m.options_volume * 100.0 > 10.0 {
            return Outcome::fail_with(
                "Position size too large relative to daily options volume",
                "Reduce quantity to avoid market impact",
            );
        }
    }
    Outcome::pass("Valid quantity")
}

fn check_profit_target(target: f64, strategy: &str) -> Outcome {
    if target <= 0.0 {
        return Outcome::fail("Profit target must be greater than 0%");
    }
    if target > 100.0 {
        return Outcome::fail("Profit target cannot exceed 100%");
    }
    let strategy = strategy.to_ascii_lowercase();
    if strategy == "iron-condor" && target > 50.0 {
        return Outcome::note(
            "High profit target for iron condor strategy",
            "Consider 25-50% profit target for iron condors",
        );
    }
    if strategy.contains("credit") && target > 75.0 {
        return Outcome::note("High profit target for credit spread", "Consider 50% or less for credit spreads");
    }
    Outcome::pass("Valid profit target")
}

fn check_stop_loss(stop_loss: f64, profit_target: f64) -> Outcome {
    if stop_loss <= 0.0 {
        return Outcome::fail("Stop loss must be greater than 0%");
    }
    if stop_loss > 1000.0 {
        return Outcome::fail("Stop loss percentage is too high");
    }
    if profit_target > 0.0 {
        let ratio = stop_loss / profit_target;
        if ratio > 5.0 {
            return Outcome::note(
                "Poor risk-reward ratio",
                "Consider reducing stop loss or increasing profit target",
            );
        }
        if ratio < 1.5 {
            return Outcome::note("Aggressive risk-reward ratio", "Ensure this aligns with your risk tolerance");
        }
    }
    Outcome::pass("Valid stop loss")
}

fn check_entry_window(window: Option<EntryWindow>) -> Outcome {
    let Some(EntryWindow { start, end }) = window else {
        return Outcome::fail("Both start and end times are required");
    };
    if start >= end {
        return Outcome::fail("Start time must be before end time");
    }
    if (end - start).num_minutes() < 30 {
        return Outcome::note(
            "Very narrow time window may limit opportunities",
            "Consider at least 1-hour window for better execution",
        );
    }
    let open = NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default();
    let close = NaiveTime::from_hms_opt(16, 0, 0).unwrap_or_default();
    if start < open || end > close {
        return Outcome::fail("Time window must be within market hours (9:30 AM - 4:00 PM ET)");
    }
    let early = NaiveTime::from_hms_opt(9, 45, 0).unwrap_or_default();
    if start < early {
        return Outcome::note(
            "Early morning trading may have wider spreads",
            "Consider starting after 9:45 AM for better liquidity",
        );
    }
    Outcome::pass("Valid time window")
}

fn check_max_trades(max_trades: u32) -> Outcome {
    if max_trades == 0 {
        return Outcome::fail("Must allow at least 1 trade per day");
    }
    if max_trades > 10 {
        return Outcome::note(
            "High number of daily trades may increase costs",
            "Consider commission impact with frequent trading",
        );
    }
    Outcome::pass("Valid daily trade limit")
}

fn check_market_conditions(strategy: &str, market: Option<&MarketSnapshot>) -> Outcome {
    let Some(m) = market else {
        return Outcome::pass("No market data available");
    };
    let strategy = strategy.to_ascii_lowercase();
    let credit = is_credit_strategy(&strategy);
    if m.implied_volatility > 30.0 {
        return if credit {
            Outcome::note(
                "High implied volatility detected - favorable for credit strategies",
                "Good conditions for selling premium",
            )
        } else {
            Outcome::note(
                "High implied volatility may increase position risk",
                "Consider volatility impact on your strategy",
            )
        };
    }
    if m.implied_volatility < 15.0 && credit {
        return Outcome::note(
            "Low implied volatility may reduce premium collection",
            "Consider waiting for higher IV or adjusting strikes",
        );
    }
    Outcome::pass("Market conditions reviewed")
}

fn check_strategy_consistency(strategy: &str, legs: usize) -> Outcome {
    let strategy = strategy.to_ascii_lowercase();
    if strategy == "iron-condor" && legs != 4 {
        return Outcome::fail_with(
            "Iron Condor strategy requires exactly 4 legs",
            "Configure 4 legs: short put, long put, short call, long call",
        );
    }
    if strategy.contains("credit-spread") && legs != 2 {
        return Outcome::fail_with(
            "Credit spread strategy requires exactly 2 legs",
            "Configure 2 legs with same option type",
        );
    }
    Outcome::pass("Strategy configuration is consistent")
}

/// Spacing between adjacent strikes of a multi-strike position.
pub fn validate_strike_spread(strikes: &[f64]) -> Outcome {
    if strikes.len() < 2 {
        return Outcome::pass("Single leg position");
    }
    let mut sorted = strikes.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let gaps: Vec<f64> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
    let min_gap = gaps.iter().copied().fold(f64::INFINITY, f64::min);
    let max_gap = gaps.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min_gap < 1.0 {
        return Outcome::fail_with(
            "Strike spread too narrow - may result in poor fills",
            "Use at least $1 wide spreads for better liquidity",
        );
    }
    if max_gap / min_gap > 3.0 {
        return Outcome::note("Uneven strike spacing detected", "Consider more consistent strike spacing");
    }
    Outcome::pass("Valid strike configuration")
}

pub fn validate_delta_targeting(delta: f64, option_type: OptionType) -> Outcome {
    if delta.abs() > 1.0 {
        return Outcome::fail("Delta must be between -1 and 1");
    }
    match option_type {
        OptionType::Call if delta < 0.0 => return Outcome::fail("Call options should have positive delta"),
        OptionType::Put if delta > 0.0 => return Outcome::fail("Put options should have negative delta"),
        _ => {}
    }
    let abs_delta = delta.abs();
    if abs_delta > 0.5 {
        return Outcome::note(
            "High delta option - significant directional exposure",
            "Monitor for large price movements",
        );
    }
    if abs_delta < 0.05 {
        return Outcome::note(
            "Very low delta option - limited profit potential",
            "Consider higher delta for better returns",
        );
    }
    Outcome::pass("Valid delta targeting")
}

/// `iv` and `historical` in percent points.
pub fn validate_implied_volatility(iv: f64, historical: Option<f64>) -> Outcome {
    if iv < 0.0 {
        return Outcome::fail("Implied volatility cannot be negative");
    }
    if iv > 200.0 {
        return Outcome::note(
            "Extremely high implied volatility detected",
            "Consider waiting for volatility to normalize",
        );
    }
    if let Some(h) = historical.filter(|&h| h != 0.0) {
        if iv > h * 2.0 {
            return Outcome::note(
                "IV significantly elevated vs historical",
                "Good opportunity for premium selling strategies",
            );
        }
        if iv < h * 0.5 {
            return Outcome::note(
                "IV significantly below historical average",
                "Consider volatility expansion strategies",
            );
        }
    }
    Outcome::pass("Normal implied volatility levels")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;
    use chrono::NaiveDate;

    fn leg(action: Action, option_type: OptionType, strike: f64) -> OptionLeg {
        let exp = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
        OptionLeg::new(action, option_type, strike, 1, 1.0, 0.2, exp)
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn condor_bot() -> BotConfig {
        BotConfig {
            name: "SPY condor 45".into(),
            trading_account: "paper-1".into(),
            underlying_symbol: "SPY".into(),
            strategy: "iron-condor".into(),
            legs: vec![
                leg(Action::Buy, OptionType::Put, 420.0),
                leg(Action::Sell, OptionType::Put, 430.0),
                leg(Action::Sell, OptionType::Call, 470.0),
                leg(Action::Buy, OptionType::Call, 480.0),
            ],
            days_to_expiration: 45,
            quantity: 2,
            profit_target: 50.0,
            stop_loss: 100.0,
            max_trades_per_day: 2,
            entry_window: Some(EntryWindow { start: time(10, 0), end: time(15, 0) }),
        }
    }

    fn market() -> MarketSnapshot {
        MarketSnapshot { current_price: 450.0, implied_volatility: 20.0, volume: 50_000_000.0, options_volume: 1_000.0 }
    }

    #[test]
    fn clean_config_passes() {
        let report = validate_configuration(&condor_bot(), Some(&market()));
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert_eq!(report.infos.len(), 1);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn condor_needs_four_legs() {
        let mut cfg = condor_bot();
        cfg.legs.pop();
        let report = validate_configuration(&cfg, None);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "strategyConsistency");
        assert_eq!(report.errors[0].code(), "business_strategyConsistency");
    }

    #[test]
    fn warnings_do_not_invalidate() {
        let mut cfg = condor_bot();
        cfg.days_to_expiration = 400;
        let report = validate_configuration(&cfg, None);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].field, "daysToExpiration");
        assert!(report.score < 100);
    }

    #[test]
    fn score_counts_every_outcome() {
        // 11 single-outcome rules + 4 strike outcomes, one failure.
        let mut cfg = condor_bot();
        cfg.max_trades_per_day = 0;
        let report = validate_configuration(&cfg, None);
        assert_eq!(report.score, (14.0_f64 / 15.0 * 100.0).round() as u32);
    }

    #[test]
    fn missing_account_is_an_error() {
        let mut cfg = condor_bot();
        cfg.trading_account = " ".into();
        let report = validate_configuration(&cfg, None);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code(), "required_tradingAccount");
        assert_eq!(report.errors[0].outcome.message, "Trading account selection is required");
    }

    #[test]
    fn name_rules() {
        assert!(!check_name("  ").passed);
        assert!(!check_name("ab").passed);
        assert!(!check_name(&"x".repeat(51)).passed);
        assert!(!check_name("bot!").passed);
        assert!(check_name("my_bot-1 v2").passed);
    }

    #[test]
    fn symbol_rules() {
        assert!(!check_symbol("", None).passed);
        assert!(!check_symbol("spy", None).passed);
        assert!(!check_symbol("TOOLONG", None).passed);
        assert!(check_symbol("QQQ", None).passed);
        let thin = MarketSnapshot { volume: 10_000.0, ..market() };
        assert!(!check_symbol("QQQ", Some(&thin)).passed);
    }

    #[test]
    fn strike_rules() {
        assert!(!check_strike(0.0, None).passed);
        assert!(!check_strike(700.0, Some(&market())).passed);
        let near = check_strike(452.0, Some(&market()));
        assert!(near.passed);
        assert!(near.suggestion.is_some());
    }

    #[test]
    fn quantity_against_volume() {
        let thin = MarketSnapshot { options_volume: 100.0, ..market() };
        assert!(!check_quantity(20, Some(&thin)).passed);
        assert!(check_quantity(5, Some(&thin)).passed);
        assert!(!check_quantity(101, None).passed);
    }

    #[test]
    fn entry_window_rules() {
        assert!(!check_entry_window(None).passed);
        let backwards = EntryWindow { start: time(14, 0), end: time(10, 0) };
        assert!(!check_entry_window(Some(backwards)).passed);
        let pre_open = EntryWindow { start: time(9, 0), end: time(11, 0) };
        assert!(!check_entry_window(Some(pre_open)).passed);
        let early = EntryWindow { start: time(9, 35), end: time(11, 0) };
        let out = check_entry_window(Some(early));
        assert!(out.passed && out.suggestion.is_some());
    }

    #[test]
    fn stop_loss_ratio_notes() {
        assert!(check_stop_loss(200.0, 50.0).suggestion.is_none());
        assert_eq!(check_stop_loss(200.0, 50.0).message, "Valid stop loss");
        assert_eq!(check_stop_loss(600.0, 50.0).message, "Poor risk-reward ratio");
        assert_eq!(check_stop_loss(50.0, 50.0).message, "Aggressive risk-reward ratio");
    }

    #[test]
    fn market_condition_notes() {
        let hot = MarketSnapshot { implied_volatility: 40.0, ..market() };
        let out = check_market_conditions("iron-condor", Some(&hot));
        assert!(out.message.contains("favorable"));
        let cold = MarketSnapshot { implied_volatility: 10.0, ..market() };
        let out = check_market_conditions("put-credit-spread", Some(&cold));
        assert!(out.message.contains("reduce premium"));
        assert_eq!(check_market_conditions("long-call", None).message, "No market data available");
    }

    #[test]
    fn strike_spread_utility() {
        assert!(validate_strike_spread(&[450.0]).passed);
        assert!(!validate_strike_spread(&[450.0, 450.5]).passed);
        let uneven = validate_strike_spread(&[400.0, 405.0, 440.0]);
        assert!(uneven.passed && uneven.suggestion.is_some());
        assert_eq!(validate_strike_spread(&[435.0, 440.0, 460.0, 465.0]).message, "Uneven strike spacing detected");
    }

    #[test]
    fn delta_targeting_utility() {
        assert!(!validate_delta_targeting(1.2, OptionType::Call).passed);
        assert!(!validate_delta_targeting(-0.3, OptionType::Call).passed);
        assert!(!validate_delta_targeting(0.3, OptionType::Put).passed);
        assert!(validate_delta_targeting(-0.3, OptionType::Put).suggestion.is_none());
        assert!(validate_delta_targeting(0.7, OptionType::Call).suggestion.is_some());
    }

    #[test]
    fn implied_volatility_utility() {
        assert!(!validate_implied_volatility(-1.0, None).passed);
        assert!(validate_implied_volatility(250.0, None).suggestion.is_some());
        assert!(validate_implied_volatility(50.0, Some(20.0)).message.contains("elevated"));
        assert!(validate_implied_volatility(8.0, Some(20.0)).message.contains("below"));
        assert_eq!(validate_implied_volatility(20.0, Some(0.0)).message, "Normal implied volatility levels");
    }
}
