//! Error types for the fallible edges of the crate.
//!
//! The calculator itself never fails; these cover parsing, configuration
//! and entry planning.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown leg action {0:?} (expected BUY or SELL)")]
    Action(String),
    #[error("unknown option type {0:?} (expected CALL or PUT)")]
    OptionType(String),
    #[error("invalid expiration date {0:?} (expected YYYY-MM-DD)")]
    Expiration(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("analyzer config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} needs at least {min} entries, got {got}")]
    TooFew { field: &'static str, min: usize, got: usize },
}

/// Reasons an entry is skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryError {
    #[error("no legs defined")]
    NoLegs,
    #[error("investable cash {investable:.2} below minimum {minimum:.2}")]
    InsufficientCash { investable: f64, minimum: f64 },
    #[error("no usable price for leg {leg}")]
    PriceUnavailable { leg: usize },
    #[error("not enough cash for leg {leg} at price {price:.2}")]
    Unaffordable { leg: usize, price: f64 },
}
