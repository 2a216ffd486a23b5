pub mod analysis;
pub mod chart;
pub mod config;
pub mod entries;
pub mod error;
pub mod exits;
pub mod frame;
pub mod payoff;
pub mod types;
pub mod validation;

pub use analysis::{analyze, Analyzer};
pub use chart::generate_chart;
pub use config::AnalyzerConfig;
pub use types::{Action, ChartData, Greeks, OptionLeg, OptionType, StrategyAnalysis};
