//! Shared data models spanning the pipeline stages.

pub mod candle;
pub mod indicators;
pub mod report;
pub mod suggestion;

pub use candle::Candle;
pub use indicators::SmaIndicator;
pub use report::{RunReport, SymbolOutcome};
pub use suggestion::{Suggestion, SuggestionKind};
