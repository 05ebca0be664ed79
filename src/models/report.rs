//! Per-symbol outcomes of one pass.

use crate::error::SymbolError;
use crate::models::suggestion::Suggestion;

#[derive(Debug)]
pub struct SymbolOutcome {
    pub symbol: String,
    pub result: Result<Suggestion, SymbolError>,
}

impl SymbolOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn suggestion(&self) -> Option<&Suggestion> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&SymbolError> {
        self.result.as_ref().err()
    }
}

/// Outcomes in the order the symbols were processed.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<SymbolOutcome>,
}

impl RunReport {
    pub fn push(&mut self, symbol: impl Into<String>, result: Result<Suggestion, SymbolError>) {
        self.outcomes.push(SymbolOutcome {
            symbol: symbol.into(),
            result,
        });
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn outcome(&self, symbol: &str) -> Option<&SymbolOutcome> {
        self.outcomes.iter().find(|o| o.symbol == symbol)
    }
}
