//! trendwatch: periodic SMA trend suggestions for spot currency pairs.
//!
//! One pass fetches a candle window per symbol, computes a trailing simple
//! moving average and pushes a Buy/Hold suggestion to a notifier.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{ConfigError, FetchError, NotifyError, SymbolError};
