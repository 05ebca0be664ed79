//! Binance spot REST market data.

pub mod client;
pub mod messages;

pub use client::BinanceRestClient;
