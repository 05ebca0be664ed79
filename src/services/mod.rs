//! External collaborators: market data in, notifications out.

pub mod binance;
pub mod market_data;
pub mod notifier;
pub mod telegram;

pub use binance::BinanceRestClient;
pub use market_data::MarketDataProvider;
pub use notifier::{ConsoleNotifier, Notifier};
pub use telegram::TelegramNotifier;
