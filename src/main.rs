//! trendwatch
//!
//! Runs one pass over the configured symbols and exits. Schedule it with
//! cron or a systemd timer for periodic suggestions.

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;
use trendwatch::config::{self, AppConfig, NotifierConfig};
use trendwatch::core::runtime::SignalRuntime;
use trendwatch::logging;
use trendwatch::services::{
    BinanceRestClient, ConsoleNotifier, MarketDataProvider, Notifier, TelegramNotifier,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env = config::get_environment();
    info!("Starting trendwatch");
    info!(environment = %env, "Environment");

    let app_config = AppConfig::from_env()?;

    let provider: Arc<dyn MarketDataProvider + Send + Sync> = Arc::new(BinanceRestClient::new(
        app_config.binance_base_url.clone(),
        app_config.http_timeout,
    )?);

    let notifier: Arc<dyn Notifier + Send + Sync> = match &app_config.notifier {
        NotifierConfig::Telegram {
            api_url,
            bot_token,
            chat_id,
        } => {
            info!(chat_id = %chat_id, "Notifications: Telegram");
            Arc::new(TelegramNotifier::new(
                api_url.clone(),
                bot_token.clone(),
                chat_id.clone(),
                app_config.http_timeout,
            )?)
        }
        NotifierConfig::Console => {
            info!("Notifications: stdout (set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID for Telegram)");
            Arc::new(ConsoleNotifier)
        }
    };

    let runtime = SignalRuntime::new(app_config.runtime, provider, notifier);
    let report = runtime.run_once().await;

    // Failed symbols are already logged; they never fail the process.
    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "trendwatch finished"
    );

    Ok(())
}
