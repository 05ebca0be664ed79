//! Outbound notification channel.

use crate::error::NotifyError;

#[async_trait::async_trait]
pub trait Notifier {
    /// Deliver one text message. Acknowledgement content is not consumed.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// Prints each message to stdout, separated by a blank line.
pub struct ConsoleNotifier;

#[async_trait::async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        println!("{}\n", message);
        Ok(())
    }
}
