use crate::account::Account;

/// Receiver of post-transfer messages. Delivery is best-effort: the
/// service never observes the outcome.
pub trait NotificationSink: Send + Sync {
    fn notify_about_transfer(&self, account: &Account, message: &str);
}

/// Sink that emits every notification as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotificationSink;

impl NotificationSink for LoggingNotificationSink {
    fn notify_about_transfer(&self, account: &Account, message: &str) {
        tracing::info!(
            account_id = %account.account_id,
            balance = %account.balance,
            "Sending notification to owner: {message}"
        );
    }
}
