pub mod console;
pub mod telegram;

use async_trait::async_trait;

/// Outbound alert channel.
///
/// Delivery is best-effort: the poll loop logs a failed send and keeps
/// monitoring, so implementations should fail loudly but never panic.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, title: &str, message: &str) -> anyhow::Result<()>;
}
