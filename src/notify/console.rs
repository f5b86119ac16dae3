use async_trait::async_trait;

use super::NotificationSink;

/// Fallback sink for runs without push credentials.
pub struct ConsoleNotifier;

#[async_trait]
impl NotificationSink for ConsoleNotifier {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn send(&self, title: &str, message: &str) -> anyhow::Result<()> {
        tracing::info!("🔔 {}: {}", title, message);
        Ok(())
    }
}
