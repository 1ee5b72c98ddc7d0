// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::types::NotificationEvent;

/// Fire-and-forget delivery of operator notifications. At most one
/// delivery attempt per event; no retry state is retained.
#[async_trait]
pub trait Notifier: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    async fn notify(&self, event: &NotificationEvent) -> Result<(), Self::Error>;
}
