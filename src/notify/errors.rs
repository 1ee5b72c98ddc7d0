// 3rd party crates
use thiserror::Error;

/// Errors from composing or submitting a notification email. Callers log
/// these and move on; a lost notification never stops reconciliation.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to compose message: {0}")]
    Compose(#[from] lettre::error::Error),

    #[error("SMTP submission failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
