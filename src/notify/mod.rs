//! Operator email notifications.
//!
//! Three event kinds, each a one-shot, fire-and-forget send: startup,
//! DNS record updated, internet connection restored. Failures are
//! reported to the caller and logged there; they never abort a
//! reconciliation cycle.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod templates;
pub mod traits;
pub mod types;

pub use errors::NotifyError;
pub use traits::Notifier;
pub use types::{EmailNotifier, NotificationEvent};
