//! The reconciliation loop.
//!
//! One logical task owns all state and drives the per-cycle sequence:
//! probe connectivity, resolve the public IP, reconcile each configured
//! record, sleep. Side effects fire exactly once per state transition;
//! the startup notification is the only side effect retried until it
//! succeeds.

pub mod impls;
pub mod types;

pub use types::{Connectivity, ReconcilerState, Runner};
