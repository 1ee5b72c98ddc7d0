//! Public IP resolution and connectivity probing.
//!
//! Resolution runs two phases, never concurrently: a STUN binding
//! exchange against a public discovery server, then sequential HTTP
//! fallbacks that return the caller's address in the response body. The
//! connectivity probe is deliberately separate so "no internet" and
//! "internet present but IP lookup failed" stay distinguishable.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod stun;
pub mod traits;
pub mod types;

pub use errors::ResolveError;
pub use traits::{ConnectivityProbe, PublicIpResolver};
pub use types::{HttpProbe, IpResolver};
