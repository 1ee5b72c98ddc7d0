/// Base URL for the Cloudflare v4 API.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Upper bound on any single API call. The reconciliation cadence must
/// never be held hostage by one hung request.
pub const API_TIMEOUT_SECS: u64 = 30;
