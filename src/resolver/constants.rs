/// Public STUN server used for the primary discovery phase.
pub const STUN_SERVER: &str = "stun.l.google.com:19302";

/// HTTP "what is my IP" fallback services, tried in order.
pub const IP_CHECK_SERVICES: &[&str] = &[
    "https://api.ipify.org?format=text",
    "https://icanhazip.com",
    "https://ifconfig.me/ip",
];

/// Endpoint for the cheap reachability probe.
pub const PROBE_URL: &str = "https://www.google.com";

/// Bound on each resolution sub-step and on the probe, in seconds.
pub const NETWORK_TIMEOUT_SECS: u64 = 5;
