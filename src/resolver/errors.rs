// 3rd party crates
use thiserror::Error;

/// Failures of the STUN discovery phase. These are never surfaced to the
/// reconciliation loop; they only demote resolution to the HTTP fallback.
#[derive(Debug, Error)]
pub enum StunError {
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),

    #[error("response too short ({0} bytes)")]
    ShortResponse(usize),

    #[error("response missing magic cookie")]
    InvalidMagic,

    #[error("unexpected message type {0:#06x}")]
    UnexpectedMessageType(u16),

    #[error("transaction id mismatch")]
    TransactionMismatch,

    #[error("malformed attribute at offset {0}")]
    MalformedAttribute(usize),

    #[error("unsupported address family {0:#04x}")]
    UnsupportedFamily(u8),

    #[error("response carried no XOR-MAPPED-ADDRESS attribute")]
    NoMappedAddress,
}

/// Terminal resolution failure: the STUN phase and every HTTP fallback
/// service failed to produce a syntactically valid IP address.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no IP discovery service returned a valid public IP address")]
    AllServicesFailed,
}
