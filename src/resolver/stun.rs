//! Minimal RFC 5389 STUN binding exchange.
//!
//! Only what public-IP discovery needs: encode a binding request, send it
//! over UDP, and pull the XOR-MAPPED-ADDRESS attribute out of the success
//! response. No retransmission, no fingerprinting, no long-term auth.

// Standard library
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

// 3rd party crates
use tokio::net::UdpSocket;

// Current module imports
use super::errors::StunError;

const BINDING_REQUEST: u16 = 0x0001;
const BINDING_SUCCESS: u16 = 0x0101;
const MAGIC_COOKIE: u32 = 0x2112_A442;
const ATTR_XOR_MAPPED_ADDRESS: u16 = 0x0020;
const HEADER_LEN: usize = 20;

/// Fresh 96-bit transaction id, seeded from the thread-local hasher.
pub fn new_transaction_id() -> [u8; 12] {
    let mut id = [0u8; 12];
    let a = RandomState::new().build_hasher().finish().to_be_bytes();
    let b = RandomState::new().build_hasher().finish().to_be_bytes();
    id[..8].copy_from_slice(&a);
    id[8..].copy_from_slice(&b[..4]);
    id
}

/// Encodes a binding request with an empty attribute section.
pub fn encode_binding_request(transaction_id: &[u8; 12]) -> [u8; HEADER_LEN] {
    let mut message = [0u8; HEADER_LEN];
    message[..2].copy_from_slice(&BINDING_REQUEST.to_be_bytes());
    // message length stays zero: no attributes.
    message[4..8].copy_from_slice(&MAGIC_COOKIE.to_be_bytes());
    message[8..].copy_from_slice(transaction_id);
    message
}

/// Extracts the reflexive address from a binding success response.
pub fn parse_binding_response(
    buf: &[u8],
    transaction_id: &[u8; 12],
) -> Result<IpAddr, StunError> {
    if buf.len() < HEADER_LEN {
        return Err(StunError::ShortResponse(buf.len()));
    }

    let message_type = u16::from_be_bytes([buf[0], buf[1]]);
    if message_type != BINDING_SUCCESS {
        return Err(StunError::UnexpectedMessageType(message_type));
    }

    let cookie = u32::from_be_bytes([buf[4], buf[5], buf[6], buf[7]]);
    if cookie != MAGIC_COOKIE {
        return Err(StunError::InvalidMagic);
    }

    if &buf[8..HEADER_LEN] != transaction_id {
        return Err(StunError::TransactionMismatch);
    }

    let body_len = u16::from_be_bytes([buf[2], buf[3]]) as usize;
    let body_end = HEADER_LEN + body_len.min(buf.len() - HEADER_LEN);

    let mut offset = HEADER_LEN;
    while offset + 4 <= body_end {
        let attr_type = u16::from_be_bytes([buf[offset], buf[offset + 1]]);
        let attr_len = u16::from_be_bytes([buf[offset + 2], buf[offset + 3]]) as usize;
        let value_start = offset + 4;

        if value_start + attr_len > body_end {
            return Err(StunError::MalformedAttribute(offset));
        }

        if attr_type == ATTR_XOR_MAPPED_ADDRESS {
            return decode_xor_mapped_address(
                &buf[value_start..value_start + attr_len],
                transaction_id,
            );
        }

        // Attribute values are padded to a 4-byte boundary.
        offset = value_start + attr_len.div_ceil(4) * 4;
    }

    Err(StunError::NoMappedAddress)
}

fn decode_xor_mapped_address(
    value: &[u8],
    transaction_id: &[u8; 12],
) -> Result<IpAddr, StunError> {
    if value.len() < 8 {
        return Err(StunError::MalformedAttribute(0));
    }

    let family = value[1];
    let cookie = MAGIC_COOKIE.to_be_bytes();

    match family {
        0x01 => {
            let mut octets = [0u8; 4];
            for (i, octet) in octets.iter_mut().enumerate() {
                *octet = value[4 + i] ^ cookie[i];
            }
            Ok(IpAddr::V4(Ipv4Addr::from(octets)))
        }
        0x02 => {
            if value.len() < 20 {
                return Err(StunError::MalformedAttribute(0));
            }
            // v6 addresses are xored with cookie || transaction id.
            let mut key = [0u8; 16];
            key[..4].copy_from_slice(&cookie);
            key[4..].copy_from_slice(transaction_id);

            let mut octets = [0u8; 16];
            for (i, octet) in octets.iter_mut().enumerate() {
                *octet = value[4 + i] ^ key[i];
            }
            Ok(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        other => Err(StunError::UnsupportedFamily(other)),
    }
}

/// One request/response round trip. The caller bounds the whole exchange
/// (socket setup included) with a timeout.
pub async fn binding_exchange(server: &str) -> Result<IpAddr, StunError> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect(server).await?;

    let transaction_id = new_transaction_id();
    socket.send(&encode_binding_request(&transaction_id)).await?;

    let mut buf = [0u8; 548];
    let received = socket.recv(&mut buf).await?;

    parse_binding_response(&buf[..received], &transaction_id)
}
