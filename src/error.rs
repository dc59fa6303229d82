use crate::{btl::BtlKind, wire::WireError};
use std::fmt;

/// Why a packet, or part of one, could not be decoded.
///
/// None of these are fatal: callers show whatever could not be decoded as
/// opaque bytes and move on to the next packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The bytes do not belong to this protocol. Nothing was consumed.
    NotRecognized,

    /// A header needed more bytes than were available. Nothing was consumed.
    Truncated { needed: usize, available: usize },

    /// The BTL kind is known but has no decoder.
    Unimplemented(BtlKind),

    /// A lookup found a record whose key fields disagree.
    TransactionMismatch,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotRecognized => write!(f, "not recognized"),
            DecodeError::Truncated { needed, available } => write!(
                f,
                "truncated: needed {} bytes, {} available",
                needed, available
            ),
            DecodeError::Unimplemented(kind) => write!(f, "{} header not implemented", kind),
            DecodeError::TransactionMismatch => write!(f, "transaction key mismatch"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<WireError> for DecodeError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::OutOfBounds {
                needed, available, ..
            } => DecodeError::Truncated { needed, available },
        }
    }
}
