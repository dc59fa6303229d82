use crate::btl::{
    AckHeader, BtlKind, FinHeader, FragmentHeader, MatchHeader, RdmaHeader,
    RendezvousGetHeader, RendezvousHeader, RendezvousRestartNotifyHeader,
};
use std::fmt;

/// The per-kind header that follows the base and common headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedHeader {
    /// Only the base and common headers were decoded.
    BaseCommon,
    Match(MatchHeader),
    Rendezvous(RendezvousHeader),
    RendezvousGet(RendezvousGetHeader),
    Fragment(FragmentHeader),
    Ack(AckHeader),
    Rdma(RdmaHeader),
    Fin(FinHeader),
    RendezvousRestartNotify(RendezvousRestartNotifyHeader),
}

impl DecodedHeader {
    /// Bytes the per-kind header occupies on the wire.
    pub fn consumed_bytes(&self) -> usize {
        match self {
            DecodedHeader::BaseCommon => 0,
            DecodedHeader::Match(h) => h.wire_len(),
            DecodedHeader::Rendezvous(h) => h.wire_len(),
            DecodedHeader::RendezvousGet(h) => h.wire_len(),
            DecodedHeader::Fragment(h) => h.wire_len(),
            DecodedHeader::Ack(h) => h.wire_len(),
            DecodedHeader::Rdma(h) => h.wire_len(),
            DecodedHeader::Fin(h) => h.wire_len(),
            DecodedHeader::RendezvousRestartNotify(h) => h.wire_len(),
        }
    }

    pub fn kind(&self) -> Option<BtlKind> {
        match self {
            DecodedHeader::BaseCommon => None,
            DecodedHeader::Match(_) => Some(BtlKind::Match),
            DecodedHeader::Rendezvous(_) => Some(BtlKind::Rendezvous),
            DecodedHeader::RendezvousGet(_) => Some(BtlKind::RendezvousGet),
            DecodedHeader::Fragment(_) => Some(BtlKind::Fragment),
            DecodedHeader::Ack(_) => Some(BtlKind::Ack),
            DecodedHeader::Rdma(_) => Some(BtlKind::Put),
            DecodedHeader::Fin(_) => Some(BtlKind::Fin),
            DecodedHeader::RendezvousRestartNotify(_) => Some(BtlKind::RendezvousRestartNotify),
        }
    }
}

impl fmt::Display for DecodedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedHeader::BaseCommon => Ok(()),
            DecodedHeader::Match(h) => h.fmt(f),
            DecodedHeader::Rendezvous(h) => h.fmt(f),
            DecodedHeader::RendezvousGet(h) => h.fmt(f),
            DecodedHeader::Fragment(h) => h.fmt(f),
            DecodedHeader::Ack(h) => h.fmt(f),
            DecodedHeader::Rdma(h) => h.fmt(f),
            DecodedHeader::Fin(h) => h.fmt(f),
            DecodedHeader::RendezvousRestartNotify(h) => h.fmt(f),
        }
    }
}
