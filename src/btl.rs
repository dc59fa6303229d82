mod base_header;
mod btl_codec;
mod btl_kind;
mod btl_names;
mod common_flags;
mod decoded_header;
mod fin_header;
mod frag_header;
mod match_header;
mod rdma_header;
mod restart_notify_header;
mod rndv_header;

pub use base_header::{BaseHeader, CommonHeader};
pub use btl_codec::{BtlCodec, BtlPacket};
pub use btl_kind::BtlKind;
pub use btl_names::{BtlSendType, CollectiveTag, Communicator};
pub use common_flags::CommonFlags;
pub use decoded_header::DecodedHeader;
pub use fin_header::FinHeader;
pub use frag_header::{AckHeader, FragmentHeader};
pub use match_header::MatchHeader;
pub use rdma_header::RdmaHeader;
pub use restart_notify_header::RendezvousRestartNotifyHeader;
pub use rndv_header::{RendezvousExtension, RendezvousGetHeader, RendezvousHeader};

use crate::{error::DecodeError, wire::WireReader};

/// Fails with `Truncated` unless `needed` bytes remain in `reader`.
pub(crate) fn require(reader: &WireReader<'_>, needed: usize) -> Result<(), DecodeError> {
    if reader.remaining() < needed {
        return Err(DecodeError::Truncated {
            needed,
            available: reader.remaining(),
        });
    }
    Ok(())
}
