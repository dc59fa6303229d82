use crate::{
    btl::{MatchHeader, require},
    constants::{
        RNDV_RESTART_NOTIFY_MIN_SIZE, RNDV_RESTART_NOTIFY_PADDING_THRESHOLD,
        RNDV_RESTART_NOTIFY_TAIL_SIZE,
    },
    error::DecodeError,
    wire::{RequestPtr, WireReader},
};
use std::fmt;

/// Asks the sender of a failed rendezvous to restart it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendezvousRestartNotifyHeader {
    pub match_header: MatchHeader,
    pub restart_seq: u8,
    /// Three zero bytes after `restart_seq`.
    pub padding: bool,
    pub src_request: RequestPtr,
    pub dst_request: RequestPtr,
    pub dst_rank: u32,
    pub job_id: u32,
    pub process_id: u32,
}

impl RendezvousRestartNotifyHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, RNDV_RESTART_NOTIFY_MIN_SIZE)?;

        let mut r = reader.clone();
        let match_header =
            MatchHeader::decode_reserving(&mut r, RNDV_RESTART_NOTIFY_TAIL_SIZE)?;
        let restart_seq = r.read_u8()?;

        let padding = r.remaining() >= RNDV_RESTART_NOTIFY_PADDING_THRESHOLD
            && r.peek_u48()? == 0;
        if padding {
            r.skip(3)?;
        }

        let src_request = r.read_request_ptr()?;
        let dst_request = r.read_request_ptr()?;
        let dst_rank = r.read_u32()?;
        let job_id = r.read_u32()?;
        let process_id = r.read_u32()?;

        *reader = r;
        Ok(Self {
            match_header,
            restart_seq,
            padding,
            src_request,
            dst_request,
            dst_rank,
            job_id,
            process_id,
        })
    }

    pub fn wire_len(&self) -> usize {
        self.match_header.wire_len()
            + RNDV_RESTART_NOTIFY_TAIL_SIZE
            + if self.padding { 3 } else { 0 }
    }
}

impl fmt::Display for RendezvousRestartNotifyHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Restart-Seq={} Dst-Vpid={} Jobid={} Vpid={} Src-Req={} Dst-Req={}",
            self.match_header,
            self.restart_seq,
            self.dst_rank,
            self.job_id,
            self.process_id,
            self.src_request,
            self.dst_request
        )
    }
}
