use crate::{
    btl::{MatchHeader, require},
    constants::{RGET_MIN_SIZE, RGET_PREFIX_MIN_SIZE, RNDV_EXTENSION_THRESHOLD, RNDV_MIN_SIZE},
    error::DecodeError,
    wire::{RequestPtr, WireReader},
};
use std::fmt;

/// Rendezvous header: a match header plus the size and handle of a large send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendezvousHeader {
    pub match_header: MatchHeader,
    pub msg_len: u64,
    pub src_request: RequestPtr,
    /// Present on senders with restart support.
    pub extension: Option<RendezvousExtension>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendezvousExtension {
    pub dst_request: RequestPtr,
    pub restart_seq: u8,
}

/// Rendezvous header followed by a registered-memory descriptor for RDMA get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendezvousGetHeader {
    pub rendezvous: RendezvousHeader,
    pub seg_count: u32,
    pub padding: Option<u32>,
    pub src_descriptor: RequestPtr,
}

impl RendezvousHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let mut r = reader.clone();
        let match_header = MatchHeader::decode(&mut r)?;

        require(&r, RNDV_MIN_SIZE)?;
        let msg_len = r.read_u64()?;
        let src_request = r.read_request_ptr()?;

        // The extension carries no marker; only the remaining length tells.
        let extension = if r.remaining() >= RNDV_EXTENSION_THRESHOLD {
            Some(RendezvousExtension {
                dst_request: r.read_request_ptr()?,
                restart_seq: r.read_u8()?,
            })
        } else {
            None
        };

        *reader = r;
        Ok(Self {
            match_header,
            msg_len,
            src_request,
            extension,
        })
    }

    pub fn is_extended(&self) -> bool {
        self.extension.is_some()
    }

    pub fn wire_len(&self) -> usize {
        self.match_header.wire_len() + RNDV_MIN_SIZE + if self.is_extended() { 9 } else { 0 }
    }
}

impl RendezvousGetHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, RGET_PREFIX_MIN_SIZE)?;

        let mut r = reader.clone();
        let rendezvous = RendezvousHeader::decode(&mut r)?;

        require(&r, RGET_MIN_SIZE)?;
        let seg_count = r.read_u32()?;

        // Room for padding (4) + descriptor (8)
        let padding = if r.remaining() >= 12 {
            Some(r.read_u32()?)
        } else {
            None
        };
        let src_descriptor = r.read_request_ptr()?;

        *reader = r;
        Ok(Self {
            rendezvous,
            seg_count,
            padding,
            src_descriptor,
        })
    }

    pub fn padding_present(&self) -> bool {
        self.padding.is_some()
    }

    pub fn wire_len(&self) -> usize {
        self.rendezvous.wire_len() + RGET_MIN_SIZE + if self.padding_present() { 4 } else { 0 }
    }
}

impl fmt::Display for RendezvousHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Msg-Len={}", self.match_header, self.msg_len)?;
        if let Some(ext) = &self.extension {
            write!(f, " Restartseq={}", ext.restart_seq)?;
        }
        Ok(())
    }
}

impl fmt::Display for RendezvousGetHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Num-Seg={} Src-Des={}",
            self.rendezvous, self.seg_count, self.src_descriptor
        )
    }
}
