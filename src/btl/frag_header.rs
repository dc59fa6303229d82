use crate::{
    btl::require,
    constants::{ACK_MIN_SIZE, ACK_PADDED_SIZE, FRAG_MIN_SIZE, FRAG_PADDED_SIZE},
    error::DecodeError,
    wire::{RequestPtr, WireReader},
};
use std::fmt;

/// Follow-up fragment of a message whose first fragment was matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentHeader {
    /// 48-bit padding value, when present.
    pub padding: Option<u64>,
    pub frag_offset: u64,
    pub src_request: RequestPtr,
    pub dst_request: RequestPtr,
}

/// Receiver acknowledgement of a rendezvous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckHeader {
    pub padding: Option<u64>,
    pub src_request: RequestPtr,
    pub dst_request: RequestPtr,
    pub send_offset: u64,
}

impl FragmentHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, FRAG_MIN_SIZE)?;

        let mut r = reader.clone();
        let padding = if r.remaining() >= FRAG_PADDED_SIZE {
            Some(r.read_u48()?)
        } else {
            None
        };
        let frag_offset = r.read_u64()?;
        let src_request = r.read_request_ptr()?;
        let dst_request = r.read_request_ptr()?;

        *reader = r;
        Ok(Self {
            padding,
            frag_offset,
            src_request,
            dst_request,
        })
    }

    pub fn padding_present(&self) -> bool {
        self.padding.is_some()
    }

    pub fn wire_len(&self) -> usize {
        if self.padding_present() {
            FRAG_PADDED_SIZE
        } else {
            FRAG_MIN_SIZE
        }
    }
}

impl AckHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, ACK_MIN_SIZE)?;

        let mut r = reader.clone();
        let padding = if r.remaining() >= ACK_PADDED_SIZE {
            Some(r.read_u48()?)
        } else {
            None
        };
        let src_request = r.read_request_ptr()?;
        let dst_request = r.read_request_ptr()?;
        let send_offset = r.read_u64()?;

        *reader = r;
        Ok(Self {
            padding,
            src_request,
            dst_request,
            send_offset,
        })
    }

    pub fn padding_present(&self) -> bool {
        self.padding.is_some()
    }

    pub fn wire_len(&self) -> usize {
        if self.padding_present() {
            ACK_PADDED_SIZE
        } else {
            ACK_MIN_SIZE
        }
    }
}

impl fmt::Display for FragmentHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Msg-Offset={} Src-Req={} Des-Req={}",
            self.frag_offset, self.src_request, self.dst_request
        )
    }
}

impl fmt::Display for AckHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Src-Req={} Dst-Req={} Send-Offset={}",
            self.src_request, self.dst_request, self.send_offset
        )
    }
}
