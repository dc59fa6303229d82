use crate::{
    btl::require,
    constants::{RDMA_MIN_SIZE, RDMA_PADDED_SIZE},
    error::DecodeError,
    wire::{RequestPtr, WireReader},
};
use std::fmt;

/// PUT header describing a remote memory segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdmaHeader {
    pub padding: Option<u16>,
    pub seg_count: u32,
    pub dst_request: RequestPtr,
    pub src_descriptor: RequestPtr,
    pub recv_request: RequestPtr,
    pub rdma_offset: u64,
    pub seg_addr: RequestPtr,
    pub seg_len: u64,
}

impl RdmaHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, RDMA_MIN_SIZE)?;

        let mut r = reader.clone();
        let padding = if r.remaining() >= RDMA_PADDED_SIZE {
            Some(r.read_u16()?)
        } else {
            None
        };
        let seg_count = r.read_u32()?;
        let dst_request = r.read_request_ptr()?;
        let src_descriptor = r.read_request_ptr()?;
        let recv_request = r.read_request_ptr()?;
        let rdma_offset = r.read_u64()?;
        let seg_addr = r.read_request_ptr()?;
        let seg_len = r.read_u64()?;

        *reader = r;
        Ok(Self {
            padding,
            seg_count,
            dst_request,
            src_descriptor,
            recv_request,
            rdma_offset,
            seg_addr,
            seg_len,
        })
    }

    pub fn padding_present(&self) -> bool {
        self.padding.is_some()
    }

    pub fn wire_len(&self) -> usize {
        if self.padding_present() {
            RDMA_PADDED_SIZE
        } else {
            RDMA_MIN_SIZE
        }
    }
}

impl fmt::Display for RdmaHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seg-Num={} RDMA-Offset={} Seg-Addr={} Seg-Len={}",
            self.seg_count, self.rdma_offset, self.seg_addr, self.seg_len
        )
    }
}
