use crate::{
    btl::{MatchHeader, require},
    constants::{FIN_MIN_SIZE, FIN_TAIL_SIZE},
    error::DecodeError,
    wire::{RequestPtr, WireReader},
};
use std::fmt;

/// Completion notice for an RDMA transfer.
///
/// Senders with restart support prepend a match header; the only way to
/// tell the shapes apart is the exact number of bytes that remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinHeader {
    pub padding: Option<u16>,
    pub match_header: Option<MatchHeader>,
    pub fail: u32,
    pub descriptor: RequestPtr,
}

impl FinHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, FIN_MIN_SIZE)?;

        let mut r = reader.clone();

        // padding (2) + fin (12), or padding (2) + padded match (14) + fin (12)
        let padding = if matches!(r.remaining(), 14 | 28) {
            Some(r.read_u16()?)
        } else {
            None
        };

        // match (12) + fin (12), or padded match (14) + fin (12)
        let match_header = if matches!(r.remaining(), 24 | 26) {
            Some(MatchHeader::decode_reserving(&mut r, FIN_TAIL_SIZE)?)
        } else {
            None
        };

        let fail = r.read_u32()?;
        let descriptor = r.read_request_ptr()?;

        *reader = r;
        Ok(Self {
            padding,
            match_header,
            fail,
            descriptor,
        })
    }

    pub fn padding_present(&self) -> bool {
        self.padding.is_some()
    }

    pub fn wire_len(&self) -> usize {
        let padding = if self.padding_present() { 2 } else { 0 };
        let matched = self.match_header.as_ref().map_or(0, MatchHeader::wire_len);
        padding + matched + FIN_TAIL_SIZE
    }
}

impl fmt::Display for FinHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(match_header) = &self.match_header {
            write!(f, "{} ", match_header)?;
        }
        write!(f, "Failed={} Descriptor={}", self.fail, self.descriptor)
    }
}
