use crate::{
    btl::{CollectiveTag, Communicator, require},
    constants::MATCH_HEADER_SIZE,
    error::DecodeError,
    wire::{Endianness, WireReader, WireWriter},
};
use std::fmt;

/// Header that lets the receiver match a message against posted receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHeader {
    pub ctx: u16,
    pub src: i32,
    pub tag: i32,
    pub seq: u16,
    /// Trailing heterogeneous-support padding, when the sender emitted it.
    pub padding: Option<u16>,
}

impl MatchHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        Self::decode_reserving(reader, 0)
    }

    /// Decodes a match header that is followed by `reserve` bytes belonging
    /// to an enclosing header.
    ///
    /// The padding test only looks at the bytes in front of that reserved tail.
    pub(crate) fn decode_reserving(
        reader: &mut WireReader<'_>,
        reserve: usize,
    ) -> Result<Self, DecodeError> {
        require(reader, MATCH_HEADER_SIZE)?;

        let mut r = reader.clone();
        let ctx = r.read_u16()?;
        let src = r.read_i32()?;
        let tag = r.read_i32()?;
        let seq = r.read_u16()?;

        let room = r.remaining().saturating_sub(reserve);

        // Some senders close the header with a 4-byte zero tail instead of
        // padding; that tail is left alone.
        let zero_tail = room == 4 && r.peek_bytes(4).is_ok_and(|tail| tail == [0u8; 4]);

        let padding = if room >= 2 && !zero_tail {
            Some(r.read_u16()?)
        } else {
            None
        };

        tracing::debug!(room, zero_tail, padded = padding.is_some(), "match padding");

        *reader = r;
        Ok(Self {
            ctx,
            src,
            tag,
            seq,
            padding,
        })
    }

    /// Encodes the header back into its wire form.
    pub fn encode(&self, endianness: Endianness) -> Vec<u8> {
        let writer = WireWriter::new(endianness)
            .u16(self.ctx)
            .i32(self.src)
            .i32(self.tag)
            .u16(self.seq);

        match self.padding {
            Some(padding) => writer.u16(padding).finish(),
            None => writer.finish(),
        }
    }

    pub fn padding_present(&self) -> bool {
        self.padding.is_some()
    }

    pub fn wire_len(&self) -> usize {
        MATCH_HEADER_SIZE + if self.padding_present() { 2 } else { 0 }
    }
}

impl fmt::Display for MatchHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) Src-Vpid={} Seq={}",
            CollectiveTag::label(self.tag),
            Communicator::label(self.ctx),
            self.src,
            self.seq
        )
    }
}
