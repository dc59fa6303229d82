use crate::{
    btl::{BtlKind, BtlSendType, CommonFlags, require},
    constants::{BTL_BASE_HEADER_SIZE, BTL_COMMON_HEADER_SIZE},
    error::DecodeError,
    wire::{Endianness, WireReader, WireWriter},
};
use std::fmt;

/// The 8-byte prefix of every BTL packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseHeader {
    pub kind: BtlKind,
    /// Raw transfer type; see `BtlSendType`.
    pub send_type: u8,
    pub count: u16,
    pub size: u32,
}

/// The 2-byte header following `BaseHeader`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonHeader {
    /// Raw kind byte, named with the same table as `BaseHeader::kind`.
    pub kind_tag: u8,
    pub flags: CommonFlags,
}

impl BaseHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, BTL_BASE_HEADER_SIZE)?;

        let mut r = reader.clone();
        let tag = r.read_u8()?;
        let kind = BtlKind::try_from(tag).map_err(|_| DecodeError::NotRecognized)?;
        let send_type = r.read_u8()?;
        let count = r.read_u16()?;
        let size = r.read_u32()?;

        *reader = r;
        Ok(Self {
            kind,
            send_type,
            count,
            size,
        })
    }

    pub fn encode(&self, endianness: Endianness) -> Vec<u8> {
        WireWriter::new(endianness)
            .u8(self.kind.into())
            .u8(self.send_type)
            .u16(self.count)
            .u32(self.size)
            .finish()
    }

    pub fn send_type_name(&self) -> String {
        BtlSendType::name_of(self.send_type)
    }
}

impl CommonHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, BTL_COMMON_HEADER_SIZE)?;

        let mut r = reader.clone();
        let kind_tag = r.read_u8()?;
        let flags = CommonFlags(r.read_u8()?);

        *reader = r;
        Ok(Self { kind_tag, flags })
    }

    pub fn encode(&self) -> [u8; 2] {
        [self.kind_tag, self.flags.bits()]
    }
}

impl fmt::Display for BaseHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base: {}, type: {}, count: {}, size: {}",
            self.kind,
            self.send_type_name(),
            self.count,
            self.size
        )
    }
}

impl fmt::Display for CommonHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, flags: {}",
            BtlKind::name_of(self.kind_tag),
            self.flags
        )
    }
}
