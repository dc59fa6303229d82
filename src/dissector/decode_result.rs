use crate::{btl::BtlPacket, error::DecodeError, oob::OobPacket, sync::SyncRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedRecord {
    Btl(BtlPacket),
    Oob(OobPacket),
    Sync(SyncRecord),
}

/// What one decode call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    pub record: DecodedRecord,

    /// Bytes accounted for by decoded structure. For BTL packets this stops at
    /// the end of the headers; the payload span is in the record.
    pub bytes_consumed: usize,

    /// One-line description of the packet.
    pub summary: String,

    /// Non-fatal condition met while decoding.
    pub notice: Option<DecodeError>,
}

impl DecodeResult {
    pub fn btl(&self) -> Option<&BtlPacket> {
        match &self.record {
            DecodedRecord::Btl(packet) => Some(packet),
            _ => None,
        }
    }

    pub fn oob(&self) -> Option<&OobPacket> {
        match &self.record {
            DecodedRecord::Oob(packet) => Some(packet),
            _ => None,
        }
    }

    pub fn sync(&self) -> Option<&SyncRecord> {
        match &self.record {
            DecodedRecord::Sync(record) => Some(record),
            _ => None,
        }
    }
}
