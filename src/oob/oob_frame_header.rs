use crate::{
    btl::require,
    constants::OOB_HEADER_SIZE,
    error::DecodeError,
    oob::{OobMsgType, RmlTag},
    wire::{WireReader, WireWriter},
};
use std::fmt;

/// Fixed 28-byte header in front of every OOB message, always big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OobFrameHeader {
    pub origin_job_id: u32,
    pub origin_process_id: u32,
    pub dst_job_id: u32,
    pub dst_process_id: u32,
    pub msg_type: u32,
    pub rml_tag: u32,
    /// Length of the message body that follows.
    pub byte_length: u32,
}

impl OobFrameHeader {
    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        require(reader, OOB_HEADER_SIZE)?;

        // Byte order is fixed regardless of the reader's preference.
        let mut r = WireReader::network(reader.peek_bytes(OOB_HEADER_SIZE)?);
        let header = Self {
            origin_job_id: r.read_u32()?,
            origin_process_id: r.read_u32()?,
            dst_job_id: r.read_u32()?,
            dst_process_id: r.read_u32()?,
            msg_type: r.read_u32()?,
            rml_tag: r.read_u32()?,
            byte_length: r.read_u32()?,
        };

        reader.skip(OOB_HEADER_SIZE)?;
        Ok(header)
    }

    pub fn encode(&self) -> Vec<u8> {
        WireWriter::network()
            .u32(self.origin_job_id)
            .u32(self.origin_process_id)
            .u32(self.dst_job_id)
            .u32(self.dst_process_id)
            .u32(self.msg_type)
            .u32(self.rml_tag)
            .u32(self.byte_length)
            .finish()
    }

    pub fn rml_tag_name(&self) -> String {
        RmlTag::name_of(self.rml_tag)
    }

    pub fn msg_type_name(&self) -> String {
        OobMsgType::name_of(self.msg_type)
    }
}

impl fmt::Display for OobFrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Header: Jobid-Origin={} Vpid-Origin={} Jobid-Dst={} Vpid-Dst={} Type={} Tag={} Length={}",
            self.origin_job_id,
            self.origin_process_id,
            self.dst_job_id,
            self.dst_process_id,
            self.msg_type_name(),
            self.rml_tag_name(),
            self.byte_length
        )
    }
}
