use crate::constants::OOB_HEADER_SIZE;

/// Direction of an OOB connection.
///
/// `Channel1` carries traffic whose source port is above its destination
/// port. Everything else, including equal ports, is `Channel2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelDirection {
    Channel1,
    Channel2,
}

impl ChannelDirection {
    pub fn from_ports(src_port: u16, dst_port: u16) -> Self {
        if src_port > dst_port {
            ChannelDirection::Channel1
        } else {
            ChannelDirection::Channel2
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ChannelDirection::Channel1 => 0,
            ChannelDirection::Channel2 => 1,
        }
    }
}

/// Reassembly state of one direction of an OOB connection.
///
/// Cloned as-is to snapshot the state in front of a packet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OobChannel {
    /// Tag of the message in progress (or the last one seen).
    pub rml_tag: u32,

    /// Body bytes of the current message not yet seen. Zero means the
    /// next byte on this channel starts a frame header.
    pub bytes_remaining: u32,

    /// Body length announced by the current message's header.
    pub message_len: u32,

    /// Leading bytes of a frame header cut off at the end of a packet.
    pub partial_header: Vec<u8>,
}

impl OobChannel {
    pub fn is_mid_message(&self) -> bool {
        self.bytes_remaining > 0
    }

    pub fn has_partial_header(&self) -> bool {
        !self.partial_header.is_empty()
    }

    /// Header bytes still missing before the next header can be decoded.
    pub fn header_bytes_needed(&self) -> usize {
        OOB_HEADER_SIZE - self.partial_header.len()
    }
}
