use crate::{
    constants::OOB_HEADER_SIZE,
    error::DecodeError,
    oob::{ChannelDirection, OobChannel, OobFrameHeader, OobMessage, RmlTag},
    wire::WireReader,
};
use std::{collections::HashMap, fmt, ops::Range};

/// One piece of an OOB packet, in packet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OobSegment {
    /// A frame header. `range` covers only the header bytes in this packet,
    /// which is less than 28 when the header began in an earlier packet.
    Header {
        range: Range<usize>,
        header: OobFrameHeader,
    },

    /// Start of a frame header that continues in the next packet.
    PartialHeader { range: Range<usize> },

    /// A body that starts and ends in this packet.
    Message(OobMessage),

    /// A slice of a body spanning packets. `bytes_remaining` is what is
    /// still expected after this slice.
    MessagePart {
        rml_tag: u32,
        range: Range<usize>,
        bytes_remaining: u32,
    },
}

/// Everything decoded from one OOB packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OobPacket {
    pub direction: ChannelDirection,
    pub segments: Vec<OobSegment>,
    pub bytes_consumed: usize,
}

impl OobPacket {
    pub fn headers(&self) -> impl Iterator<Item = &OobFrameHeader> {
        self.segments.iter().filter_map(|segment| match segment {
            OobSegment::Header { header, .. } => Some(header),
            _ => None,
        })
    }

    pub fn messages(&self) -> impl Iterator<Item = &OobMessage> {
        self.segments.iter().filter_map(|segment| match segment {
            OobSegment::Message(message) => Some(message),
            _ => None,
        })
    }

    /// One-line description in the form `src→dst [OOB] segments`.
    pub fn summary(&self, src_port: u16, dst_port: u16) -> String {
        let mut line = format!("{}\u{2192}{} [OOB]", src_port, dst_port);
        for segment in &self.segments {
            line.push(' ');
            line.push_str(&segment.to_string());
        }
        line
    }
}

impl fmt::Display for OobSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OobSegment::Header { header, .. } => write!(f, "{}", header),
            OobSegment::PartialHeader { range } => {
                write!(f, "Header: (continued) Length={}", range.len())
            }
            OobSegment::Message(message) => write!(f, "{}", message),
            OobSegment::MessagePart { rml_tag, range, .. } => write!(
                f,
                "Message: RML-Tag={} Length={}",
                RmlTag::name_of(*rml_tag),
                range.len()
            ),
        }
    }
}

/// Reassembles the OOB byte stream of one TCP connection.
///
/// Each direction is tracked independently. OOB frames are not aligned with
/// TCP segments: a header may be followed by only part of its body, a body
/// may span many packets, and one packet may carry several frames.
///
/// Packets can be decoded again out of order (a viewer jumping back to an
/// earlier packet). The channel state in front of every packet is recorded
/// on first visit. A later visit decodes against a copy of that record and
/// leaves the live channels alone, so replaying a packet yields exactly what
/// its first decode did and the next first visit continues where the stream
/// left off.
#[derive(Debug, Default)]
pub struct OobStreamDecoder {
    channels: [OobChannel; 2],
    snapshots: HashMap<u32, OobChannel>, // Channel state in front of each packet, by frame id
}

impl OobStreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self, direction: ChannelDirection) -> &OobChannel {
        &self.channels[direction.index()]
    }

    pub fn snapshot(&self, frame_id: u32) -> Option<&OobChannel> {
        self.snapshots.get(&frame_id)
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Decodes one packet travelling in `direction`.
    ///
    /// On a first visit the packet is decoded against the live channel of
    /// its direction, which then advances past it. The state the channel had
    /// before the packet is recorded under `frame_id`.
    ///
    /// On a later visit the recorded state is used instead and the live
    /// channels are not modified.
    ///
    /// # Arguments
    ///
    /// * `buf` - The TCP payload of the packet.
    /// * `frame_id` - Stable identity of the packet within the capture.
    /// * `direction` - Which half of the connection the packet belongs to.
    /// * `first_visit` - Whether this is the first time the packet is seen.
    ///
    /// # Returns
    ///
    /// The segments found in the packet. A revisited packet with no recorded
    /// state was never decoded on its first visit, so it fails the same way:
    /// `DecodeError::Truncated` against a full frame header.
    pub fn decode(
        &mut self,
        buf: &[u8],
        frame_id: u32,
        direction: ChannelDirection,
        first_visit: bool,
    ) -> Result<OobPacket, DecodeError> {
        let index = direction.index();

        let segments = if first_visit {
            self.snapshots.insert(frame_id, self.channels[index].clone());

            let mut channel = self.channels[index].clone();
            let segments = Self::decode_segments(&mut channel, buf)?;
            self.channels[index] = channel;
            segments
        } else {
            let Some(snapshot) = self.snapshots.get(&frame_id) else {
                tracing::debug!(frame_id, "revisited oob packet was rejected on first visit");
                return Err(DecodeError::Truncated {
                    needed: OOB_HEADER_SIZE,
                    available: buf.len(),
                });
            };

            let mut channel = snapshot.clone();
            Self::decode_segments(&mut channel, buf)?
        };

        tracing::trace!(
            frame_id,
            ?direction,
            first_visit,
            segments = segments.len(),
            bytes_remaining = self.channels[index].bytes_remaining,
            "oob packet decoded"
        );

        Ok(OobPacket {
            direction,
            segments,
            bytes_consumed: buf.len(),
        })
    }

    fn decode_segments(
        channel: &mut OobChannel,
        buf: &[u8],
    ) -> Result<Vec<OobSegment>, DecodeError> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        while cursor < buf.len() {
            let available = buf.len() - cursor;

            if !channel.is_mid_message() {
                let needed = channel.header_bytes_needed();

                if available < needed {
                    channel.partial_header.extend_from_slice(&buf[cursor..]);
                    segments.push(OobSegment::PartialHeader {
                        range: cursor..buf.len(),
                    });
                    break;
                }

                let mut header_bytes = std::mem::take(&mut channel.partial_header);
                header_bytes.extend_from_slice(&buf[cursor..cursor + needed]);
                debug_assert_eq!(header_bytes.len(), OOB_HEADER_SIZE);

                let header = OobFrameHeader::decode(&mut WireReader::network(&header_bytes))?;
                channel.rml_tag = header.rml_tag;
                channel.bytes_remaining = header.byte_length;
                channel.message_len = header.byte_length;

                tracing::debug!(
                    rml_tag = header.rml_tag,
                    byte_length = header.byte_length,
                    "oob frame header"
                );

                segments.push(OobSegment::Header {
                    range: cursor..cursor + needed,
                    header,
                });
                cursor += needed;
                continue;
            }

            let remaining = channel.bytes_remaining as usize;

            if available < remaining {
                channel.bytes_remaining -= available as u32;
                segments.push(OobSegment::MessagePart {
                    rml_tag: channel.rml_tag,
                    range: cursor..buf.len(),
                    bytes_remaining: channel.bytes_remaining,
                });
                break;
            }

            let starts_here = channel.bytes_remaining == channel.message_len;
            let end = cursor + remaining;
            channel.bytes_remaining = 0;

            // The tail of a body that began in an earlier packet stays opaque:
            // its leading bytes, which select the layout, are not in this buffer.
            if starts_here {
                segments.push(OobSegment::Message(OobMessage::decode(
                    channel.rml_tag,
                    &buf[cursor..end],
                    cursor,
                )));
            } else {
                segments.push(OobSegment::MessagePart {
                    rml_tag: channel.rml_tag,
                    range: cursor..end,
                    bytes_remaining: 0,
                });
            }
            cursor = end;
        }

        Ok(segments)
    }
}
