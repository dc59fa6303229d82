use chrono::{DateTime, Utc};

/// Per-packet facts supplied by the capture host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketContext {
    /// Identity of the packet within the capture, stable across passes.
    pub frame_id: u32,
    pub timestamp: DateTime<Utc>,
    pub src_port: u16,
    pub dst_port: u16,

    /// `false` when the packet is decoded again in a later pass.
    pub first_visit: bool,
}

impl PacketContext {
    pub fn new(frame_id: u32, timestamp: DateTime<Utc>, src_port: u16, dst_port: u16) -> Self {
        Self {
            frame_id,
            timestamp,
            src_port,
            dst_port,
            first_visit: true,
        }
    }

    /// The same packet, marked as already seen.
    pub fn revisited(self) -> Self {
        Self {
            first_visit: false,
            ..self
        }
    }
}
