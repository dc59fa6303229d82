use crate::btl::BtlKind;
use std::fmt;

/// Decoder path chosen for a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketClass {
    Oob,
    Sync,
    Btl(BtlKind),
    NotRecognized,
}

impl PacketClass {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, PacketClass::NotRecognized)
    }
}

impl fmt::Display for PacketClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketClass::Oob => write!(f, "OOB"),
            PacketClass::Sync => write!(f, "SYNC"),
            PacketClass::Btl(kind) => write!(f, "BTL {}", kind),
            PacketClass::NotRecognized => write!(f, "not recognized"),
        }
    }
}
