use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// Discriminant carried in the first byte of every BTL packet.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum BtlKind {
    Match = 65,
    Rendezvous = 66,
    RendezvousGet = 67,
    Ack = 68,
    Nack = 69,
    Fragment = 70,
    Get = 71,
    Put = 72,
    Fin = 73,
    RendezvousRestartNotify = 74,
    RendezvousRestartAck = 75,
    RendezvousRestartNack = 76,
    RecvErrorNotify = 77,
}

impl BtlKind {
    pub fn name(self) -> &'static str {
        match self {
            BtlKind::Match => "MATCH",
            BtlKind::Rendezvous => "RNDV",
            BtlKind::RendezvousGet => "RGET",
            BtlKind::Ack => "ACK",
            BtlKind::Nack => "NACK",
            BtlKind::Fragment => "FRAG",
            BtlKind::Get => "GET",
            BtlKind::Put => "PUT",
            BtlKind::Fin => "FIN",
            BtlKind::RendezvousRestartNotify => "RNDVRESTARTNOTIFY",
            BtlKind::RendezvousRestartAck => "RNDVRESTARTACK",
            BtlKind::RendezvousRestartNack => "RNDVRESTARTNACK",
            BtlKind::RecvErrorNotify => "RECVERRNOTIFY",
        }
    }

    /// Whether a per-kind header decoder exists. The rest are recognized by
    /// tag only.
    pub fn is_implemented(self) -> bool {
        !matches!(
            self,
            BtlKind::Nack
                | BtlKind::Get
                | BtlKind::RendezvousRestartAck
                | BtlKind::RendezvousRestartNack
                | BtlKind::RecvErrorNotify
        )
    }

    /// Name for a raw tag byte, falling back to its hex value.
    pub fn name_of(tag: u8) -> String {
        match BtlKind::try_from(tag) {
            Ok(kind) => kind.name().to_string(),
            Err(_) => format!("Unknown (0x{:02x})", tag),
        }
    }
}

impl fmt::Display for BtlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
