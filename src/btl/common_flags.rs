use std::fmt;

/// Bitmask carried in the common header's `flags` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CommonFlags(pub u8);

impl CommonFlags {
    pub const ACK_REQUIRED: u8 = 0x01;
    pub const NETWORK_BYTE_ORDER: u8 = 0x02;
    pub const BUFFER_PINNED: u8 = 0x04;
    pub const BUFFER_CONTIGUOUS: u8 = 0x08;
    pub const NO_RDMA: u8 = 0x10;
    pub const RESTART: u8 = 0x20;

    const NAMES: [(u8, &'static str); 6] = [
        (Self::ACK_REQUIRED, "ack"),
        (Self::NETWORK_BYTE_ORDER, "nbo"),
        (Self::BUFFER_PINNED, "pin"),
        (Self::BUFFER_CONTIGUOUS, "contig"),
        (Self::NO_RDMA, "nordma"),
        (Self::RESTART, "restart"),
    ];

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, mask: u8) -> bool {
        self.0 & mask == mask
    }

    pub fn ack_required(self) -> bool {
        self.contains(Self::ACK_REQUIRED)
    }

    pub fn network_byte_order(self) -> bool {
        self.contains(Self::NETWORK_BYTE_ORDER)
    }

    pub fn buffer_pinned(self) -> bool {
        self.contains(Self::BUFFER_PINNED)
    }

    pub fn buffer_contiguous(self) -> bool {
        self.contains(Self::BUFFER_CONTIGUOUS)
    }

    pub fn no_rdma(self) -> bool {
        self.contains(Self::NO_RDMA)
    }

    pub fn restart(self) -> bool {
        self.contains(Self::RESTART)
    }
}

impl fmt::Display for CommonFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)?;
        let set: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(mask, _)| self.contains(*mask))
            .map(|(_, name)| *name)
            .collect();
        if !set.is_empty() {
            write!(f, " ({})", set.join(", "))?;
        }
        Ok(())
    }
}
