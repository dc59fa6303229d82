use crate::{
    btl::BtlKind,
    classifier::{PacketClass, PortSet},
    constants::{BTL_KIND_HEADER_OFFSET, OOB_PORT_MIN, SYNC_PACKET_SIZE},
};

/// Picks the decoder path for a packet from its ports, length and first byte.
///
/// Pure: classification never touches connection state.
#[derive(Debug, Clone, Default)]
pub struct PacketClassifier {
    ports: PortSet,
}

impl PacketClassifier {
    pub fn new(ports: PortSet) -> Self {
        Self { ports }
    }

    pub fn ports(&self) -> &PortSet {
        &self.ports
    }

    pub fn classify(&self, buf: &[u8], src_port: u16, dst_port: u16) -> PacketClass {
        let class = self.classify_inner(buf, src_port, dst_port);
        tracing::debug!(src_port, dst_port, len = buf.len(), %class, "packet classified");
        class
    }

    fn classify_inner(&self, buf: &[u8], src_port: u16, dst_port: u16) -> PacketClass {
        if !self.ports.contains(src_port) && !self.ports.contains(dst_port) {
            return PacketClass::NotRecognized;
        }

        if src_port >= OOB_PORT_MIN && dst_port >= OOB_PORT_MIN {
            return PacketClass::Oob;
        }

        if buf.len() == SYNC_PACKET_SIZE {
            return PacketClass::Sync;
        }

        if buf.len() < BTL_KIND_HEADER_OFFSET {
            return PacketClass::NotRecognized;
        }

        match BtlKind::try_from(buf[0]) {
            Ok(kind) => PacketClass::Btl(kind),
            Err(_) => PacketClass::NotRecognized,
        }
    }
}
