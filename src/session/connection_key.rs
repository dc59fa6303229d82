use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transport {
    Tcp,
    Udp,
}

/// Identifies a connection independent of packet direction.
///
/// Endpoints are stored in sorted order so both directions of a
/// conversation map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionKey {
    low: SocketAddr,
    high: SocketAddr,
    transport: Transport,
}

impl ConnectionKey {
    pub fn new(src: SocketAddr, dst: SocketAddr, transport: Transport) -> Self {
        let (low, high) = if src <= dst { (src, dst) } else { (dst, src) };
        Self {
            low,
            high,
            transport,
        }
    }

    pub fn tcp(src_addr: IpAddr, src_port: u16, dst_addr: IpAddr, dst_port: u16) -> Self {
        Self::new(
            SocketAddr::new(src_addr, src_port),
            SocketAddr::new(dst_addr, dst_port),
            Transport::Tcp,
        )
    }

    pub fn endpoints(&self) -> (SocketAddr, SocketAddr) {
        (self.low, self.high)
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }
}
