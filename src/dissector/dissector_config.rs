use crate::{
    classifier::{PortSet, PortSetParseError},
    wire::Endianness,
};

/// Settings a dissector is built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DissectorConfig {
    /// Byte order of BTL multi-byte fields. OOB and sync are always big-endian.
    pub endianness: Endianness,

    /// TCP ports whose traffic is considered at all.
    pub ports: PortSet,
}

impl DissectorConfig {
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    pub fn with_ports(mut self, ports: PortSet) -> Self {
        self.ports = ports;
        self
    }

    /// Sets the port set from its textual form, e.g. `"80,443,8000-8100"`.
    pub fn with_port_range(self, ports: &str) -> Result<Self, PortSetParseError> {
        Ok(self.with_ports(ports.parse()?))
    }
}
