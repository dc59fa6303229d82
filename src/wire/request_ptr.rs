use std::fmt;

/// A 64-bit request or descriptor handle as it travels on the wire.
///
/// The sender writes a union that may be read either as one 64-bit value or
/// as two consecutive 32-bit words, so both views are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestPtr {
    pub value: u64,
    /// The two 32-bit words in wire order, each read with the active byte order.
    pub words: [u32; 2],
}

impl fmt::Display for RequestPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.value)
    }
}
