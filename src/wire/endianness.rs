use std::fmt;

/// Byte order applied to every multi-byte integer of the BTL layer.
///
/// OOB frames and sync handshakes ignore this setting and are always read in
/// network order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little endian"),
            Endianness::Big => write!(f, "big endian"),
        }
    }
}
