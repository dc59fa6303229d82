use crate::wire::Endianness;

/// Byte-order aware encoder, the inverse of `WireReader`.
///
/// Used to re-encode decoded headers and to build fixtures.
#[derive(Debug, Clone)]
pub struct WireWriter {
    buf: Vec<u8>,
    endianness: Endianness,
}

impl WireWriter {
    pub fn new(endianness: Endianness) -> Self {
        Self {
            buf: Vec::new(),
            endianness,
        }
    }

    pub fn network() -> Self {
        Self::new(Endianness::Big)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.buf.push(value);
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        match self.endianness {
            Endianness::Little => self.buf.extend(&value.to_le_bytes()),
            Endianness::Big => self.buf.extend(&value.to_be_bytes()),
        }
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        match self.endianness {
            Endianness::Little => self.buf.extend(&value.to_le_bytes()),
            Endianness::Big => self.buf.extend(&value.to_be_bytes()),
        }
        self
    }

    pub fn i32(self, value: i32) -> Self {
        self.u32(value as u32)
    }

    pub fn u64(mut self, value: u64) -> Self {
        match self.endianness {
            Endianness::Little => self.buf.extend(&value.to_le_bytes()),
            Endianness::Big => self.buf.extend(&value.to_be_bytes()),
        }
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn zeros(mut self, len: usize) -> Self {
        self.buf.resize(self.buf.len() + len, 0);
        self
    }

    pub fn stringz(mut self, text: &str) -> Self {
        self.buf.extend_from_slice(text.as_bytes());
        self.buf.push(0);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
