use crate::wire::{Endianness, RequestPtr, WireError};

/// Bounds-checked cursor over a captured byte buffer.
///
/// Every accessor either returns the requested value and advances, or fails
/// with `WireError::OutOfBounds` and leaves the cursor untouched. Cloning a
/// reader is cheap, which lets decoders read speculatively and only commit
/// the advanced cursor once a whole header has been decoded.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
    endianness: Endianness,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8], endianness: Endianness) -> Self {
        Self {
            buf,
            pos: 0,
            endianness,
        }
    }

    /// Reader fixed to network byte order.
    pub fn network(buf: &'a [u8]) -> Self {
        Self::new(buf, Endianness::Big)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), WireError> {
        self.take(len).map(|_| ())
    }

    pub fn peek_bytes(&self, len: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos.checked_add(len).filter(|end| *end <= self.buf.len());
        match end {
            Some(end) => Ok(&self.buf[self.pos..end]),
            None => Err(self.out_of_bounds(len)),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes: [u8; 2] = self.take_array()?;
        Ok(match self.endianness {
            Endianness::Little => u16::from_le_bytes(bytes),
            Endianness::Big => u16::from_be_bytes(bytes),
        })
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes: [u8; 4] = self.take_array()?;
        Ok(self.u32_from(bytes))
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        self.read_u32().map(|v| v as i32)
    }

    /// Reads a 48-bit unsigned integer into the low bits of a `u64`.
    pub fn read_u48(&mut self) -> Result<u64, WireError> {
        let bytes: [u8; 6] = self.take_array()?;
        let mut wide = [0u8; 8];
        Ok(match self.endianness {
            Endianness::Little => {
                wide[..6].copy_from_slice(&bytes);
                u64::from_le_bytes(wide)
            }
            Endianness::Big => {
                wide[2..].copy_from_slice(&bytes);
                u64::from_be_bytes(wide)
            }
        })
    }

    pub fn peek_u48(&self) -> Result<u64, WireError> {
        self.clone().read_u48()
    }

    pub fn read_u64(&mut self) -> Result<u64, WireError> {
        let bytes: [u8; 8] = self.take_array()?;
        Ok(match self.endianness {
            Endianness::Little => u64::from_le_bytes(bytes),
            Endianness::Big => u64::from_be_bytes(bytes),
        })
    }

    /// Reads 8 bytes as both a 64-bit value and two 32-bit words.
    pub fn read_request_ptr(&mut self) -> Result<RequestPtr, WireError> {
        let bytes: [u8; 8] = self.take_array()?;
        let value = match self.endianness {
            Endianness::Little => u64::from_le_bytes(bytes),
            Endianness::Big => u64::from_be_bytes(bytes),
        };
        let words = [
            self.u32_from([bytes[0], bytes[1], bytes[2], bytes[3]]),
            self.u32_from([bytes[4], bytes[5], bytes[6], bytes[7]]),
        ];
        Ok(RequestPtr { value, words })
    }

    /// Reads a NUL-terminated string, consuming the terminator.
    ///
    /// Returns the string (lossily decoded) and the number of bytes consumed
    /// including the terminator. Fails if no terminator exists before the
    /// end of the buffer.
    pub fn read_stringz(&mut self) -> Result<(String, usize), WireError> {
        let rest = &self.buf[self.pos.min(self.buf.len())..];
        let nul = match rest.iter().position(|b| *b == 0) {
            Some(nul) => nul,
            None => return Err(self.out_of_bounds(rest.len() + 1)),
        };
        let text = String::from_utf8_lossy(&rest[..nul]).into_owned();
        self.pos += nul + 1;
        Ok((text, nul + 1))
    }

    fn u32_from(&self, bytes: [u8; 4]) -> u32 {
        match self.endianness {
            Endianness::Little => u32::from_le_bytes(bytes),
            Endianness::Big => u32::from_be_bytes(bytes),
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let bytes = self.peek_bytes(len)?;
        self.pos += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn out_of_bounds(&self, needed: usize) -> WireError {
        WireError::OutOfBounds {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }
}
