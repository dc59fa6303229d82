use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// A read would run past the end of the buffer.
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::OutOfBounds {
                offset,
                needed,
                available,
            } => write!(
                f,
                "read of {} bytes at offset {} exceeds {} available bytes",
                needed, offset, available
            ),
        }
    }
}

impl std::error::Error for WireError {}
