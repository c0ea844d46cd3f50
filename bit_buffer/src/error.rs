#[cfg(feature = "std")]
use thiserror::Error;

/// Errors returned by [`BitBuffer`](crate::BitBuffer) and
/// [`Cursor`](crate::Cursor) operations.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBufferError {
    /// A slice or read touched bits outside the buffer.
    ///
    /// `available` is the number of addressable bits: the bit length for a
    /// bad start, the stored byte capacity for a bad end.
    #[cfg_attr(
        feature = "std",
        error("bit range {start}..{start}+{length} out of range ({available} bits available)")
    )]
    OutOfRange {
        start: usize,
        length: usize,
        available: usize,
    },

    #[cfg_attr(feature = "std", error("invalid whence {0}"))]
    InvalidWhence(i32),

    #[cfg_attr(feature = "std", error("invalid offset: seek resolved to {0}"))]
    InvalidOffset(i64),

    #[cfg_attr(feature = "std", error("end of input"))]
    EndOfInput,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitBufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBufferError::OutOfRange {
                start,
                length,
                available,
            } => write!(
                f,
                "bit range {}..{}+{} out of range ({} bits available)",
                start, start, length, available
            ),
            BitBufferError::InvalidWhence(w) => write!(f, "invalid whence {}", w),
            BitBufferError::InvalidOffset(o) => write!(f, "invalid offset: seek resolved to {}", o),
            BitBufferError::EndOfInput => write!(f, "end of input"),
        }
    }
}

pub type Result<T> = core::result::Result<T, BitBufferError>;
