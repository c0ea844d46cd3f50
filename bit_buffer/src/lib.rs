//! # bit_buffer
//!
//! A `no_std` compatible growable bit buffer for building and parsing
//! encodings whose fields are not byte-aligned.
//!
//! Bits are stored MSB-first: bit 0 is the most significant bit of byte 0.
//! The packed form is the minimal number of bytes for the bit length, with
//! unused trailing bits zero. There is no header; callers carry the bit
//! length and field widths themselves.
//!
//! ```rust
//! use bit_buffer::{BitBuffer, Whence};
//!
//! // 3-bit version, 1-bit flag, 12-bit counter
//! let mut record = BitBuffer::new();
//! record.append_fixed_width(2u8, 3);
//! record.append_bit(true);
//! record.append_fixed_width(1000u16, 12);
//! assert_eq!(record.as_bytes(), &[0b0101_0011, 0b1110_1000]);
//!
//! let mut cursor = record.cursor();
//! assert_eq!(cursor.read_bits(3).unwrap(), 2);
//! assert!(cursor.read_bit());
//! assert_eq!(cursor.read_bits(12).unwrap(), 1000);
//!
//! cursor.seek(12, Whence::End).unwrap();
//! assert_eq!(cursor.read_bits(12).unwrap(), 1000);
//! ```
//!
//! ## Bulk packing
//!
//! ```rust
//! use bit_buffer::pack;
//!
//! // minimal widths: 1, 10000000, 10111
//! let buf = pack![1u8, 128u8, 23u8];
//! assert_eq!(buf.len(), 14);
//! assert_eq!(buf.as_bytes(), &[0b1100_0000, 0b0101_1100]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod log;

pub mod error;
pub use error::{BitBufferError, Result};

mod bit_ops;

pub mod buffer;
pub mod config;
pub mod cursor;
pub mod pack;

#[cfg(feature = "std")]
pub mod sync;

pub use buffer::BitBuffer;
pub use config::BitBufferConfig;
pub use cursor::{Cursor, Whence};
pub use pack::{Field, pack};

#[cfg(feature = "std")]
pub use sync::SharedBitBuffer;
