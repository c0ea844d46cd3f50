//! Bulk construction from a heterogeneous list of integers.
//!
//! Every scalar is appended in its minimal width (see
//! [`BitBuffer::append_value`]). Signed values are sign-extended to 64 bits
//! first, so any negative value packs as 64 bits and `-1i8` is 64 ones.
//!
//! ```rust
//! use bit_buffer::pack;
//!
//! let buf = pack![1u8, 128u16, vec![2u32, 3u32], 5i8];
//! assert_eq!(buf.to_string(), "[11000000 01011101]");
//!
//! assert_eq!(pack![-1i8].len(), 64);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::BitBuffer;

/// One element accepted by [`pack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    List(Vec<Field>),
}

impl Field {
    /// The scalar widened to `u64`, or `None` for a list.
    ///
    /// Signed values are sign-extended.
    pub fn bits(&self) -> Option<u64> {
        let raw = match *self {
            Field::U8(v) => v as u64,
            Field::U16(v) => v as u64,
            Field::U32(v) => v as u64,
            Field::U64(v) => v,
            Field::I8(v) => v as i64 as u64,
            Field::I16(v) => v as i64 as u64,
            Field::I32(v) => v as i64 as u64,
            Field::I64(v) => v as u64,
            Field::List(_) => return None,
        };
        Some(raw)
    }
}

macro_rules! impl_field_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Field {
                fn from(v: $ty) -> Self {
                    Field::$variant(v)
                }
            }
        )*
    };
}

impl_field_from! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

impl<T: Into<Field>> From<Vec<T>> for Field {
    fn from(items: Vec<T>) -> Self {
        Field::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Field> + Copy> From<&[T]> for Field {
    fn from(items: &[T]) -> Self {
        Field::List(items.iter().map(|&v| v.into()).collect())
    }
}

/// Packs `fields` into a new buffer.
pub fn pack(fields: &[Field]) -> BitBuffer {
    let mut buf = BitBuffer::new();
    buf.pack_into(fields);
    buf
}

impl BitBuffer {
    /// Appends `fields` in order, recursing into lists.
    ///
    /// Returns the number of bits written.
    pub fn pack_into(&mut self, fields: &[Field]) -> usize {
        fields
            .iter()
            .map(|field| match field {
                Field::List(inner) => self.pack_into(inner),
                scalar => scalar.bits().map_or(0, |v| self.append_value(v)),
            })
            .sum()
    }
}

/// Packs a comma-separated list of integers and vectors into a [`BitBuffer`].
///
/// Each argument must convert into [`Field`].
#[macro_export]
macro_rules! pack {
    ($($field:expr),* $(,)?) => {
        $crate::pack(&[$($crate::Field::from($field)),*])
    };
}
