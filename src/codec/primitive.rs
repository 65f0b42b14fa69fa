// Primitive codec: fixed-width little-endian integers, booleans and raw byte spans.

use byteorder::{ByteOrder, LittleEndian};
use std::mem;

use crate::codec::{Decode, Encode, FixedLen};
use crate::internal::error::{Error, Result};

/// Borrows `len` bytes starting at `offset`.
pub fn read_bytes(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let end = offset
        .checked_add(len)
        .filter(|end| *end <= buf.len())
        .ok_or_else(|| Error::out_of_bounds(offset, len, buf.len()))?;
    Ok(&buf[offset..end])
}

fn span_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8]> {
    let buf_len = buf.len();
    let end = offset
        .checked_add(len)
        .filter(|end| *end <= buf_len)
        .ok_or_else(|| Error::out_of_bounds(offset, len, buf_len))?;
    Ok(&mut buf[offset..end])
}

/// Copies `src` into `buf` at `offset`, returning `src.len()`.
pub fn write_bytes(buf: &mut [u8], offset: usize, src: &[u8]) -> Result<usize> {
    span_mut(buf, offset, src.len())?.copy_from_slice(src);
    Ok(src.len())
}

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
    buf.get(offset)
        .copied()
        .ok_or_else(|| Error::out_of_bounds(offset, 1, buf.len()))
}

pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) -> Result<usize> {
    let buf_len = buf.len();
    let slot = buf
        .get_mut(offset)
        .ok_or_else(|| Error::out_of_bounds(offset, 1, buf_len))?;
    *slot = value;
    Ok(1)
}

pub fn read_i8(buf: &[u8], offset: usize) -> Result<i8> {
    read_u8(buf, offset).map(|byte| byte as i8)
}

pub fn write_i8(buf: &mut [u8], offset: usize, value: i8) -> Result<usize> {
    write_u8(buf, offset, value as u8)
}

/// Only the byte `1` decodes as `true`; every other value is `false`.
pub fn read_bool(buf: &[u8], offset: usize) -> Result<bool> {
    read_u8(buf, offset).map(|byte| byte == 1)
}

pub fn write_bool(buf: &mut [u8], offset: usize, value: bool) -> Result<usize> {
    write_u8(buf, offset, value as u8)
}

macro_rules! le_int {
    ($ty:ty, $read:ident, $write:ident) => {
        pub fn $read(buf: &[u8], offset: usize) -> Result<$ty> {
            let span = read_bytes(buf, offset, mem::size_of::<$ty>())?;
            Ok(LittleEndian::$read(span))
        }

        pub fn $write(buf: &mut [u8], offset: usize, value: $ty) -> Result<usize> {
            let span = span_mut(buf, offset, mem::size_of::<$ty>())?;
            LittleEndian::$write(span, value);
            Ok(mem::size_of::<$ty>())
        }

        impl FixedLen for $ty {
            const BYTES: usize = mem::size_of::<$ty>();
        }

        impl Encode for $ty {
            fn encoded_len(&self) -> usize {
                <$ty as FixedLen>::BYTES
            }

            fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
                $write(buf, offset, *self)
            }
        }

        impl Decode for $ty {
            fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
                Ok(($read(buf, offset)?, <$ty as FixedLen>::BYTES))
            }
        }
    };
}

le_int!(u16, read_u16, write_u16);
le_int!(i16, read_i16, write_i16);
le_int!(u32, read_u32, write_u32);
le_int!(i32, read_i32, write_i32);
le_int!(u64, read_u64, write_u64);
le_int!(i64, read_i64, write_i64);
le_int!(u128, read_u128, write_u128);
le_int!(i128, read_i128, write_i128);

macro_rules! single_byte {
    ($ty:ty, $read:ident, $write:ident) => {
        impl FixedLen for $ty {
            const BYTES: usize = 1;
        }

        impl Encode for $ty {
            fn encoded_len(&self) -> usize {
                1
            }

            fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
                $write(buf, offset, *self)
            }
        }

        impl Decode for $ty {
            fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
                Ok(($read(buf, offset)?, 1))
            }
        }
    };
}

single_byte!(u8, read_u8, write_u8);
single_byte!(i8, read_i8, write_i8);
single_byte!(bool, read_bool, write_bool);
