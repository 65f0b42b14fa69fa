//! # Wire contract
//!
//! Every value that crosses the wire implements [`Encode`] and [`Decode`]:
//! primitives, records, enumerations, vectors, options, strings and arrays.
//! Composite codecs are generic over their element types through these two
//! traits, so a vector of records of vectors needs no per-type code.
//!
//! ```text
//! fixed-width integer     W/8 bytes, little-endian
//! bool                    1 byte, 1 = true, anything else = false
//! singleton record        0 bytes
//! fixed-field record      field encodings concatenated in declaration order
//! enumeration             1 byte discriminant (declaration index), then payload if any
//! vector of T             u32 count, then count T encodings
//! option of T             1 byte presence, then T if present
//! string                  u32 byte count, then UTF-8 bytes
//! [T; N]                  N T encodings, no prefix
//! ```
//!
//! No padding or alignment is ever inserted.

pub mod array;
pub mod discriminator;
pub mod enumeration;
pub mod option;
pub mod primitive;
pub mod record;
pub mod string;
pub mod vector;

use bytes::{BufMut, BytesMut};
use std::io::Write;

use crate::internal::error::Result;

/// Serializes a value into a caller-supplied buffer.
pub trait Encode {
    /// Exact number of bytes [`Encode::write`] produces for this value.
    fn encoded_len(&self) -> usize;

    /// Writes the encoding at `offset` and returns the bytes written.
    ///
    /// Fails with `OutOfBounds` when `buf` cannot hold the whole encoding at
    /// `offset`; bytes before the failing field may already be written.
    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize>;

    /// Encodes into a freshly allocated buffer of exactly `encoded_len` bytes.
    fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.encoded_len()];
        self.write(&mut buf, 0)?;
        Ok(buf)
    }

    /// Appends the encoding to a growable buffer.
    fn put(&self, buf: &mut BytesMut) -> Result<usize> {
        let start = buf.len();
        buf.put_bytes(0, self.encoded_len());
        self.write(&mut buf[..], start)
    }

    /// Streams the encoding into an `io::Write` sink.
    fn write_to<W: Write>(&self, w: &mut W) -> Result<usize> {
        let encoded = self.encode()?;
        w.write_all(&encoded)?;
        Ok(encoded.len())
    }
}

/// Reconstructs a value from a buffer.
pub trait Decode: Sized {
    /// Decodes a value starting at `offset`, returning it with the number of
    /// bytes consumed so callers can advance to the next value in the stream.
    fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)>;

    /// Decodes a single value from the start of `buf`, ignoring trailing bytes.
    fn from_slice(buf: &[u8]) -> Result<Self> {
        Self::read(buf, 0).map(|(value, _)| value)
    }
}

/// Types whose encoding always has the same byte count.
pub trait FixedLen {
    const BYTES: usize;
}

/// Anything that can both encode and decode.
pub trait Codec: Encode + Decode {}

impl<T: Encode + Decode> Codec for T {}

impl<T: Encode + ?Sized> Encode for &T {
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        (**self).write(buf, offset)
    }
}

impl<T: Encode> Encode for Box<T> {
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        (**self).write(buf, offset)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        T::read(buf, offset).map(|(value, consumed)| (Box::new(value), consumed))
    }
}
