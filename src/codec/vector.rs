// Length-prefixed vectors: u32 little-endian element count, then the elements.

use std::any;

use crate::codec::primitive::{read_u32, write_u32};
use crate::codec::{Decode, Encode};
use crate::internal::error::{Error, Result};

/// Size of the element count prefix.
pub const COUNT_PREFIX_LEN: usize = 4;

/// Converts a sequence length into its wire prefix.
pub(crate) fn count_prefix(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::LengthOverflow(len))
}

/// Writes `elements` as a vector without requiring an owned `Vec`.
pub fn write_slice<T: Encode>(elements: &[T], buf: &mut [u8], offset: usize) -> Result<usize> {
    let mut i = offset + write_u32(buf, offset, count_prefix(elements.len())?)?;
    for element in elements {
        i += element.write(buf, i)?;
    }
    Ok(i - offset)
}

/// Encoded length of `elements` as a vector: the prefix plus every element.
pub fn slice_len<T: Encode>(elements: &[T]) -> usize {
    COUNT_PREFIX_LEN + elements.iter().map(|element| element.encoded_len()).sum::<usize>()
}

impl<T: Encode> Encode for Vec<T> {
    fn encoded_len(&self) -> usize {
        slice_len(self)
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        write_slice(self, buf, offset)
    }
}

impl<T: Encode> Encode for [T] {
    fn encoded_len(&self) -> usize {
        slice_len(self)
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        write_slice(self, buf, offset)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let count = read_u32(buf, offset)?;
        tracing::trace!(element = any::type_name::<T>(), count, offset, "reading vector");

        let mut i = offset + COUNT_PREFIX_LEN;
        // Each element needs at least one byte unless it is zero-sized, so the
        // remaining length bounds how many can really be present.
        let remaining = buf.len().saturating_sub(i);
        let mut elements = Vec::with_capacity((count as usize).min(remaining));
        for index in 0..count {
            match T::read(buf, i) {
                Ok((element, consumed)) => {
                    elements.push(element);
                    i += consumed;
                }
                Err(err) if err.is_short_buffer() => {
                    tracing::debug!(
                        element = any::type_name::<T>(),
                        index,
                        count,
                        error = %err,
                        "vector element runs past buffer end"
                    );
                    return Err(Error::TruncatedElement {
                        type_name: any::type_name::<T>(),
                        index,
                        count,
                    });
                }
                Err(err) => return Err(err),
            }
        }
        Ok((elements, i - offset))
    }
}
