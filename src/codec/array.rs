// Fixed-size arrays: N element encodings back to back, no count prefix.

use crate::codec::{Decode, Encode, FixedLen};
use crate::internal::error::{Error, Result};

impl<T: FixedLen, const N: usize> FixedLen for [T; N] {
    const BYTES: usize = T::BYTES * N;
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encoded_len(&self) -> usize {
        self.iter().map(|element| element.encoded_len()).sum()
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        let mut i = offset;
        for element in self {
            i += element.write(buf, i)?;
        }
        Ok(i - offset)
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut i = offset;
        let mut elements = Vec::with_capacity(N);
        for _ in 0..N {
            let (element, consumed) = T::read(buf, i)?;
            elements.push(element);
            i += consumed;
        }
        match <[T; N]>::try_from(elements) {
            Ok(array) => Ok((array, i - offset)),
            Err(elements) => Err(Error::out_of_bounds(offset, N, elements.len())),
        }
    }
}
