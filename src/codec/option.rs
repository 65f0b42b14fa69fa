// Optional values: one presence byte, then the value when present.
//
// Presence is lenient in the same way booleans are: 0 is absent and any other
// byte is present. Writers always emit 0 or 1.

use crate::codec::primitive::{read_u8, write_u8};
use crate::codec::{Decode, Encode};
use crate::internal::error::Result;

impl<T: Encode> Encode for Option<T> {
    fn encoded_len(&self) -> usize {
        match self {
            None => 1,
            Some(value) => 1 + value.encoded_len(),
        }
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        match self {
            None => write_u8(buf, offset, 0),
            Some(value) => {
                let tag = write_u8(buf, offset, 1)?;
                Ok(tag + value.write(buf, offset + tag)?)
            }
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        if read_u8(buf, offset)? == 0 {
            return Ok((None, 1));
        }
        let (value, consumed) = T::read(buf, offset + 1)?;
        Ok((Some(value), 1 + consumed))
    }
}
