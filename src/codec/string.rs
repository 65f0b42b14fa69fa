// Strings: u32 little-endian byte count, then that many UTF-8 bytes.

use crate::codec::primitive::{read_bytes, read_u32, write_bytes, write_u32};
use crate::codec::vector::{count_prefix, COUNT_PREFIX_LEN};
use crate::codec::{Decode, Encode};
use crate::internal::error::Result;

impl Encode for str {
    fn encoded_len(&self) -> usize {
        COUNT_PREFIX_LEN + self.len()
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        let prefix = write_u32(buf, offset, count_prefix(self.len())?)?;
        Ok(prefix + write_bytes(buf, offset + prefix, self.as_bytes())?)
    }
}

impl Encode for String {
    fn encoded_len(&self) -> usize {
        self.as_str().encoded_len()
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        self.as_str().write(buf, offset)
    }
}

impl Decode for String {
    fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let len = read_u32(buf, offset)? as usize;
        let bytes = read_bytes(buf, offset + COUNT_PREFIX_LEN, len)?;
        let value = String::from_utf8(bytes.to_vec())?;
        Ok((value, COUNT_PREFIX_LEN + len))
    }
}
