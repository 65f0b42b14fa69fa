//! Eight-byte discriminators.
//!
//! Instruction data and account data in this schema family start with an
//! 8-byte discriminator identifying the record type that follows. It is
//! derived from the first 8 bytes of a SHA-256 digest over a namespaced name:
//!
//! ```text
//! instruction:    sha256("global:"  + instruction_name)[..8]
//! account:        sha256("account:" + AccountName)[..8]
//! ```
//!
//! On the wire a discriminator is 8 raw bytes with no prefix, so it can be the
//! first field of any record.

use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::codec::primitive::{read_bytes, write_bytes};
use crate::codec::{Decode, Encode, FixedLen};
use crate::internal::error::{Error, Result};

pub const DISCRIMINATOR_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Discriminator([u8; DISCRIMINATOR_LEN]);

impl Discriminator {
    pub const fn new(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Discriminator(bytes)
    }

    /// Hashes `namespace:name` and keeps the leading 8 bytes.
    pub fn from_namespace(namespace: &str, name: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(namespace.as_bytes());
        hasher.update(b":");
        hasher.update(name.as_bytes());
        let digest = hasher.finalize();
        let mut bytes = [0u8; DISCRIMINATOR_LEN];
        bytes.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
        Discriminator(bytes)
    }

    /// Discriminator for instruction data; `name` is the snake_case handler name.
    pub fn for_instruction(name: &str) -> Self {
        Self::from_namespace("global", name)
    }

    /// Discriminator for account data; `name` is the account type name.
    pub fn for_account(name: &str) -> Self {
        Self::from_namespace("account", name)
    }

    pub fn as_bytes(&self) -> &[u8; DISCRIMINATOR_LEN] {
        &self.0
    }

    /// True when `buf` carries this discriminator at `offset`.
    pub fn matches(&self, buf: &[u8], offset: usize) -> bool {
        read_bytes(buf, offset, DISCRIMINATOR_LEN)
            .map(|found| found == self.0)
            .unwrap_or(false)
    }

    /// Checks that `buf` carries this discriminator at `offset` and returns the
    /// bytes consumed.
    pub fn expect(&self, buf: &[u8], offset: usize) -> Result<usize> {
        let found = read_bytes(buf, offset, DISCRIMINATOR_LEN)?;
        if found != self.0 {
            tracing::debug!(expected = %self, found = %hex::encode(found), "discriminator mismatch");
            return Err(Error::DiscriminatorMismatch {
                expected: self.to_string(),
                found: hex::encode(found),
            });
        }
        Ok(DISCRIMINATOR_LEN)
    }
}

impl From<[u8; DISCRIMINATOR_LEN]> for Discriminator {
    fn from(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Discriminator(bytes)
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Discriminator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = [0u8; DISCRIMINATOR_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)
            .map_err(|e| Error::ParseError(format!("Invalid discriminator {:?}: {}", s, e)))?;
        Ok(Discriminator(bytes))
    }
}

impl FixedLen for Discriminator {
    const BYTES: usize = DISCRIMINATOR_LEN;
}

impl Encode for Discriminator {
    fn encoded_len(&self) -> usize {
        DISCRIMINATOR_LEN
    }

    fn write(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        write_bytes(buf, offset, &self.0)
    }
}

impl Decode for Discriminator {
    fn read(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut bytes = [0u8; DISCRIMINATOR_LEN];
        bytes.copy_from_slice(read_bytes(buf, offset, DISCRIMINATOR_LEN)?);
        Ok((Discriminator(bytes), DISCRIMINATOR_LEN))
    }
}
