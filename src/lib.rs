// recwire library entry point
//
// A compact little-endian record codec: fixed-width primitives, records,
// one-byte tagged enumerations and count-prefixed vectors, each decode
// reporting how many bytes it consumed.

pub mod codec;
pub mod internal;

pub use codec::discriminator::Discriminator;
pub use codec::enumeration::WireEnum;
pub use codec::record::{ReadResult, Record};
pub use codec::{Codec, Decode, Encode, FixedLen};
pub use internal::error::{Error, Result};
