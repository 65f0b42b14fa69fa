//! Fixed-field and singleton records.
//!
//! A record is an ordered list of fields encoded back to back in declaration
//! order. Records are usually declared with [`wire_record!`](crate::wire_record)
//! or [`fixed_record!`](crate::fixed_record), which take the field list as the
//! schema and generate the codec:
//!
//! ```
//! use recwire::{fixed_record, wire_record, Decode, Encode, FixedLen};
//!
//! fixed_record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct PriceExpo {
//!         pub expo: i32,
//!     }
//! }
//!
//! wire_record! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub struct Refresh;
//! }
//!
//! let bytes = PriceExpo { expo: -5 }.encode().unwrap();
//! assert_eq!(bytes, [0xFB, 0xFF, 0xFF, 0xFF]);
//! assert_eq!(PriceExpo::BYTES, 4);
//! assert_eq!(Refresh::read(&[], 0).unwrap(), (Refresh::INSTANCE, 0));
//! ```

use std::any;

use crate::codec::{Decode, Encode};
use crate::internal::error::Result;

/// Outcome of an absent-aware record decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult<T> {
    /// The buffer was empty: no record is present. Not an error.
    Absent,
    /// A decoded record and the number of bytes it consumed.
    Some(T, usize),
}

impl<T> ReadResult<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, ReadResult::Absent)
    }

    pub fn into_option(self) -> Option<(T, usize)> {
        match self {
            ReadResult::Absent => None,
            ReadResult::Some(value, consumed) => Some((value, consumed)),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ReadResult<U> {
        match self {
            ReadResult::Absent => ReadResult::Absent,
            ReadResult::Some(value, consumed) => ReadResult::Some(f(value), consumed),
        }
    }
}

/// A composite value with a declared field list.
pub trait Record: Encode + Decode {
    /// Decodes a record, treating an empty buffer as "no record present".
    ///
    /// Wrappers around optional records rely on this short-circuit; a buffer
    /// that is non-empty but too short still fails with `OutOfBounds`.
    fn read_record(buf: &[u8], offset: usize) -> Result<ReadResult<Self>> {
        if buf.is_empty() {
            tracing::debug!(record = any::type_name::<Self>(), "empty buffer, record absent");
            return Ok(ReadResult::Absent);
        }
        let (value, consumed) = Self::read(buf, offset)?;
        Ok(ReadResult::Some(value, consumed))
    }
}

/// Declares a record type and its codec.
///
/// The braced form lists fields in wire order; each field type must implement
/// `Encode` and `Decode`. The unit form (`struct Name;`) declares a singleton:
/// zero bytes on the wire, `write` is a no-op, and every decode yields
/// `Name::INSTANCE` without looking at the buffer. Derives are left to the
/// caller.
#[macro_export]
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        $vis struct $name;

        impl $name {
            pub const INSTANCE: $name = $name;
        }

        impl $crate::codec::FixedLen for $name {
            const BYTES: usize = 0;
        }

        impl $crate::codec::Encode for $name {
            fn encoded_len(&self) -> usize {
                0
            }

            fn write(&self, _buf: &mut [u8], _offset: usize) -> $crate::internal::error::Result<usize> {
                Ok(0)
            }
        }

        impl $crate::codec::Decode for $name {
            fn read(_buf: &[u8], _offset: usize) -> $crate::internal::error::Result<(Self, usize)> {
                Ok(($name::INSTANCE, 0))
            }
        }

        impl $crate::codec::record::Record for $name {
            fn read_record(
                _buf: &[u8],
                _offset: usize,
            ) -> $crate::internal::error::Result<$crate::codec::record::ReadResult<Self>> {
                Ok($crate::codec::record::ReadResult::Some($name::INSTANCE, 0))
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $ty ),+
        }

        impl $crate::codec::Encode for $name {
            fn encoded_len(&self) -> usize {
                0 $( + $crate::codec::Encode::encoded_len(&self.$field) )+
            }

            fn write(&self, buf: &mut [u8], offset: usize) -> $crate::internal::error::Result<usize> {
                let mut i = offset;
                $( i += $crate::codec::Encode::write(&self.$field, buf, i)?; )+
                Ok(i - offset)
            }
        }

        impl $crate::codec::Decode for $name {
            fn read(buf: &[u8], offset: usize) -> $crate::internal::error::Result<(Self, usize)> {
                let mut i = offset;
                $(
                    let ($field, consumed) = <$ty as $crate::codec::Decode>::read(buf, i)?;
                    i += consumed;
                )+
                Ok(($name { $($field),+ }, i - offset))
            }
        }

        impl $crate::codec::record::Record for $name {}
    };
}

/// Declares a record whose fields all have fixed widths.
///
/// Same as [`wire_record!`](crate::wire_record) and additionally implements
/// `FixedLen`, so `Name::BYTES` is the type-time sum of the field widths.
#[macro_export]
macro_rules! fixed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $crate::wire_record! {
            $(#[$meta])*
            $vis struct $name {
                $( $(#[$fmeta])* $fvis $field : $ty ),+
            }
        }

        impl $crate::codec::FixedLen for $name {
            const BYTES: usize = 0 $( + <$ty as $crate::codec::FixedLen>::BYTES )+;
        }
    };
}
