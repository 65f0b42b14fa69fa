//! Tagged enumerations.
//!
//! An enumeration is written as one unsigned byte holding the variant's
//! zero-based declaration index, followed by the variant's payload if it has
//! one. Variant order is part of the wire contract: reordering variants or
//! inserting one anywhere but the end changes the format.
//!
//! Payload-free enums are declared with [`wire_enum!`](crate::wire_enum).
//! Enums whose variants carry data implement [`WireEnum`], `Encode` and
//! `Decode` by hand on top of [`read_discriminant`] and
//! [`write_discriminant`], matching exhaustively on the ordinal.

use std::any;

use crate::codec::primitive::{read_u8, write_u8};
use crate::internal::error::{Error, Result};

/// A closed set of variants with a one-byte wire discriminant.
pub trait WireEnum {
    /// Number of declared variants; valid discriminants are `0..VARIANT_COUNT`.
    const VARIANT_COUNT: usize;

    /// Declaration index of this value's variant.
    fn ordinal(&self) -> u8;
}

/// The error for a discriminant that selects no variant of `E`.
pub fn invalid_discriminant<E: WireEnum>(value: u8) -> Error {
    Error::InvalidDiscriminant {
        type_name: any::type_name::<E>(),
        value,
        variants: E::VARIANT_COUNT,
    }
}

/// Reads the discriminant byte at `offset` and checks it against `E`'s
/// declared variant count.
pub fn read_discriminant<E: WireEnum>(buf: &[u8], offset: usize) -> Result<u8> {
    let value = read_u8(buf, offset)?;
    if usize::from(value) >= E::VARIANT_COUNT {
        tracing::trace!(
            enumeration = any::type_name::<E>(),
            value,
            variants = E::VARIANT_COUNT,
            "rejecting discriminant"
        );
        return Err(invalid_discriminant::<E>(value));
    }
    Ok(value)
}

/// Writes `value`'s ordinal at `offset`; always one byte.
pub fn write_discriminant<E: WireEnum>(value: &E, buf: &mut [u8], offset: usize) -> Result<usize> {
    write_u8(buf, offset, value.ordinal())
}

/// Declares a payload-free enumeration and its one-byte codec.
///
/// Variants are numbered from zero in declaration order. The generated type
/// is `#[repr(u8)]`; derives are left to the caller.
///
/// ```
/// use recwire::{wire_enum, Decode, Encode};
///
/// wire_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Side {
///         Bid,
///         Ask,
///     }
/// }
///
/// assert_eq!(Side::Ask.encode().unwrap(), [1]);
/// assert_eq!(Side::from_slice(&[0]).unwrap(), Side::Bid);
/// assert!(Side::from_slice(&[2]).is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u8)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in wire order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            pub fn from_ordinal(ordinal: u8) -> Option<Self> {
                $(
                    if ordinal == $name::$variant as u8 {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl $crate::codec::enumeration::WireEnum for $name {
            const VARIANT_COUNT: usize = [$(stringify!($variant)),+].len();

            fn ordinal(&self) -> u8 {
                match self {
                    $( $name::$variant => $name::$variant as u8 ),+
                }
            }
        }

        impl $crate::codec::FixedLen for $name {
            const BYTES: usize = 1;
        }

        impl $crate::codec::Encode for $name {
            fn encoded_len(&self) -> usize {
                1
            }

            fn write(&self, buf: &mut [u8], offset: usize) -> $crate::internal::error::Result<usize> {
                $crate::codec::enumeration::write_discriminant(self, buf, offset)
            }
        }

        impl $crate::codec::Decode for $name {
            fn read(buf: &[u8], offset: usize) -> $crate::internal::error::Result<(Self, usize)> {
                let ordinal = $crate::codec::enumeration::read_discriminant::<Self>(buf, offset)?;
                match $name::from_ordinal(ordinal) {
                    Some(variant) => Ok((variant, 1)),
                    None => Err($crate::codec::enumeration::invalid_discriminant::<Self>(ordinal)),
                }
            }
        }
    };
}
