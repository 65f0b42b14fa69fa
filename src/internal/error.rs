use thiserror::Error;
use std::io;

/// Unified error type for the recwire codec.
///
/// Every variant is fatal to the decode/encode call that produced it. The codec
/// never retries; the caller decides whether to abort the enclosing message.
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer bytes remain than the requested primitive or prefix needs.
    #[error("Out of bounds: need {needed} bytes at offset {offset}, buffer holds {len}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// A discriminant byte that maps to no declared variant.
    #[error("Invalid discriminant {value} for {type_name}: {variants} variants declared")]
    InvalidDiscriminant {
        type_name: &'static str,
        value: u8,
        variants: usize,
    },

    /// A vector declared more elements than the buffer can supply.
    #[error("Truncated element {index} of {count} in vector of {type_name}")]
    TruncatedElement {
        type_name: &'static str,
        index: u32,
        count: u32,
    },

    /// String payload that is not valid UTF-8.
    #[error("Invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A sequence too long for its 4-byte count prefix.
    #[error("Length {0} does not fit in a u32 prefix")]
    LengthOverflow(usize),

    /// Leading 8 bytes do not carry the expected discriminator.
    #[error("Discriminator mismatch: expected {expected}, found {found}")]
    DiscriminatorMismatch { expected: String, found: String },

    /// Malformed textual input (hex discriminators and the like).
    #[error("Parse Error: {0}")]
    ParseError(String),

    /// Failure of the sink passed to `Encode::write_to`.
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for recwire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an `OutOfBounds` for a read or write of `needed` bytes at `offset`.
    pub(crate) fn out_of_bounds(offset: usize, needed: usize, len: usize) -> Self {
        Error::OutOfBounds { offset, needed, len }
    }

    /// True when the failure means the buffer ended early, either directly or
    /// inside a nested vector.
    pub fn is_short_buffer(&self) -> bool {
        matches!(self, Error::OutOfBounds { .. } | Error::TruncatedElement { .. })
    }
}

/*
Panic policy:

Recoverable failures (short buffers, bad discriminants, bad UTF-8) are always
returned as `Result<T, Error>`. Panics are reserved for programming errors
inside the crate itself and are never caught.
*/
