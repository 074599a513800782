//! The base contract every serializable field type satisfies.
//!
//! A field type participates in canonical serialization through two traits:
//! [`ByteValue`] exposes the canonical wire bytes, and [`SerializedType`]
//! adds decoding, the JSON projection, and a total order. Containing
//! structures (typed objects with named fields) only ever see these traits,
//! so they can compute canonical field order and serialized layout without
//! knowing any field's internal representation.

use bytes::Bytes;

pub mod hash;
pub mod uint;

/// Errors raised while constructing a field value.
///
/// Both variants are detected synchronously at construction time; a value
/// either exists in canonical form or was never built. Inputs are never
/// silently truncated or wrapped.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    /// The input byte sequence does not match the type's fixed wire width.
    #[error("malformed length: expected {expected} bytes, got {actual}")]
    MalformedLength { expected: usize, actual: usize },

    /// The numeric input is negative or does not fit in the target width.
    #[error("value out of range: {value} does not fit in {width} bits")]
    ValueOutOfRange { value: i128, width: u32 },
}

/// A value backed by an immutable, fixed-length byte sequence.
///
/// The stored bytes are the canonical wire encoding; there is exactly one
/// valid byte representation per value, which is what makes the encoding
/// safe to feed into hashing and signing.
pub trait ByteValue {
    /// Borrows the exact stored byte sequence.
    fn as_bytes(&self) -> &[u8];

    /// Copies the canonical encoding into an owned buffer.
    fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }
}

/// Capability required of every field type in the canonical wire format.
///
/// `Ord` is part of the contract: the comparison is the canonical
/// field-ordering primitive, and it is only defined between values of the
/// same concrete type, so operands of different widths can never be
/// compared by accident.
pub trait SerializedType: ByteValue + Ord + Sized {
    /// Fixed wire width of this type in bytes.
    const SIZE: usize;

    /// Decodes a value from its canonical wire bytes.
    ///
    /// Fails with [`FieldError::MalformedLength`] unless `bytes` is exactly
    /// [`SIZE`](Self::SIZE) bytes long.
    fn from_bytes(bytes: &[u8]) -> Result<Self, FieldError>;

    /// Projects the value into its JSON representation.
    fn to_json(&self) -> serde_json::Value;
}
