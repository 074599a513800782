//! Canonical binary serialization types for the ledger wire format.
//!
//! Every field that participates in canonical serialization, hashing and
//! signing is backed by an immutable, fixed-length byte sequence with
//! exactly one valid encoding per value. This crate defines that base
//! contract and the concrete field families built on it.
//!
//! ## Wire-stable types
//!
//! The following types define on-the-wire encodings and are intended to be
//! stable; changes to them are protocol changes:
//!
//! - Unsigned integer fields (`types::uint::UInt8` through
//!   `types::uint::UInt64`): big-endian, zero-padded to the wire width,
//!   no length prefix (the width comes from field schema context).
//! - Hash fields (`types::hash::Hash128`, `types::hash::Hash160`,
//!   `types::hash::Hash256`): opaque fixed-length digests.
//!
//! ## The base contract
//!
//! All field types implement [`ByteValue`] (canonical bytes in and out)
//! and [`SerializedType`] (decoding, JSON projection, total order). The
//! `Ord` bound on [`SerializedType`] is the canonical field-ordering
//! primitive: containing structures sort their fields through it when
//! computing a deterministic layout for hashing.
//!
//! ## JSON projection
//!
//! Integer fields up to 32 bits project to a JSON number; wider fields
//! project to the decimal string of their value, because a consumer whose
//! number type is a double cannot represent every 64-bit magnitude
//! exactly. Hash fields project to uppercase hex. Deserialization inverts
//! these rules.
//!
//! All values are immutable once constructed, so they are freely shared
//! across threads; construction failures are reported synchronously as
//! typed errors ([`FieldError`]).

pub mod types;

// --- Core Public Surface ---

pub use types::{ByteValue, FieldError, SerializedType};

pub use types::uint::{UInt8, UInt16, UInt32, UInt64, UIntValue};

pub use types::hash::{Hash128, Hash160, Hash256, HashParseError};
