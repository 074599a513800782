//! Fixed-width unsigned integer fields.
//!
//! One type per wire width (8, 16, 32 and 64 bits), each wrapping its
//! canonical big-endian byte representation. The set of widths is closed
//! and known at compile time, so the types are generated by a local macro
//! instead of dispatching through a common base object.
//!
//! The 32-bit boundary matters for the JSON projection: anything wider may
//! exceed the exact range of a double, so 64-bit fields serialize to a
//! decimal string while narrower fields serialize to a plain number.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ByteValue, FieldError, SerializedType};

/// The decoded magnitude of an unsigned integer field.
///
/// Fields up to 32 bits wide fit the host's exact-number domain and are
/// carried as [`UIntValue::Number`]; wider fields are carried as
/// [`UIntValue::Wide`] and project to a decimal string, so consumers whose
/// number type is a double cannot silently lose precision.
///
/// Equality and ordering are defined on the magnitude alone, computed in
/// the widened exact `u64` domain. No comparison ever goes through
/// floating point.
#[derive(Debug, Clone, Copy)]
pub enum UIntValue {
    /// Magnitude of a field at most 32 bits wide.
    Number(u32),
    /// Magnitude of a wider field.
    Wide(u64),
}

impl UIntValue {
    /// The magnitude widened to `u64`, which is exact for every width in
    /// the family.
    pub fn as_u64(&self) -> u64 {
        match *self {
            UIntValue::Number(n) => u64::from(n),
            UIntValue::Wide(w) => w,
        }
    }

    /// JSON projection: a number for the narrow domain, the decimal string
    /// for the wide domain.
    pub fn to_json(&self) -> serde_json::Value {
        match *self {
            UIntValue::Number(n) => serde_json::Value::from(n),
            UIntValue::Wide(w) => serde_json::Value::String(w.to_string()),
        }
    }
}

impl PartialEq for UIntValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_u64() == other.as_u64()
    }
}

impl Eq for UIntValue {}

impl Hash for UIntValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_u64().hash(state);
    }
}

impl Ord for UIntValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_u64().cmp(&other.as_u64())
    }
}

impl PartialOrd for UIntValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

macro_rules! uint_type {
    ($(#[$meta:meta])* $name:ident, $prim:ty, $bits:expr, $variant:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Hash, PartialEq, Eq)]
        pub struct $name([u8; $bits / 8]);

        impl $name {
            /// Wire width in bits.
            pub const WIDTH: u32 = $bits;

            /// Wire width in bytes.
            pub const SIZE: usize = $bits / 8;

            /// Encodes a value into its canonical big-endian byte form.
            ///
            /// The encoding is unique: one byte sequence per value,
            /// zero-padded at the high end to the full wire width.
            pub const fn new(value: $prim) -> Self {
                Self(value.to_be_bytes())
            }

            /// Wraps an exact-width byte array verbatim.
            pub const fn from_array(bytes: [u8; $bits / 8]) -> Self {
                Self(bytes)
            }

            /// The decoded magnitude as the native primitive.
            pub const fn get(&self) -> $prim {
                <$prim>::from_be_bytes(self.0)
            }

            /// The decoded magnitude in its width-dependent representation.
            pub fn value(&self) -> UIntValue {
                UIntValue::$variant(self.get() as _)
            }
        }

        impl ByteValue for $name {
            fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl SerializedType for $name {
            const SIZE: usize = $bits / 8;

            fn from_bytes(bytes: &[u8]) -> Result<Self, FieldError> {
                let array: [u8; $bits / 8] =
                    bytes
                        .try_into()
                        .map_err(|_| FieldError::MalformedLength {
                            expected: $bits / 8,
                            actual: bytes.len(),
                        })?;
                Ok(Self(array))
            }

            fn to_json(&self) -> serde_json::Value {
                self.value().to_json()
            }
        }

        impl TryFrom<i128> for $name {
            type Error = FieldError;

            /// Fails with [`FieldError::ValueOutOfRange`] for negative
            /// input or input that does not fit the wire width.
            fn try_from(value: i128) -> Result<Self, FieldError> {
                if value < 0 || value > <$prim>::MAX as i128 {
                    return Err(FieldError::ValueOutOfRange {
                        value,
                        width: $bits,
                    });
                }
                Ok(Self::new(value as $prim))
            }
        }

        impl From<$prim> for $name {
            fn from(value: $prim) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for $prim {
            fn from(value: $name) -> Self {
                value.get()
            }
        }

        impl Ord for $name {
            /// Total order on the decoded magnitude. For a big-endian
            /// encoding this agrees with byte order, but the contract is
            /// numeric.
            fn cmp(&self, other: &Self) -> Ordering {
                self.get().cmp(&other.get())
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.get())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.get()).finish()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.value() {
                    UIntValue::Number(n) => serializer.serialize_u32(n),
                    UIntValue::Wide(w) => serializer.collect_str(&w),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            /// Inverts the JSON projection. Numbers are accepted for every
            /// width; the decimal-string form is accepted too, with the
            /// same range validation as [`TryFrom<i128>`].
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct UIntVisitor;

                impl<'de> Visitor<'de> for UIntVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(
                            f,
                            "an unsigned {}-bit integer or its decimal string",
                            $bits
                        )
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<$name, E> {
                        $name::try_from(v as i128).map_err(E::custom)
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<$name, E> {
                        $name::try_from(v as i128).map_err(E::custom)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$name, E> {
                        let parsed: u64 = v.parse().map_err(E::custom)?;
                        $name::try_from(parsed as i128).map_err(E::custom)
                    }
                }

                deserializer.deserialize_any(UIntVisitor)
            }
        }
    };
}

uint_type!(
    /// An 8-bit unsigned integer field.
    UInt8,
    u8,
    8,
    Number
);

uint_type!(
    /// A 16-bit unsigned integer field.
    UInt16,
    u16,
    16,
    Number
);

uint_type!(
    /// A 32-bit unsigned integer field.
    ///
    /// The widest member of the family whose every value is exact in a
    /// double; it is also the last width that projects to a JSON number.
    UInt32,
    u32,
    32,
    Number
);

uint_type!(
    /// A 64-bit unsigned integer field.
    ///
    /// Values above 2^53 − 1 are not exact in a double, so this width
    /// projects to a JSON decimal string rather than a number.
    UInt64,
    u64,
    64,
    Wide
);
