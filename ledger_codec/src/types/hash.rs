//! Fixed-length hash fields (128, 160 and 256 bits).
//!
//! Hashes are opaque digests: they carry no numeric interpretation, order
//! lexicographically on their bytes, and project to JSON as the uppercase
//! hex string of the canonical encoding.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ByteValue, FieldError, SerializedType};

/// Errors that can occur when parsing a hash from its hex text form.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HashParseError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] data_encoding::DecodeError),

    #[error(transparent)]
    Field(#[from] FieldError),
}

macro_rules! hash_type {
    ($(#[$meta:meta])* $name:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name([u8; $size]);

        impl $name {
            /// Wire width in bytes.
            pub const SIZE: usize = $size;

            /// Wraps an exact-width byte array verbatim.
            pub const fn from_array(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            /// The canonical uppercase hex form of the digest.
            pub fn to_hex(&self) -> String {
                data_encoding::HEXUPPER.encode(&self.0)
            }

            /// Parses the digest from hex text (either case accepted).
            pub fn from_hex(s: &str) -> Result<Self, HashParseError> {
                let decoded = data_encoding::HEXUPPER_PERMISSIVE.decode(s.as_bytes())?;
                Ok(Self::from_bytes(&decoded)?)
            }
        }

        impl ByteValue for $name {
            fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl SerializedType for $name {
            const SIZE: usize = $size;

            fn from_bytes(bytes: &[u8]) -> Result<Self, FieldError> {
                let array: [u8; $size] =
                    bytes
                        .try_into()
                        .map_err(|_| FieldError::MalformedLength {
                            expected: $size,
                            actual: bytes.len(),
                        })?;
                Ok(Self(array))
            }

            fn to_json(&self) -> serde_json::Value {
                serde_json::Value::String(self.to_hex())
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $size] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = HashParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.to_hex()).finish()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct HexVisitor;

                impl<'de> Visitor<'de> for HexVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "a {}-character hex string", $size * 2)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$name, E> {
                        $name::from_hex(v).map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(HexVisitor)
            }
        }
    };
}

hash_type!(
    /// A 128-bit hash field (16 bytes).
    Hash128,
    16
);

hash_type!(
    /// A 160-bit hash field (20 bytes), the width of account identifiers.
    Hash160,
    20
);

hash_type!(
    /// A 256-bit hash field (32 bytes), the width of ledger and
    /// transaction digests.
    Hash256,
    32
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hash_roundtrip_bytes() {
        let bytes = [0xABu8; 32];
        let hash = Hash256::from_bytes(&bytes).unwrap();
        assert_eq!(hash.as_bytes(), &bytes);
        assert_eq!(Hash256::from(bytes), hash);
        let back: [u8; 32] = hash.into();
        assert_eq!(back, bytes);
    }

    #[test]
    fn test_hash_malformed_length() {
        assert_eq!(
            Hash256::from_bytes(&[0u8; 31]).unwrap_err(),
            FieldError::MalformedLength {
                expected: 32,
                actual: 31
            }
        );
        assert_eq!(
            Hash160::from_bytes(&[0u8; 32]).unwrap_err(),
            FieldError::MalformedLength {
                expected: 20,
                actual: 32
            }
        );
        assert_eq!(
            Hash128::from_bytes(&[]).unwrap_err(),
            FieldError::MalformedLength {
                expected: 16,
                actual: 0
            }
        );
    }

    #[test]
    fn test_hash_hex_roundtrip() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xDE;
        bytes[19] = 0x0F;
        let hash = Hash160::from_array(bytes);
        let hex = hash.to_hex();
        assert_eq!(hex.len(), 40);
        assert_eq!(Hash160::from_hex(&hex).unwrap(), hash);
        // Lowercase input is accepted; output is always uppercase.
        assert_eq!(hex.to_lowercase().parse::<Hash160>().unwrap(), hash);
    }

    #[test]
    fn test_hash_hex_errors() {
        // Odd length / bad characters.
        assert!(matches!(
            Hash128::from_hex("zz"),
            Err(HashParseError::InvalidHex(_))
        ));
        // Valid hex of the wrong width.
        assert_eq!(
            Hash128::from_hex("ABCD").unwrap_err(),
            HashParseError::Field(FieldError::MalformedLength {
                expected: 16,
                actual: 2
            })
        );
    }

    #[test]
    fn test_hash_ordering_lexicographic() {
        let lo = Hash256::from_array([0u8; 32]);
        let mid = Hash256::from_array([1u8; 32]);
        let hi = Hash256::from_array([0xFF; 32]);
        assert!(lo < mid);
        assert!(mid < hi);

        let mut hashes = vec![hi, lo, mid];
        hashes.sort();
        assert_eq!(hashes, vec![lo, mid, hi]);
    }

    #[test]
    fn test_hash_json_projection() {
        let hash = Hash128::from_array([0x0A; 16]);
        assert_eq!(hash.to_json(), json!("0A0A0A0A0A0A0A0A0A0A0A0A0A0A0A0A"));
    }

    #[test]
    fn test_hash_serde_roundtrip() {
        let hash = Hash256::from_array([0x5B; 32]);
        let encoded = serde_json::to_string(&hash).unwrap();
        assert_eq!(encoded, format!("\"{}\"", hash.to_hex()));
        let decoded: Hash256 = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, hash);
    }

    #[test]
    fn test_hash_display_and_debug() {
        let hash = Hash128::from_array([0xFF; 16]);
        assert_eq!(format!("{}", hash), "F".repeat(32));
        let debug = format!("{:?}", hash);
        assert!(debug.starts_with("Hash128("));
    }
}
