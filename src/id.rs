#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use crate::{codec, ParseError};

/// Represents a Universally Unique IDentifier.
///
/// Equality and ordering compare the 16 bytes lexicographically, which is the same order as the
/// big-endian `u128` and the canonical string representation.
///
/// The default value is [`Uuid::UNSET`], not [`Uuid::NIL`], so that an identifier nobody has
/// assigned yet can be told apart from a deliberate nil.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Sentinel for a not-yet-assigned identifier (554e5345-545f-5555-4944-5f5f5f5f5f00).
    ///
    /// The bytes spell `UNSET_UUID_____` followed by a NUL. Generators never produce it.
    pub const UNSET: Self = Self(*b"UNSET_UUID_____\0");

    /// Returns the Nil UUID.
    pub const fn nil() -> Self {
        Self::NIL
    }

    /// Returns `true` if all the bytes are zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns `true` if this is the [`Uuid::UNSET`] sentinel.
    pub const fn is_unset(&self) -> bool {
        u128::from_be_bytes(self.0) == u128::from_be_bytes(Self::UNSET.0)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => Variant::Var0,
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashuuid::Uuid;
    ///
    /// let x = "9a5dc7bc-8ee1-4cb4-92a2-0e64c5a1b87c".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "9a5dc7bc-8ee1-4cb4-92a2-0e64c5a1b87c");
    /// assert_eq!(format!("{}", y), "9a5dc7bc-8ee1-4cb4-92a2-0e64c5a1b87c");
    /// # Ok::<(), hashuuid::ParseError>(())
    /// ```
    pub fn encode(&self) -> fstr::FStr<36> {
        codec::encode(self)
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        codec::decode(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        codec::decode(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// UUID variants defined by RFC 9562.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Variant 0, the NCS-reserved variant (also used by the Nil UUID).
    Var0,
    /// Variant `10`, the one version-4 UUIDs carry.
    Var10,
    /// Variant `110`, reserved for Microsoft.
    Var110,
    /// Variant `111`, reserved for future use (also used by the Max UUID).
    VarReserved,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "374708ff-f771-4dd5-979e-c875d56cd228",
                    &[
                        55, 71, 8, 255, 247, 113, 77, 213, 151, 158, 200, 117, 213, 108, 210, 40,
                    ],
                ),
                (
                    "554e5345-545f-5555-4944-5f5f5f5f5f00",
                    b"UNSET_UUID_____\0",
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Rejects malformed string and byte representations
        #[test]
        fn rejects_malformed_string_and_byte_representations() {
            assert_de_tokens_error::<serde_test::Readable<Uuid>>(
                &[Token::String("374708ff-f771-4dd5-979e-c875d56cd22")],
                "invalid string representation: expected 36 bytes, got 35",
            );
            assert_de_tokens_error::<serde_test::Compact<Uuid>>(
                &[Token::Bytes(&[0u8; 15])],
                "could not convert slice to array",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Distinguishes unset sentinel from Nil UUID
    #[test]
    fn distinguishes_unset_sentinel_from_nil_uuid() {
        let unset = Uuid::default();
        assert!(unset.is_unset());
        assert!(!unset.is_nil());
        assert_eq!(unset, Uuid::UNSET);

        let nil = Uuid::nil();
        assert!(nil.is_nil());
        assert!(!nil.is_unset());
        assert_ne!(nil, unset);

        assert!(!Uuid::MAX.is_nil());
        assert!(!Uuid::MAX.is_unset());
    }

    /// Orders identifiers by byte-wise comparison
    #[test]
    fn orders_identifiers_by_byte_wise_comparison() {
        let mut lo = [0u8; 16];
        let mut hi = [0u8; 16];
        lo[15] = 0xff;
        hi[0] = 0x01;
        assert!(Uuid::from(lo) < Uuid::from(hi));

        // a signed or little-endian comparison would get these wrong
        lo = [0x7f; 16];
        hi = [0x80; 16];
        assert!(Uuid::from(lo) < Uuid::from(hi));
        assert!(Uuid::NIL < Uuid::UNSET && Uuid::UNSET < Uuid::MAX);
    }

    /// Reports variant and version fields
    #[test]
    fn reports_variant_and_version_fields() {
        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::MAX.variant(), Variant::VarReserved);
        assert_eq!(Uuid::MAX.version(), None);

        let e: Uuid = "374708ff-f771-4dd5-979e-c875d56cd228".parse().unwrap();
        assert_eq!(e.variant(), Variant::Var10);
        assert_eq!(e.version(), Some(4));

        let e: Uuid = "00000000-0000-0000-c000-000000000000".parse().unwrap();
        assert_eq!(e.variant(), Variant::Var110);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for e in [Uuid::NIL, Uuid::MAX, Uuid::UNSET, Uuid::from(0x0123_4567_89ab_cdefu128)] {
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(<Uuid as AsRef<[u8]>>::as_ref(&e), &e.as_bytes()[..]);
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    #[cfg(feature = "std")]
    mod properties {
        use super::Uuid;
        use proptest::prelude::*;

        proptest! {
            /// Ordering agrees with byte slices and the u128 view
            #[test]
            fn ordering_agrees_with_byte_slices(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
                let (x, y) = (Uuid::from(a), Uuid::from(b));
                prop_assert_eq!(x.cmp(&y), a.cmp(&b));
                prop_assert_eq!(x.cmp(&y), u128::from(x).cmp(&u128::from(y)));
                prop_assert_eq!(x == y, a == b);
            }

            /// Ordering agrees with canonical strings
            #[test]
            fn ordering_agrees_with_canonical_strings(a in any::<u128>(), b in any::<u128>()) {
                let (x, y) = (Uuid::from(a), Uuid::from(b));
                prop_assert_eq!(x.cmp(&y), x.to_string().cmp(&y.to_string()));
            }
        }
    }
}
