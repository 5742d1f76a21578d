#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops::Range, slice, str};

use crate::error::exact_array;
use crate::{ByteOrder, ByteSwap, Error};
use fstr::FStr;

/// Represents a Universally Unique IDentifier together with the byte order of its integer fields.
///
/// The 16 bytes follow the RFC 9562 layout:
///
/// ```text
/// field1 (4) | field2 (2) | field3 (2) | field4 (2) | field5 (6)
/// time_low   | time_mid   | time_hi    | clock_seq  | node
/// ```
///
/// `field1`, `field2`, and `field3` are integers stored in the order reported by
/// [`byte_order()`](Uuid::byte_order); `field4` and `field5` are opaque octets that never change
/// under an [`endian_swap()`](Uuid::endian_swap).
///
/// Two values are equal only if both their raw bytes and their byte orders are equal, so a value
/// and its swapped counterpart compare unequal even when they denote the same identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uuid {
    bytes: [u8; 16],
    order: ByteOrder,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000) in native byte order
    pub const NIL: Self = Self::from_bytes([0x00; 16], ByteOrder::NATIVE);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff) in native byte order
    pub const MAX: Self = Self::from_bytes([0xff; 16], ByteOrder::NATIVE);

    /// Byte range of `field1` (`time_low`).
    pub const FIELD1: Range<usize> = 0..4;

    /// Byte range of `field2` (`time_mid`).
    pub const FIELD2: Range<usize> = 4..6;

    /// Byte range of `field3` (`time_hi_and_version`).
    pub const FIELD3: Range<usize> = 6..8;

    /// Byte range of `field4` (`clock_seq_hi_and_reserved` and `clock_seq_low`).
    pub const FIELD4: Range<usize> = 8..10;

    /// Byte range of `field5` (`node`).
    pub const FIELD5: Range<usize> = 10..16;

    /// Creates a UUID from its raw bytes, tagging the first three fields with `order`.
    pub const fn from_bytes(bytes: [u8; 16], order: ByteOrder) -> Self {
        Self { bytes, order }
    }

    /// Creates a UUID from its raw bytes in native byte order.
    pub const fn from_native_bytes(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes, ByteOrder::NATIVE)
    }

    /// Creates a UUID from the first 16 bytes of `data`.
    ///
    /// Bytes beyond the sixteenth are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooShort`] if `data` holds fewer than 16 bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::{ByteOrder, Uuid};
    ///
    /// let x = Uuid::from_slice(&[0x5a; 18], ByteOrder::Big)?;
    /// assert_eq!(x.as_bytes(), &[0x5a; 16]);
    /// assert!(Uuid::from_slice(&[0x5a; 15], ByteOrder::Big).is_err());
    /// # Ok::<(), anvl_uuid::Error>(())
    /// ```
    pub fn from_slice(data: &[u8], order: ByteOrder) -> Result<Self, Error> {
        let Some(head) = data.get(..16) else {
            return Err(Error::BufferTooShort { found: data.len() });
        };
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(head);
        Ok(Self::from_bytes(bytes, order))
    }

    /// Creates a UUID from field values, writing the three integer fields in `order`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::{ByteOrder, Uuid};
    ///
    /// let x = Uuid::from_fields(
    ///     0x6ba7_b810,
    ///     0x9dad,
    ///     0x11d1,
    ///     &[0x80, 0xb4],
    ///     &[0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8],
    ///     ByteOrder::Big,
    /// );
    /// assert_eq!(x, Uuid::NAMESPACE_DNS);
    /// ```
    pub const fn from_fields(
        field1: u32,
        field2: u16,
        field3: u16,
        field4: &[u8; 2],
        field5: &[u8; 6],
        order: ByteOrder,
    ) -> Self {
        let (f1, f2, f3) = match order {
            ByteOrder::Little => (
                field1.to_le_bytes(),
                field2.to_le_bytes(),
                field3.to_le_bytes(),
            ),
            ByteOrder::Big => (
                field1.to_be_bytes(),
                field2.to_be_bytes(),
                field3.to_be_bytes(),
            ),
        };

        Self::from_bytes(
            [
                f1[0], f1[1], f1[2], f1[3], f2[0], f2[1], f3[0], f3[1], field4[0], field4[1],
                field5[0], field5[1], field5[2], field5[3], field5[4], field5[5],
            ],
            order,
        )
    }

    /// Creates a UUID from field values given as variable-length buffers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `field4` has exactly 2 bytes and `field5` has
    /// exactly 6 bytes.
    pub fn try_from_fields(
        field1: u32,
        field2: u16,
        field3: u16,
        field4: &[u8],
        field5: &[u8],
        order: ByteOrder,
    ) -> Result<Self, Error> {
        let field4 = exact_array::<2>("field4", field4)?;
        let field5 = exact_array::<6>("field5", field5)?;
        Ok(Self::from_fields(field1, field2, field3, field4, field5, order))
    }

    /// Creates a UUID in native byte order from its 32-digit hexadecimal representation.
    ///
    /// Both lowercase and uppercase digits are accepted; separators are not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] if `src` is not valid hex or does not decode to exactly 16
    /// bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::Uuid;
    ///
    /// let x = Uuid::parse_hex("f47ac10b58cc4372a5670e02b2c3d479")?;
    /// assert_eq!(&x.encode() as &str, "f47ac10b58cc4372a5670e02b2c3d479");
    /// # Ok::<(), anvl_uuid::Error>(())
    /// ```
    pub fn parse_hex(src: &str) -> Result<Self, Error> {
        let mut bytes = [0u8; 16];
        hex::decode_to_slice(src, &mut bytes)?;
        Ok(Self::from_native_bytes(bytes))
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns a copy of the underlying byte array, as stored.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.bytes
    }

    /// Returns the bytes with the three integer fields rearranged into native byte order.
    pub fn to_native_bytes(self) -> [u8; 16] {
        self.to_order(ByteOrder::NATIVE).bytes
    }

    /// Returns an iterator over the underlying bytes.
    pub fn iter(&self) -> slice::Iter<'_, u8> {
        self.bytes.iter()
    }

    /// Returns the byte order of the three integer fields.
    pub const fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Returns `true` if the three integer fields are stored little-endian.
    pub const fn is_little_endian(&self) -> bool {
        self.order.is_little_endian()
    }

    /// Returns `field1`, also known as `time_low`.
    pub const fn field1(&self) -> u32 {
        let [a, b, c, d, ..] = self.bytes;
        match self.order {
            ByteOrder::Little => u32::from_le_bytes([a, b, c, d]),
            ByteOrder::Big => u32::from_be_bytes([a, b, c, d]),
        }
    }

    /// Returns `field2`, also known as `time_mid`.
    pub const fn field2(&self) -> u16 {
        let [_, _, _, _, a, b, ..] = self.bytes;
        match self.order {
            ByteOrder::Little => u16::from_le_bytes([a, b]),
            ByteOrder::Big => u16::from_be_bytes([a, b]),
        }
    }

    /// Returns `field3`, also known as `time_hi_and_version`.
    pub const fn field3(&self) -> u16 {
        let [_, _, _, _, _, _, a, b, ..] = self.bytes;
        match self.order {
            ByteOrder::Little => u16::from_le_bytes([a, b]),
            ByteOrder::Big => u16::from_be_bytes([a, b]),
        }
    }

    /// Returns `field4`, the clock sequence bytes.
    ///
    /// These are opaque octets and never subject to byte swapping.
    pub fn field4(&self) -> &[u8; 2] {
        let [_, _, _, _, _, _, _, _, field4 @ .., _, _, _, _, _, _] = &self.bytes;
        field4
    }

    /// Returns `field5`, the node bytes.
    ///
    /// These are opaque octets and never subject to byte swapping.
    pub fn field5(&self) -> &[u8; 6] {
        let [_, _, _, _, _, _, _, _, _, _, field5 @ ..] = &self.bytes;
        field5
    }

    /// Returns a copy with the three integer fields byte-swapped and the byte order flipped.
    ///
    /// The integer field values read through the accessors stay the same; only their storage
    /// changes. Swapping twice restores the original bytes and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::{ByteOrder, Uuid};
    ///
    /// let x = Uuid::NAMESPACE_URL;
    /// let y = x.endian_swap();
    /// assert_eq!(y.byte_order(), ByteOrder::Little);
    /// assert_eq!(y.field1(), x.field1());
    /// assert_ne!(y, x);
    /// assert_eq!(y.endian_swap(), x);
    /// ```
    pub fn endian_swap(&self) -> Self {
        let swapped = Self::from_fields(
            self.field1().swap(),
            self.field2().swap(),
            self.field3().swap(),
            self.field4(),
            self.field5(),
            self.order,
        );
        Self::from_bytes(swapped.bytes, self.order.flip())
    }

    /// Returns a copy, byte-swapped if `endian_swap` is `true`.
    pub fn with_endian_swap(&self, endian_swap: bool) -> Self {
        if endian_swap {
            self.endian_swap()
        } else {
            *self
        }
    }

    /// Returns a copy stored in `order`, swapping only if the current order differs.
    pub fn to_order(self, order: ByteOrder) -> Self {
        self.with_endian_swap(self.order != order)
    }

    /// Returns the variant field read from byte 8.
    pub const fn variant(&self) -> Variant {
        match self.bytes[8] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version number read from the high nibble of byte 6 if the variant field
    /// contains `0b10`, or `None` otherwise.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.bytes[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 32-digit lowercase hexadecimal representation of the raw bytes stored in a
    /// stack-allocated string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::Uuid;
    ///
    /// let x = Uuid::NAMESPACE_DNS;
    /// assert_eq!(&x.encode() as &str, "6ba7b8109dad11d180b400c04fd430c8");
    /// assert_eq!(x.to_string(), "6ba7b8109dad11d180b400c04fd430c8");
    /// ```
    pub fn encode(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        hex::encode_to_slice(self.bytes, &mut buffer).expect("32 digits encode 16 bytes");
        FStr::from_inner(buffer).expect("hex digits are ASCII")
    }

    /// Returns the 8-4-4-4-12 canonical representation of the identifier, rendering the integer
    /// fields in network byte order regardless of how they are stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::Uuid;
    ///
    /// let x = Uuid::NAMESPACE_DNS;
    /// assert_eq!(&x.hyphenated() as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(&x.endian_swap().hyphenated() as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// ```
    pub fn hyphenated(&self) -> FStr<36> {
        let digits = self.to_order(ByteOrder::Big).encode();
        let src = digits.as_bytes();
        let mut buffer = [b'-'; 36];
        buffer[..8].copy_from_slice(&src[..8]);
        buffer[9..13].copy_from_slice(&src[8..12]);
        buffer[14..18].copy_from_slice(&src[12..16]);
        buffer[19..23].copy_from_slice(&src[16..20]);
        buffer[24..].copy_from_slice(&src[20..]);
        FStr::from_inner(buffer).expect("hex digits and hyphens are ASCII")
    }
}

/// Sets the version nibble of byte 6 and the `0b10` variant bits of byte 8.
pub(crate) fn with_version(mut bytes: [u8; 16], version: u8) -> [u8; 16] {
    bytes[6] = (bytes[6] & 0x0f) | (version << 4);
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Layout family indicated by the variant field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0b0xxx`: reserved for NCS backward compatibility
    Var0,
    /// `0b10xx`: the variant specified by RFC 9562
    Var10,
    /// `0b110x`: reserved for Microsoft backward compatibility
    Var110,
    /// `0b111x`: reserved for future definition
    VarReserved,
}

impl Default for Uuid {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Uuid {
    /// Returns the 32-digit lowercase hexadecimal representation of the raw bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uuid")
            .field("bytes", &format_args!("{}", self.encode()))
            .field("order", &self.order)
            .finish()
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object in native byte order from the 32-digit hexadecimal representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_hex(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    /// Creates an object in native byte order from the first 16 bytes of a slice.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src, ByteOrder::NATIVE)
    }
}

impl From<Uuid> for [u8; 16] {
    /// Returns the bytes in native byte order; see [`Uuid::to_native_bytes()`].
    fn from(src: Uuid) -> Self {
        src.to_native_bytes()
    }
}

impl From<[u8; 16]> for Uuid {
    /// Creates an object in native byte order.
    fn from(src: [u8; 16]) -> Self {
        Self::from_native_bytes(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> IntoIterator for &'a Uuid {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::{ByteOrder, Uuid};

    impl From<Uuid> for uuid::Uuid {
        /// Converts to the platform identifier type by its field values, so the result is the same
        /// for a value and its swapped counterpart.
        fn from(src: Uuid) -> Self {
            let [_, _, _, _, _, _, _, _, d4 @ ..] = src.bytes;
            uuid::Uuid::from_fields(src.field1(), src.field2(), src.field3(), &d4)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        /// Creates an object in native byte order from the field values of the platform identifier.
        fn from(src: uuid::Uuid) -> Self {
            let (d1, d2, d3, &[c0, c1, n0, n1, n2, n3, n4, n5]) = src.as_fields();
            Self::from_fields(
                d1,
                d2,
                d3,
                &[c0, c1],
                &[n0, n1, n2, n3, n4, n5],
                ByteOrder::NATIVE,
            )
        }
    }

}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, ByteOrder, Uuid};
    use serde::{de, Deserializer, Serializer};

    /// Serializes the identifier in native byte order, as hex text for human-readable formats and
    /// as 16 raw bytes otherwise. The byte order tag itself is not serialized.
    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let native = self.to_order(ByteOrder::NATIVE);
            if serializer.is_human_readable() {
                serializer.serialize_str(&native.encode())
            } else {
                serializer.serialize_bytes(native.as_bytes())
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
            Uuid::parse_hex(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Uuid::from_native_bytes)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::{ByteOrder, Uuid};
        use serde_test::{assert_de_tokens, assert_ser_tokens, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases: [(&str, &[u8]); 3] = [
                ("00000000000000000000000000000000", &[0u8; 16]),
                (
                    "0180ae59078c7b80b1132fe14a615fb3",
                    &[
                        1, 128, 174, 89, 7, 140, 123, 128, 177, 19, 47, 225, 74, 97, 95, 179,
                    ],
                ),
                (
                    "2c4de34238b751cfb9402309a097f518",
                    &[
                        44, 77, 227, 66, 56, 183, 81, 207, 185, 64, 35, 9, 160, 151, 245, 24,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::Str(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Serializes foreign byte order in native byte order
        #[test]
        fn serializes_foreign_byte_order_in_native_byte_order() {
            let foreign = Uuid::from_bytes(
                [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
                ByteOrder::NATIVE.flip(),
            );
            let text = "0403020106050807090a0b0c0d0e0f10";
            assert_ser_tokens(&foreign.readable(), &[Token::Str(text)]);
            assert_de_tokens(
                &foreign.to_order(ByteOrder::NATIVE).readable(),
                &[Token::Str(text)],
            );
        }

        /// Rejects malformed representations
        #[test]
        fn rejects_malformed_representations() {
            use serde_test::assert_de_tokens_error;
            assert_de_tokens_error::<serde_test::Readable<Uuid>>(
                &[Token::Str("0180ae59-078c-7b80-b113-2fe14a615fb3")],
                "invalid hex representation: Invalid string length",
            );
            assert_de_tokens_error::<serde_test::Compact<Uuid>>(
                &[Token::Bytes(&[0u8; 15])],
                "could not convert slice to array",
            );
        }
    }
}
