//! UUIDv5-related functionality
//!
//! [`Uuid::v5()`] hashes the name as UTF-16LE code units. This is not the encoding the RFC 9562
//! reference implementation feeds to SHA-1 (the octets of the name, usually UTF-8), but it is the
//! encoding established identifiers such as Windows Terminal profile GUIDs were derived with, and
//! changing it would change every generated value. [`Uuid::v5_bytes()`] hashes caller-supplied
//! octets as the RFC does.

use crate::id::with_version;
use crate::{ByteOrder, Uuid};
use sha1::{Digest, Sha1};

impl Uuid {
    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_bytes(
        [
            0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
            0xc8,
        ],
        ByteOrder::Big,
    );

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_bytes(
        [
            0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
            0xc8,
        ],
        ByteOrder::Big,
    );

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_bytes(
        [
            0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
            0xc8,
        ],
        ByteOrder::Big,
    );

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_bytes(
        [
            0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
            0xc8,
        ],
        ByteOrder::Big,
    );

    /// Generates a name-based UUIDv5 from a namespace and a name hashed as UTF-16LE.
    ///
    /// The namespace is brought into network byte order before hashing, so a namespace and its
    /// swapped counterpart yield the same result. The result is always big-endian.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::{ByteOrder, Uuid};
    ///
    /// let terminal = Uuid::from_fields(
    ///     0x2bde_4a90,
    ///     0xd05f,
    ///     0x401c,
    ///     &[0x94, 0x92],
    ///     &[0xe4, 0x08, 0x84, 0xea, 0xd1, 0xd8],
    ///     ByteOrder::NATIVE,
    /// );
    /// let ubuntu = Uuid::v5(&terminal, "Ubuntu");
    /// assert_eq!(&ubuntu.hyphenated() as &str, "2c4de342-38b7-51cf-b940-2309a097f518");
    /// assert_eq!(ubuntu.byte_order(), ByteOrder::Big);
    /// ```
    pub fn v5(namespace: &Self, name: &str) -> Self {
        let namespace = namespace.to_order(ByteOrder::Big);
        let mut hasher = Sha1::new();
        hasher.update(namespace.as_bytes());
        for unit in name.encode_utf16() {
            hasher.update(unit.to_le_bytes());
        }
        Self::from_digest(hasher)
    }

    /// Generates a name-based UUIDv5 from a namespace and the octets of a name, following the
    /// RFC 9562 reference algorithm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::Uuid;
    ///
    /// let x = Uuid::v5_bytes(&Uuid::NAMESPACE_DNS, b"www.example.com");
    /// assert_eq!(&x.hyphenated() as &str, "2ed6657d-e927-568b-95e1-2665a8aea6a2");
    /// ```
    pub fn v5_bytes(namespace: &Self, name: &[u8]) -> Self {
        let namespace = namespace.to_order(ByteOrder::Big);
        let mut hasher = Sha1::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name);
        Self::from_digest(hasher)
    }

    /// Takes the first 16 bytes of the digest as a big-endian UUIDv5.
    fn from_digest(hasher: Sha1) -> Self {
        let digest = hasher.finalize();
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self::from_bytes(with_version(bytes, 5), ByteOrder::Big)
    }
}
