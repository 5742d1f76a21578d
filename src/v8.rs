//! UUIDv8-related functionality

use crate::error::exact_array;
use crate::id::with_version;
use crate::{Error, Uuid};

impl Uuid {
    /// Creates a custom UUIDv8 in native byte order from a 16-byte payload.
    ///
    /// Only the version nibble and the variant bits are overwritten; every other bit of `custom`
    /// is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `custom` has exactly 16 bytes. Note that this is
    /// stricter than [`Uuid::from_slice()`], which ignores bytes beyond the sixteenth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anvl_uuid::Uuid;
    ///
    /// let x = Uuid::v8(&[0u8; 16])?;
    /// assert_eq!(&x.encode() as &str, "00000000000080008000000000000000");
    /// assert!(Uuid::v8(&[0u8; 17]).is_err());
    /// # Ok::<(), anvl_uuid::Error>(())
    /// ```
    pub fn v8(custom: &[u8]) -> Result<Self, Error> {
        let custom = exact_array::<16>("custom", custom)?;
        Ok(Self::from_native_bytes(with_version(*custom, 8)))
    }
}

#[cfg(feature = "std")]
#[cfg(test)]
mod tests {
    use crate::{ByteOrder, Error, Uuid, Variant};

    /// Rejects payload of any length but sixteen
    #[test]
    fn rejects_payload_of_any_length_but_sixteen() {
        for len in [0, 1, 15, 17, 32] {
            assert_eq!(
                Uuid::v8(&vec![0u8; len]),
                Err(Error::InvalidLength {
                    field: "custom",
                    expected: 16,
                    found: len
                })
            );
        }
    }

    /// Passes caller bits through except version and variant
    #[test]
    fn passes_caller_bits_through_except_version_and_variant() {
        let e = Uuid::v8(&[0xff; 16]).unwrap();
        assert_eq!(&e.encode() as &str, "ffffffffffff8fffbfffffffffffffff");
        assert_eq!(e.byte_order(), ByteOrder::NATIVE);

        for _ in 0..1_000 {
            let custom: [u8; 16] = rand::random();
            let e = Uuid::v8(&custom).unwrap();
            for (i, (a, b)) in custom.iter().zip(e.as_bytes()).enumerate() {
                match i {
                    6 => assert_eq!((a & 0x0f, b >> 4), (b & 0x0f, 8)),
                    8 => assert_eq!((a & 0x3f, b >> 6), (b & 0x3f, 0b10)),
                    _ => assert_eq!(a, b),
                }
            }
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = Uuid::v8(&rand::random::<[u8; 16]>()).unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(8));
        }
    }
}
