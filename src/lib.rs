//! A UUID value type that keeps track of the byte order of its integer fields
//!
//! ```rust
//! use anvl_uuid::{ByteOrder, Uuid};
//!
//! let uuid = anvl_uuid::uuid7();
//! println!("{}", uuid); // e.g., "01809424e59b7c059219566f82fff672"
//! println!("{}", uuid.hyphenated()); // e.g., "01809424-e59b-7c05-9219-566f82fff672"
//!
//! let ns = Uuid::NAMESPACE_DNS;
//! assert_eq!(ns.byte_order(), ByteOrder::Big);
//! assert_eq!(ns.endian_swap().field1(), ns.field1());
//! ```
//!
//! # Field layout and byte order
//!
//! A [`Uuid`] stores 16 bytes in the RFC 9562 layout along with a [`ByteOrder`] tag:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                       field1 (time_low)                       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       field2 (time_mid)       |  field3 (time_hi_and_version) |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |      field4 (clock_seq)       |                               |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+                               +
//! |                         field5 (node)                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The tag tells how `field1`, `field2`, and `field3` are stored: little-endian, as in the byte
//! image of a Windows `GUID`, or big-endian, as in network byte order. `field4` and `field5` are
//! opaque octets. [`Uuid::endian_swap()`] reverses the bytes of the three integer fields and
//! flips the tag, so the field values read back through the accessors do not change.
//!
//! Equality and hashing cover both the raw bytes and the tag.
//!
//! # Generators
//!
//! | Version      | Function                           | Byte order |
//! | ------------ | ---------------------------------- | ---------- |
//! | Nil / Max    | [`Uuid::NIL`] / [`Uuid::MAX`]      | Native     |
//! | 4 (random)   | [`uuid4()`]                        | Native     |
//! | 5 (SHA-1)    | [`Uuid::v5()`], [`Uuid::v5_bytes()`] | Big        |
//! | 7 (time)     | [`uuid7()`]                        | Native     |
//! | 8 (custom)   | [`Uuid::v8()`]                     | Native     |
//!
//! Version and variant bits are always written at byte 6 and byte 8 of the raw bytes.
//!
//! # Crate features
//!
//! - `std` (default): system clock, thread-local generator, and `std::error::Error` support.
//!   Without it the crate is `no_std`.
//! - `uuid` (default): conversions from and to [`uuid::Uuid`](https://docs.rs/uuid).
//! - `serde`: `Serialize` and `Deserialize` implementations.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{Uuid, Variant};

mod order;
pub use order::ByteOrder;

mod swap;
pub use swap::ByteSwap;

mod v5;
mod v8;

pub mod generator;
#[doc(inline)]
pub use generator::{Generator, TimeSource};

#[cfg(feature = "std")]
#[doc(inline)]
pub use generator::StdSystemTime;

mod entry;
#[cfg(feature = "std")]
pub use entry::{uuid4, uuid7};
