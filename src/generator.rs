//! Random and time-based UUID generator and related types.

use crate::id::with_version;
use crate::Uuid;
use rand::RngCore;

/// The largest Unix timestamp in milliseconds that fits in the 48-bit UUIDv7 timestamp field.
const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

/// A trait that defines the minimum system clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_millis() as u64
    }
}

/// Represents a generator of UUIDv4 and UUIDv7 values that draws random bits from `R` and
/// timestamps from `T`.
///
/// Every value it produces is tagged with native byte order, and its version and variant bits are
/// written at byte 6 and byte 8 of the raw bytes.
///
/// # Examples
///
/// ```rust
/// use anvl_uuid::{Generator, StdSystemTime};
///
/// let mut g = Generator::new(rand::rngs::OsRng, StdSystemTime);
/// println!("{}", g.generate_v4());
/// println!("{}", g.generate_v7());
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T> {
    /// The random number generator used by the generator.
    rng: R,

    /// The system clock used by the generator.
    time_source: T,
}

impl<R: RngCore, T: TimeSource> Generator<R, T> {
    /// Creates a generator instance.
    pub const fn new(rng: R, time_source: T) -> Self {
        Self { rng, time_source }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::from_native_bytes(with_version(bytes, 4))
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    ///
    /// Only the lower 48 bits of the time source reading are used, so a clock that reports a
    /// timestamp beyond the year 10889 wraps around instead of panicking.
    pub fn generate_v7(&mut self) -> Uuid {
        let unix_ts_ms = self.time_source.unix_ts_ms() & MAX_TIMESTAMP;
        self.generate_v7_core(unix_ts_ms)
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// The timestamp occupies bytes 0 through 5 in big-endian order and the remaining bytes are
    /// random, so values made from increasing timestamps sort in the same order as raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit integer.
    pub fn generate_v7_core(&mut self, unix_ts_ms: u64) -> Uuid {
        assert!(
            unix_ts_ms <= MAX_TIMESTAMP,
            "`unix_ts_ms` must be a 48-bit integer"
        );

        let mut bytes = [0u8; 16];
        bytes[..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
        self.rng.fill_bytes(&mut bytes[6..]);
        Uuid::from_native_bytes(with_version(bytes, 7))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv7 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use anvl_uuid::{Generator, StdSystemTime};
///
/// Generator::new(rand::thread_rng(), StdSystemTime)
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<R: RngCore, T: TimeSource> Iterator for Generator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v7())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore, T: TimeSource> core::iter::FusedIterator for Generator<R, T> {}
