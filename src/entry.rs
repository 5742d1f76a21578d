//! Default generator and entry point functions

#![cfg(feature = "std")]

use crate::{Generator, StdSystemTime, Uuid};
use rand::rngs::ThreadRng;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Generator<ThreadRng, StdSystemTime>> = Default::default();
}

/// Generates a random UUIDv4 object in native byte order.
///
/// # Examples
///
/// ```rust
/// let uuid = anvl_uuid::uuid4();
/// println!("{uuid}"); // e.g., "2ca4b2ce6c1340d4bccf37d222820f6f"
/// assert_eq!(uuid.version(), Some(4));
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn uuid4() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::reseed_thread_rng_upon_pid_change() {
            g.replace(Default::default());
        }
        g.borrow_mut().generate_v4()
    })
}

/// Generates a time-ordered UUIDv7 object in native byte order.
///
/// # Examples
///
/// ```rust
/// let uuid = anvl_uuid::uuid7();
/// println!("{uuid}"); // e.g., "018094243e597c059219566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // timestamp in the first 6 bytes
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn uuid7() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::reseed_thread_rng_upon_pid_change() {
            g.replace(Default::default());
        }
        g.borrow_mut().generate_v7()
    })
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon process forks),
    /// returning true if ThreadRng is reseeded or false otherwise.
    pub fn reseed_thread_rng_upon_pid_change() -> bool {
        reseed_thread_rng_upon_pid_change_to(process::id())
    }

    /// Records `pid` as the last seen process ID and reseeds ThreadRng if it differs from the
    /// previous one.
    pub(super) fn reseed_thread_rng_upon_pid_change_to(pid: u32) -> bool {
        PID.with(|last_pid| {
            if pid == last_pid.replace(pid) {
                false
            } else {
                // As of rand v0.8.5 and rand_chacha v0.3.1, up to 63 `u32` values have to be used
                // before reseeding after a fork. Consuming 64 values forces ThreadRng to refill
                // its buffer, which triggers the fork check. See
                // https://github.com/rust-random/rand/pull/1317
                let _: [[u32; 32]; 2] = rand::random();
                true
            }
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() -> bool {
        false
    }
}

/// Counts '1' of each bit across hexadecimal string representations.
#[cfg(test)]
fn count_bits(samples: &[String]) -> [u32; 128] {
    let mut bins = [0u32; 128];
    for e in samples {
        let mut it = bins.iter_mut().rev();
        for c in e.chars().rev() {
            if let Some(mut num) = c.to_digit(16) {
                for _ in 0..4 {
                    *it.next().unwrap() += num & 1;
                    num >>= 1;
                }
            }
        }
    }
    bins
}

#[cfg(unix)]
#[cfg(test)]
mod tests_fork_safety {
    use super::unix_fork_safety::{
        reseed_thread_rng_upon_pid_change, reseed_thread_rng_upon_pid_change_to,
    };
    use super::{uuid4, uuid7};
    use std::process;

    /// Does not reseed while process ID stays the same
    #[test]
    fn does_not_reseed_while_process_id_stays_the_same() {
        for _ in 0..100 {
            assert!(!reseed_thread_rng_upon_pid_change());
        }
    }

    /// Reseeds once when process ID changes
    #[test]
    fn reseeds_once_when_process_id_changes() {
        let pid = process::id();
        let forked = pid.wrapping_add(1);
        assert!(reseed_thread_rng_upon_pid_change_to(forked));
        assert!(!reseed_thread_rng_upon_pid_change_to(forked));

        // back to the real process ID, which is again a change
        assert!(reseed_thread_rng_upon_pid_change());
        assert!(!reseed_thread_rng_upon_pid_change());
    }

    /// Keeps generating distinct values after reseeding
    #[test]
    fn keeps_generating_distinct_values_after_reseeding() {
        let before = (uuid4(), uuid7());
        assert!(reseed_thread_rng_upon_pid_change_to(
            process::id().wrapping_add(1)
        ));

        // entry points notice the real process ID and replace the generator
        let after = (uuid4(), uuid7());
        assert_ne!(before.0, after.0);
        assert_ne!(before.1, after.1);
        assert_eq!(after.0.version(), Some(4));
        assert_eq!(after.1.version(), Some(7));
        assert!(!reseed_thread_rng_upon_pid_change());
    }
}

#[cfg(test)]
mod tests_v7 {
    use super::{count_bits, uuid7};
    use crate::{ByteOrder, Variant};

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| uuid7().into()).collect());

    /// Generates 32-digit hexadecimal string
    #[test]
    fn generates_32_digit_hexadecimal_string() {
        let pattern = r"^[0-9a-f]{12}7[0-9a-f]{3}[89ab][0-9a-f]{15}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Generates non-decreasing timestamp prefix by creation time
    #[test]
    fn generates_non_decreasing_timestamp_prefix_by_creation_time() {
        SAMPLES.with(|samples| {
            for i in 1..N_SAMPLES {
                assert!(samples[i - 1][..12] <= samples[i][..12]);
            }
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time;
        for _ in 0..10_000 {
            let ts_now = (time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_millis()) as i64;
            let mut timestamp = 0i64;
            for e in uuid7().as_bytes().iter().take(6) {
                timestamp = timestamp * 256 + *e as i64;
            }
            assert!((ts_now - timestamp).abs() < 16);
        }
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| count_bits(samples));

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], n, "version bit 50");
        assert_eq!(bins[51], n, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Sets correct variant, version, and byte order
    #[test]
    fn sets_correct_variant_version_and_byte_order() {
        for _ in 0..1_000 {
            let e = uuid7();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(7));
            assert_eq!(e.byte_order(), ByteOrder::NATIVE);
        }
    }
}
