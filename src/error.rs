#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Error constructing a [`Uuid`](crate::Uuid) from an invalid argument.
#[derive(Clone, PartialEq, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A buffer argument did not have its required exact length.
    InvalidLength {
        /// Name of the offending argument.
        field: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// A raw buffer held fewer than 16 bytes.
    BufferTooShort {
        /// Length actually supplied.
        found: usize,
    },

    /// A string was not valid hex or did not decode to exactly 16 bytes.
    InvalidHex(hex::FromHexError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength {
                field,
                expected,
                found,
            } => write!(f, "`{field}` must have length of {expected}, found {found}"),
            Self::BufferTooShort { found } => {
                write!(f, "buffer must have length of at least 16, found {found}")
            }
            Self::InvalidHex(err) => write!(f, "invalid hex representation: {err}"),
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(src: hex::FromHexError) -> Self {
        Self::InvalidHex(src)
    }
}

/// Views `src` as an array reference, failing unless it has exactly `N` bytes.
pub(crate) fn exact_array<'a, const N: usize>(
    field: &'static str,
    src: &'a [u8],
) -> Result<&'a [u8; N], Error> {
    src.try_into().map_err(|_| Error::InvalidLength {
        field,
        expected: N,
        found: src.len(),
    })
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}
