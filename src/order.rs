/// Byte order under which the three integer fields of a [`Uuid`](crate::Uuid) are stored.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,

    /// Most significant byte first (network byte order).
    Big,
}

impl ByteOrder {
    /// The byte order of the target platform.
    pub const NATIVE: Self = if cfg!(target_endian = "little") {
        Self::Little
    } else {
        Self::Big
    };

    /// Returns `true` if this is [`ByteOrder::Little`].
    pub const fn is_little_endian(self) -> bool {
        matches!(self, Self::Little)
    }

    /// Returns the opposite byte order.
    pub const fn flip(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::NATIVE
    }
}
