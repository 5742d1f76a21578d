//! Byte-order reversal of unsigned integers

/// Reverses the byte order of an unsigned integer.
///
/// # Examples
///
/// ```rust
/// use anvl_uuid::ByteSwap;
///
/// assert_eq!(0x1234u16.swap(), 0x3412);
/// assert_eq!(0x1234_5678u32.swap(), 0x7856_3412);
/// ```
pub trait ByteSwap {
    /// Returns the value with its bytes in reverse order.
    fn swap(self) -> Self;
}

macro_rules! impl_byte_swap {
    ($($t:ty),*) => {
        $(
            impl ByteSwap for $t {
                #[inline]
                fn swap(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

impl_byte_swap!(u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::ByteSwap;

    /// Reverses prepared cases bitwise exactly
    #[test]
    fn reverses_prepared_cases_bitwise_exactly() {
        assert_eq!(0x0000u16.swap(), 0x0000);
        assert_eq!(0x00ffu16.swap(), 0xff00);
        assert_eq!(0x1234u16.swap(), 0x3412);
        assert_eq!(0x1234_5678u32.swap(), 0x7856_3412);
        assert_eq!(0xff00_0000u32.swap(), 0x0000_00ff);
        assert_eq!(0x0102_0304_0506_0708u64.swap(), 0x0807_0605_0403_0201);
        assert_eq!(u64::MAX.swap(), u64::MAX);
    }

    /// Returns original value when applied twice
    #[test]
    fn returns_original_value_when_applied_twice() {
        for _ in 0..10_000 {
            let (a, b, c): (u16, u32, u64) = rand::random();
            assert_eq!(a.swap().swap(), a);
            assert_eq!(b.swap().swap(), b);
            assert_eq!(c.swap().swap(), c);
        }
    }

    /// Agrees with native and foreign byte representations
    #[test]
    fn agrees_with_native_and_foreign_byte_representations() {
        let x = 0xdead_beefu32;
        assert_eq!(x.swap().to_be_bytes(), x.to_le_bytes());
        assert_eq!(
            u32::from_ne_bytes(x.to_be_bytes()).swap(),
            u32::from_ne_bytes(x.to_le_bytes())
        );
    }
}
