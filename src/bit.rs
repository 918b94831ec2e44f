use crate::Error;

/// A value that can be stored as a single bit
///
/// `bool` always converts. Integers convert when they are `0` or `1` and are
/// rejected with [`Error::InvalidArgument`] otherwise, which lets callers
/// feed the buffer straight from integer bit sources without silently
/// truncating a bad value.
///
/// ```rust
/// use bitbuf::{Error, IntoBit};
///
/// assert_eq!(true.into_bit(), Ok(true));
/// assert_eq!(0u64.into_bit(), Ok(false));
/// assert_eq!(1i32.into_bit(), Ok(true));
/// assert_eq!(2u8.into_bit(), Err(Error::InvalidArgument));
/// assert_eq!((-1i32).into_bit(), Err(Error::InvalidArgument));
/// ```
pub trait IntoBit {
    /// Convert into a bit, `true` meaning set
    fn into_bit(self) -> Result<bool, Error>;
}

impl IntoBit for bool {
    #[inline]
    fn into_bit(self) -> Result<bool, Error> {
        Ok(self)
    }
}

macro_rules! impl_into_bit {
    ($($t:ty),*) => {
        $(
            impl IntoBit for $t {
                #[inline]
                fn into_bit(self) -> Result<bool, Error> {
                    match self {
                        0 => Ok(false),
                        1 => Ok(true),
                        _ => Err(Error::InvalidArgument),
                    }
                }
            }
        )*
    };
}

impl_into_bit!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
