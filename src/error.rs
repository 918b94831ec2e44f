use core::fmt;

/// An error returned when a [`BitBuffer`](crate::BitBuffer) operation is
/// given an argument it cannot honor.
///
/// Every variant signals caller misuse. Nothing is retried and the buffer is
/// left exactly as it was before the failing call.
///
/// ```rust
/// use bitbuf::{Error, MsbBitBuffer};
///
/// let mut bits = MsbBitBuffer::<u8>::new();
/// assert_eq!(bits.push(2), Err(Error::InvalidArgument));
/// assert_eq!(bits.pop(), Err(Error::Underflow));
/// assert_eq!(bits.at(0), Err(Error::OutOfRange { index: 0, len: 0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A bit value other than zero or one was supplied
    InvalidArgument,

    /// A bit position at or beyond the logical length was requested
    OutOfRange {
        /// The offending bit position
        index: usize,

        /// Logical length of the buffer at the time of the request
        len: usize,
    },

    /// A bit was popped from an empty buffer
    Underflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "bit value is neither zero nor one"),
            Error::OutOfRange { index, len } => {
                write!(f, "bit position {} is out of range for length {}", index, len)
            }
            Error::Underflow => write!(f, "cannot pop a bit from an empty buffer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
