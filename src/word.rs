use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shr};

/// Which physical bit of a word holds logical offset 0
///
/// ```rust
/// use bitbuf::{BitOrder, LsbBitBuffer, MsbBitBuffer};
///
/// assert_eq!(MsbBitBuffer::<u8>::BIT_ORDER, BitOrder::MsbFirst);
/// assert_eq!(LsbBitBuffer::<u8>::BIT_ORDER, BitOrder::LsbFirst);
/// assert_eq!(BitOrder::MsbFirst.position(0, 8), 7);
/// assert_eq!(BitOrder::LsbFirst.position(0, 8), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitOrder {
    /// Logical offset 0 is the most significant bit of the word
    MsbFirst,

    /// Logical offset 0 is the least significant bit of the word
    LsbFirst,
}

impl BitOrder {
    /// Physical bit position (0 is the least significant) of logical
    /// `offset` within a word that is `width` bits wide.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not less than `width`.
    #[inline]
    pub const fn position(self, offset: usize, width: usize) -> usize {
        assert!(offset < width, "bit offset out of range for word width");
        match self {
            BitOrder::MsbFirst => width - 1 - offset,
            BitOrder::LsbFirst => offset,
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// An unsigned integer usable as the backing store of a
/// [`BitBuffer`](crate::BitBuffer)
///
/// Besides the usual constants, each implementation carries its single-bit
/// and prefix-mask tables for both bit orders. The tables are built at
/// compile time and shared by every buffer with the same word type.
///
/// ```rust
/// use bitbuf::Word;
///
/// assert_eq!(<u8 as Word>::BITS, 8);
/// assert_eq!(u8::MSB_BIT_PATTERN[0], 0b1000_0000);
/// assert_eq!(u8::LSB_BIT_PATTERN[0], 0b0000_0001);
/// assert_eq!(u8::MSB_MASK_PATTERN[2], 0b1110_0000);
/// assert_eq!(u8::LSB_MASK_PATTERN[2], 0b0000_0111);
/// ```
pub trait Word:
    Copy
    + Eq
    + Hash
    + Debug
    + Default
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + Shr<usize, Output = Self>
    + private::Sealed
    + 'static
{
    /// Width of the word in bits
    const BITS: usize;

    /// All bits clear
    const ZERO: Self;

    /// Only the least significant bit set
    const ONE: Self;

    /// All bits set
    const MAX: Self;

    /// `MSB_BIT_PATTERN[i]` has only the bit for logical offset `i` set when
    /// offsets run from the most significant bit
    const MSB_BIT_PATTERN: &'static [Self];

    /// `LSB_BIT_PATTERN[i]` has only the bit for logical offset `i` set when
    /// offsets run from the least significant bit
    const LSB_BIT_PATTERN: &'static [Self];

    /// `MSB_MASK_PATTERN[i]` has logical offsets `0..=i` set, most
    /// significant bit first
    const MSB_MASK_PATTERN: &'static [Self];

    /// `LSB_MASK_PATTERN[i]` has logical offsets `0..=i` set, least
    /// significant bit first
    const LSB_MASK_PATTERN: &'static [Self];

    /// Widens (or passes through) a byte into the low bits of a word
    fn from_byte(byte: u8) -> Self;
}

macro_rules! pattern_table {
    ($t:ty, $msb:expr, $cumulative:expr) => {
        &{
            const WIDTH: usize = <$t>::BITS as usize;
            let mut table: [$t; WIDTH] = [0; WIDTH];
            let mut acc: $t = 0;
            let mut i = 0;
            while i < WIDTH {
                let order = if $msb { BitOrder::MsbFirst } else { BitOrder::LsbFirst };
                let shift = order.position(i, WIDTH);
                let bit: $t = 1 << (shift as u32);
                acc |= bit;
                table[i] = if $cumulative { acc } else { bit };
                i += 1;
            }
            table
        }
    };
}

macro_rules! impl_word {
    ($t:ty) => {
        impl private::Sealed for $t {}

        impl Word for $t {
            const BITS: usize = <$t>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$t>::MAX;
            const MSB_BIT_PATTERN: &'static [Self] = pattern_table!($t, true, false);
            const LSB_BIT_PATTERN: &'static [Self] = pattern_table!($t, false, false);
            const MSB_MASK_PATTERN: &'static [Self] = pattern_table!($t, true, true);
            const LSB_MASK_PATTERN: &'static [Self] = pattern_table!($t, false, true);

            #[inline]
            fn from_byte(byte: u8) -> Self {
                byte as $t
            }
        }
    };
}

impl_word!(u8);
impl_word!(u16);
impl_word!(u32);
impl_word!(u64);
impl_word!(u128);
