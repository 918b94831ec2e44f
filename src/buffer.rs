use crate::{BitOrder, Error, IntoBit, Word};
use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;
use core::ops::{Add, AddAssign, Index};

/// A growable sequence of bits packed into words
///
/// `W` is the backing word (`u8` through `u128`) and `MSB_FIRST` picks which
/// end of each word holds the first bit. The [`MsbBitBuffer`] and
/// [`LsbBitBuffer`] aliases read better at call sites.
///
/// The buffer tracks only its words and how many bits of the last word are
/// in use. The length is derived from those two, so no operation ever scans
/// the store. Bits of the last word past the logical end are kept zeroed,
/// which makes [`as_words`](BitBuffer::as_words) deterministic and lets two
/// buffers compare equal exactly when their bits do.
///
/// ```rust
/// use bitbuf::MsbBitBuffer;
///
/// let mut bits = MsbBitBuffer::<u8>::new();
/// bits.push(true).unwrap();
/// bits.push(0).unwrap();
/// bits.push_byte(0xff);
/// assert_eq!(bits.len(), 10);
/// assert_eq!(bits.as_words(), &[0b1011_1111, 0b1100_0000]);
/// assert_eq!(bits.pop(), Ok(true));
/// assert_eq!(bits.to_string(), "101111111");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitBuffer<W: Word, const MSB_FIRST: bool> {
    /// Backing store, always exactly `ceil(len / W::BITS)` words
    words: Vec<W>,

    /// Bits in use in the last word. `W::BITS` when `words` is empty so that
    /// the next push allocates.
    open: usize,
}

/// Buffer whose first bit is the most significant bit of the first word
pub type MsbBitBuffer<W> = BitBuffer<W, true>;

/// Buffer whose first bit is the least significant bit of the first word
pub type LsbBitBuffer<W> = BitBuffer<W, false>;

impl<W: Word, const MSB_FIRST: bool> BitBuffer<W, MSB_FIRST> {
    /// Order of bits within each word
    pub const BIT_ORDER: BitOrder = if MSB_FIRST {
        BitOrder::MsbFirst
    } else {
        BitOrder::LsbFirst
    };

    /// `BIT_PATTERN[i]` is the word with only logical offset `i` set
    pub const BIT_PATTERN: &'static [W] = if MSB_FIRST {
        W::MSB_BIT_PATTERN
    } else {
        W::LSB_BIT_PATTERN
    };

    /// `MASK_PATTERN[i]` is the word with logical offsets `0..=i` set
    pub const MASK_PATTERN: &'static [W] = if MSB_FIRST {
        W::MSB_MASK_PATTERN
    } else {
        W::LSB_MASK_PATTERN
    };

    /// Creates an empty buffer. Nothing is allocated until the first push.
    #[inline]
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            open: W::BITS,
        }
    }

    /// Creates an empty buffer with room for at least `bits` bits
    #[inline]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(Self::words_for(bits)),
            open: W::BITS,
        }
    }

    /// Creates a buffer of `len` zero bits
    ///
    /// ```rust
    /// use bitbuf::LsbBitBuffer;
    /// let bits = LsbBitBuffer::<u32>::with_length(40);
    /// assert_eq!(bits.len(), 40);
    /// assert_eq!(bits.word_count(), 2);
    /// assert_eq!(bits.as_words(), &[0, 0]);
    /// ```
    pub fn with_length(len: usize) -> Self {
        let mut result = Self::new();
        result.resize(len);
        result
    }

    /// Creates a buffer of `len` bits that all equal `bit`
    ///
    /// ```rust
    /// use bitbuf::{Error, MsbBitBuffer};
    /// let bits = MsbBitBuffer::<u64>::with_length_fill(101, 1).unwrap();
    /// assert_eq!(bits.word_count(), 2);
    /// assert_eq!(bits.as_words()[1], u64::MAX << 27);
    /// assert!(bits.get(0) && bits.get(100));
    ///
    /// assert_eq!(
    ///     MsbBitBuffer::<u64>::with_length_fill(8, 3).unwrap_err(),
    ///     Error::InvalidArgument
    /// );
    /// ```
    pub fn with_length_fill<B: IntoBit>(len: usize, bit: B) -> Result<Self, Error> {
        let mut result = Self::new();
        result.resize_fill(len, bit)?;
        Ok(result)
    }

    /// Creates a buffer of `len` bits copied from the front of `data`
    ///
    /// Only the words needed to hold `len` bits are copied, and the bits of
    /// the last one past `len` are cleared. Fails with
    /// [`Error::OutOfRange`] when `data` is shorter than `len` bits.
    ///
    /// ```rust
    /// use bitbuf::MsbBitBuffer;
    /// let bits = MsbBitBuffer::<u8>::from_words(&[0xff, 0xff, 0xff], 12).unwrap();
    /// assert_eq!(bits.as_words(), &[0xff, 0xf0]);
    /// assert!(MsbBitBuffer::<u8>::from_words(&[0xff], 9).is_err());
    /// ```
    pub fn from_words(data: &[W], len: usize) -> Result<Self, Error> {
        let count = Self::words_for(len);
        if data.len() < count {
            return Err(Error::OutOfRange {
                index: len - 1,
                len: data.len() * W::BITS,
            });
        }

        let mut result = Self {
            words: data[..count].to_vec(),
            open: Self::open_for(len),
        };
        result.mask_tail();
        Ok(result)
    }

    /// Number of bits in the buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len() * W::BITS - (W::BITS - self.open)
    }

    /// Returns true if the buffer holds no bits
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words backing the buffer
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Width of a backing word in bits
    #[inline]
    pub fn word_bit_width(&self) -> usize {
        W::BITS
    }

    /// Number of bits the buffer can hold without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity() * W::BITS
    }

    /// Returns the number of bits used in the last, partially filled, word
    ///
    /// Zero when the buffer ends on a word boundary.
    ///
    /// ```rust
    /// use bitbuf::MsbBitBuffer;
    /// let mut bits = MsbBitBuffer::<u8>::new();
    /// assert_eq!(bits.unaligned_bits(), 0);
    /// bits.push_bytes(&[0xab, 0xcd]);
    /// assert_eq!(bits.unaligned_bits(), 0);
    /// bits.push(1).unwrap();
    /// assert_eq!(bits.unaligned_bits(), 1);
    /// ```
    #[inline]
    pub fn unaligned_bits(&self) -> usize {
        self.open % W::BITS
    }

    /// Returns true if the buffer ends on a word boundary
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.open == W::BITS
    }

    /// The backing words. Bits past the logical end are zero.
    #[inline]
    pub fn as_words(&self) -> &[W] {
        &self.words
    }

    /// Unwraps the buffer into its backing words
    #[inline]
    pub fn into_words(self) -> Vec<W> {
        self.words
    }

    /// Reserves room for at least `bits` bits in total
    pub fn reserve(&mut self, bits: usize) {
        let needed = Self::words_for(bits);
        self.words.reserve(needed.saturating_sub(self.words.len()));
    }

    /// Removes every bit. Allocated capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.words.clear();
        self.open = W::BITS;
    }

    /// Appends a bit
    ///
    /// Accepts `bool` or an integer that is `0` or `1`; any other integer is
    /// rejected with [`Error::InvalidArgument`] and nothing is appended.
    ///
    /// ```rust
    /// use bitbuf::{Error, MsbBitBuffer};
    /// let mut bits = MsbBitBuffer::<u8>::new();
    /// for &bit in &[1, 0, 1, 0] {
    ///     bits.push(bit).unwrap();
    /// }
    /// assert_eq!(bits.len(), 4);
    /// assert_eq!(bits.as_words(), &[0b1010_0000]);
    /// assert_eq!(bits.push(7), Err(Error::InvalidArgument));
    /// assert_eq!(bits.len(), 4);
    /// ```
    #[inline]
    pub fn push<B: IntoBit>(&mut self, bit: B) -> Result<(), Error> {
        let bit = bit.into_bit()?;
        self.push_bit(bit);
        Ok(())
    }

    /// Removes the last bit and returns it
    ///
    /// A word is released from the store as soon as its last bit is popped,
    /// so popping every bit leaves the buffer in the same state as
    /// [`new`](BitBuffer::new), apart from capacity.
    ///
    /// ```rust
    /// use bitbuf::{Error, LsbBitBuffer};
    /// let mut bits = LsbBitBuffer::<u16>::new();
    /// bits.push(1).unwrap();
    /// assert_eq!(bits.pop(), Ok(true));
    /// assert_eq!(bits.word_count(), 0);
    /// assert_eq!(bits.pop(), Err(Error::Underflow));
    /// ```
    pub fn pop(&mut self) -> Result<bool, Error> {
        let open = self.open;
        let mask = Self::BIT_PATTERN[open - 1];
        let last = self.words.last_mut().ok_or(Error::Underflow)?;
        let bit = *last & mask != W::ZERO;
        *last &= !mask;

        if open == 1 {
            self.words.pop();
            self.open = W::BITS;
        } else {
            self.open = open - 1;
        }

        Ok(bit)
    }

    /// Pads the buffer up to the next word boundary
    ///
    /// The k-th padding bit is bit k of `fill_pattern`, counting from the
    /// least significant bit, whatever the buffer's own bit order. Does
    /// nothing when the buffer is already aligned.
    ///
    /// ```rust
    /// use bitbuf::MsbBitBuffer;
    /// let mut bits = MsbBitBuffer::<u8>::new();
    /// bits.push(1).unwrap();
    /// bits.align(0b0000_0101);
    /// assert_eq!(bits.len(), 8);
    /// assert_eq!(bits.as_words(), &[0b1101_0000]);
    /// ```
    pub fn align(&mut self, fill_pattern: W) {
        let mut k = 0;
        while !self.is_aligned() {
            self.push_bit((fill_pattern >> k) & W::ONE != W::ZERO);
            k += 1;
        }
    }

    /// Returns the bit at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`len`](BitBuffer::len). See
    /// [`at`](BitBuffer::at) for the checked variant.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        let len = self.len();
        assert!(
            index < len,
            "bit index {} out of range for length {}",
            index,
            len
        );
        self.words[index / W::BITS] & Self::BIT_PATTERN[index % W::BITS] != W::ZERO
    }

    /// Returns the bit at `index` or [`Error::OutOfRange`]
    ///
    /// ```rust
    /// use bitbuf::{Error, MsbBitBuffer};
    /// let bits = MsbBitBuffer::<u8>::from_words(&[0b0100_0000], 3).unwrap();
    /// assert_eq!(bits.at(1), Ok(true));
    /// assert_eq!(bits.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<bool, Error> {
        let len = self.len();
        if index < len {
            let word = self.words.get(index / W::BITS);
            let mask = Self::BIT_PATTERN.get(index % W::BITS);
            if let (Some(&word), Some(&mask)) = (word, mask) {
                return Ok(word & mask != W::ZERO);
            }
        }

        Err(Error::OutOfRange { index, len })
    }

    /// Returns the first bit
    #[inline]
    pub fn front(&self) -> Result<bool, Error> {
        self.at(0)
    }

    /// Returns the last bit
    ///
    /// ```rust
    /// use bitbuf::{Error, MsbBitBuffer};
    /// let bits = MsbBitBuffer::<u64>::from_words(&[0xfe], 63).unwrap();
    /// assert_eq!(bits.back(), Ok(true));
    /// assert_eq!(
    ///     MsbBitBuffer::<u64>::new().back(),
    ///     Err(Error::OutOfRange { index: 0, len: 0 })
    /// );
    /// ```
    #[inline]
    pub fn back(&self) -> Result<bool, Error> {
        match self.len().checked_sub(1) {
            Some(index) => self.at(index),
            None => Err(Error::OutOfRange { index: 0, len: 0 }),
        }
    }

    /// Overwrites the bit at `index`
    ///
    /// ```rust
    /// use bitbuf::{Error, LsbBitBuffer};
    /// let mut bits = LsbBitBuffer::<u8>::with_length(4);
    /// bits.replace(2, true).unwrap();
    /// assert_eq!(bits.as_words(), &[0b0000_0100]);
    /// assert_eq!(bits.replace(2, 5), Err(Error::InvalidArgument));
    /// assert_eq!(bits.replace(4, 1), Err(Error::OutOfRange { index: 4, len: 4 }));
    /// ```
    pub fn replace<B: IntoBit>(&mut self, index: usize, bit: B) -> Result<(), Error> {
        let bit = bit.into_bit()?;
        let len = self.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }

        let mask = Self::BIT_PATTERN[index % W::BITS];
        let word = &mut self.words[index / W::BITS];
        if bit {
            *word |= mask;
        } else {
            *word &= !mask;
        }

        Ok(())
    }

    /// Appends the 8 bits of `byte`, most significant bit first
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.push_bytes(core::slice::from_ref(&byte))
    }

    /// Appends the bits of each byte, most significant bit first
    ///
    /// ```rust
    /// use bitbuf::{LsbBitBuffer, MsbBitBuffer};
    ///
    /// let mut msb = MsbBitBuffer::<u8>::new();
    /// msb.push_bytes(&[0x81, 0x91]);
    /// assert_eq!(msb.as_words(), &[0x81, 0x91]);
    ///
    /// // The first bit pushed lands in the least significant position
    /// let mut lsb = LsbBitBuffer::<u8>::new();
    /// lsb.push_bytes(&[0x81, 0x91]);
    /// assert_eq!(lsb.as_words(), &[0x81, 0x89]);
    /// ```
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        if W::BITS == 8 && self.is_aligned() {
            // Whole bytes map onto whole words
            self.words.extend(bytes.iter().map(|&byte| {
                W::from_byte(if MSB_FIRST { byte } else { byte.reverse_bits() })
            }));
            return;
        }

        self.reserve(self.len() + bytes.len() * 8);
        for &byte in bytes {
            for shift in (0..8).rev() {
                self.push_bit((byte >> shift) & 1 == 1);
            }
        }
    }

    /// Sets the length to `len`, appending zero bits when growing
    pub fn resize(&mut self, len: usize) {
        self.resize_bits(len, false)
    }

    /// Sets the length to `len`, appending copies of `fill` when growing
    ///
    /// Shrinking drops the words past the new end and clears the bits of the
    /// new last word beyond `len`.
    ///
    /// ```rust
    /// use bitbuf::MsbBitBuffer;
    /// let mut bits = MsbBitBuffer::<u8>::new();
    /// bits.push(0).unwrap();
    /// bits.resize_fill(10, 1).unwrap();
    /// assert_eq!(bits.as_words(), &[0b0111_1111, 0b1100_0000]);
    /// bits.resize_fill(3, 1).unwrap();
    /// assert_eq!(bits.as_words(), &[0b0110_0000]);
    /// assert!(bits.resize_fill(20, 2).is_err());
    /// assert_eq!(bits.len(), 3);
    /// ```
    pub fn resize_fill<B: IntoBit>(&mut self, len: usize, fill: B) -> Result<(), Error> {
        let fill = fill.into_bit()?;
        self.resize_bits(len, fill);
        Ok(())
    }

    /// Returns a new buffer holding `lhs` followed by `rhs`
    ///
    /// ```rust
    /// use bitbuf::MsbBitBuffer;
    /// let lhs = MsbBitBuffer::<u8>::from_words(&[0b1110_0000], 3).unwrap();
    /// let rhs = MsbBitBuffer::<u8>::from_words(&[0xff, 0b1000_0000], 9).unwrap();
    /// let joined = MsbBitBuffer::concat(&lhs, &rhs);
    /// assert_eq!(joined.len(), 12);
    /// assert_eq!(joined.as_words(), &[0xff, 0b1111_0000]);
    /// assert_eq!(joined, &lhs + &rhs);
    /// ```
    pub fn concat(lhs: &Self, rhs: &Self) -> Self {
        let mut result = Self::with_capacity(lhs.len() + rhs.len());
        result.append(lhs);
        result.append(rhs);
        result
    }

    /// Appends every bit of `other`
    ///
    /// When this buffer ends on a word boundary the words of `other` are
    /// copied as is, otherwise the bits are pushed one at a time.
    pub fn append(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }

        if self.is_aligned() {
            self.words.extend_from_slice(&other.words);
            self.open = other.open;
        } else {
            self.reserve(self.len() + other.len());
            self.push_range(other, 0, other.len());
        }
    }

    /// Copies the bits in `begin..end` into a new buffer
    ///
    /// ```rust
    /// use bitbuf::MsbBitBuffer;
    /// let mut bits = MsbBitBuffer::<u8>::new();
    /// bits.push_bytes(&[0b1100_1010, 0b0111_0000]);
    /// let sub = bits.sub_range(4, 12).unwrap();
    /// assert_eq!(sub.as_words(), &[0b1010_0111]);
    /// assert!(bits.sub_range(4, 17).is_err());
    /// assert!(bits.sub_range(5, 4).is_err());
    /// ```
    pub fn sub_range(&self, begin: usize, end: usize) -> Result<Self, Error> {
        let len = self.len();
        if end > len {
            return Err(Error::OutOfRange { index: end - 1, len });
        } else if begin > end {
            return Err(Error::OutOfRange { index: begin, len });
        } else if begin == end {
            return Ok(Self::new());
        }

        if begin % W::BITS == 0 {
            let first = begin / W::BITS;
            let mut result = Self {
                words: self.words[first..Self::words_for(end)].to_vec(),
                open: Self::open_for(end - begin),
            };
            result.mask_tail();
            return Ok(result);
        }

        let mut result = Self::with_capacity(end - begin);
        result.push_range(self, begin, end);
        Ok(result)
    }

    #[inline]
    fn push_bit(&mut self, bit: bool) {
        if self.is_aligned() {
            self.words.push(W::ZERO);
            self.open = 0;
        }

        if bit {
            let mask = Self::BIT_PATTERN[self.open];
            if let Some(last) = self.words.last_mut() {
                *last |= mask;
            }
        }

        self.open += 1;
    }

    fn push_range(&mut self, src: &Self, begin: usize, end: usize) {
        debug_assert!(begin <= end && end <= src.len());
        for index in begin..end {
            let word = src.words[index / W::BITS];
            self.push_bit(word & Self::BIT_PATTERN[index % W::BITS] != W::ZERO);
        }
    }

    fn resize_bits(&mut self, len: usize, fill: bool) {
        if len == 0 {
            self.clear();
            return;
        }

        // The unused tail of the open word is zero and must take the fill
        if fill && len > self.len() && !self.is_aligned() {
            let tail = !Self::MASK_PATTERN[self.open - 1];
            if let Some(last) = self.words.last_mut() {
                *last |= tail;
            }
        }

        let word = if fill { W::MAX } else { W::ZERO };
        self.words.resize(Self::words_for(len), word);
        self.open = Self::open_for(len);
        self.mask_tail();
    }

    /// Clears the bits of the last word beyond the logical end
    #[inline]
    fn mask_tail(&mut self) {
        let mask = Self::MASK_PATTERN[self.open - 1];
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }

    #[inline]
    fn words_for(bits: usize) -> usize {
        bits / W::BITS + (bits % W::BITS != 0) as usize
    }

    #[inline]
    fn open_for(bits: usize) -> usize {
        match bits % W::BITS {
            0 => W::BITS,
            rem => rem,
        }
    }
}

impl<W: Word, const MSB_FIRST: bool> Default for BitBuffer<W, MSB_FIRST> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word, const MSB_FIRST: bool> Index<usize> for BitBuffer<W, MSB_FIRST> {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &bool {
        if self.get(index) {
            &true
        } else {
            &false
        }
    }
}

impl<W: Word, const MSB_FIRST: bool> Extend<bool> for BitBuffer<W, MSB_FIRST> {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(self.len() + iter.size_hint().0);
        for bit in iter {
            self.push_bit(bit);
        }
    }
}

impl<W: Word, const MSB_FIRST: bool> FromIterator<bool> for BitBuffer<W, MSB_FIRST> {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<W: Word, const MSB_FIRST: bool> Add for BitBuffer<W, MSB_FIRST> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self.append(&rhs);
        self
    }
}

impl<'a, W: Word, const MSB_FIRST: bool> Add<&'a BitBuffer<W, MSB_FIRST>>
    for BitBuffer<W, MSB_FIRST>
{
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &'a Self) -> Self {
        self.append(rhs);
        self
    }
}

impl<'a, 'b, W: Word, const MSB_FIRST: bool> Add<&'b BitBuffer<W, MSB_FIRST>>
    for &'a BitBuffer<W, MSB_FIRST>
{
    type Output = BitBuffer<W, MSB_FIRST>;

    #[inline]
    fn add(self, rhs: &'b BitBuffer<W, MSB_FIRST>) -> BitBuffer<W, MSB_FIRST> {
        BitBuffer::concat(self, rhs)
    }
}

impl<W: Word, const MSB_FIRST: bool> AddAssign for BitBuffer<W, MSB_FIRST> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.append(&rhs)
    }
}

impl<'a, W: Word, const MSB_FIRST: bool> AddAssign<&'a BitBuffer<W, MSB_FIRST>>
    for BitBuffer<W, MSB_FIRST>
{
    #[inline]
    fn add_assign(&mut self, rhs: &'a Self) {
        self.append(rhs)
    }
}

impl<W: Word, const MSB_FIRST: bool> fmt::Display for BitBuffer<W, MSB_FIRST> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.len() {
            f.write_str(if self.get(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
