/*!

***Packing bits one word at a time***

Bitbuf is a growable bit buffer for building binary wire formats. Bits are
appended, popped, read back by absolute position, and stored densely in a
`Vec` of unsigned words whose width and bit order are chosen at compile time.

## Features

 - ✔ backing words of `u8`, `u16`, `u32`, `u64`, or `u128`
 - ✔ most significant bit first or least significant bit first within a word
 - ✔ amortized constant time push and pop, constant time length
 - ✔ exact resize with a fill bit, word alignment with a fill pattern
 - ✔ concatenation and sub ranges
 - ✔ zero dependencies
 - ✔ `no_std` compatible (requires `alloc`)

## Example

```rust
use bitbuf::MsbBitBuffer;

let mut bits = MsbBitBuffer::<u8>::new();
bits.push(1).unwrap();
bits.push(false).unwrap();
bits.push_byte(0xfe);
assert_eq!(bits.len(), 10);

// Pad to the next word boundary with ones
bits.align(0xff);
assert_eq!(bits.len(), 16);
assert_eq!(bits.as_words(), &[0b1011_1111, 0b1011_1111]);

assert_eq!(bits.back(), Ok(true));
assert_eq!(bits.pop(), Ok(true));
assert_eq!(bits.len(), 15);
```

The word type decides how the packed words look when exported, while the
logical bit sequence is the same for every word type:

```rust
use bitbuf::{LsbBitBuffer, MsbBitBuffer};

let msb: MsbBitBuffer<u16> = [true, true, false, true].iter().copied().collect();
let lsb: LsbBitBuffer<u8> = [true, true, false, true].iter().copied().collect();

assert_eq!(msb.to_string(), lsb.to_string());
assert_eq!(msb.as_words(), &[0xd000]);
assert_eq!(lsb.as_words(), &[0x0b]);
```

Fallible operations return an [`Error`] rather than panicking. Bits may be
given as `bool` or as integers, and integers other than `0` and `1` are
rejected instead of truncated:

```rust
use bitbuf::{Error, LsbBitBuffer};

let mut bits = LsbBitBuffer::<u32>::with_length_fill(40, 1).unwrap();
assert_eq!(bits.replace(39, 2), Err(Error::InvalidArgument));
assert_eq!(bits.at(40), Err(Error::OutOfRange { index: 40, len: 40 }));

let mut joined = bits.sub_range(0, 8).unwrap();
joined += &bits;
assert_eq!(joined.len(), 48);
```

### `no_std` crates

This crate has a feature, `std`, that is enabled by default. To use this crate
in a `no_std` context, add the following to your `Cargo.toml`:

```toml
[dependencies]
bitbuf = { version = "x", default-features = false }
```

*/

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod bit;
mod buffer;
mod error;
mod word;

pub use crate::bit::IntoBit;
pub use crate::buffer::{BitBuffer, LsbBitBuffer, MsbBitBuffer};
pub use crate::error::Error;
pub use crate::word::{BitOrder, Word};
