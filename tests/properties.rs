use bitbuf::{BitBuffer, LsbBitBuffer, MsbBitBuffer, Word};
use quickcheck_macros::quickcheck;

fn to_bools<W: Word, const M: bool>(bits: &BitBuffer<W, M>) -> Vec<bool> {
    (0..bits.len()).map(|i| bits.get(i)).collect()
}

fn pushes_preserved<W: Word, const M: bool>(data: &[bool]) -> bool {
    let mut bits = BitBuffer::<W, M>::new();
    for (i, &bit) in data.iter().enumerate() {
        if bits.push(bit).is_err() || bits.len() != i + 1 {
            return false;
        }
    }

    data.iter().enumerate().all(|(i, &bit)| bits.get(i) == bit)
        && bits.word_count() == (data.len() + W::BITS - 1) / W::BITS
}

#[quickcheck]
fn push_preserves_order(data: Vec<bool>) -> bool {
    pushes_preserved::<u8, true>(&data)
        && pushes_preserved::<u8, false>(&data)
        && pushes_preserved::<u16, true>(&data)
        && pushes_preserved::<u32, false>(&data)
        && pushes_preserved::<u64, true>(&data)
        && pushes_preserved::<u128, false>(&data)
}

#[quickcheck]
fn push_pop_roundtrip(data: Vec<bool>, extra: bool) -> bool {
    let mut bits: MsbBitBuffer<u8> = data.iter().copied().collect();
    let before = bits.clone();
    bits.push(extra).unwrap();
    bits.pop() == Ok(extra) && bits == before
}

#[quickcheck]
fn pop_all_reverses(data: Vec<bool>) -> bool {
    let mut bits: LsbBitBuffer<u16> = data.iter().copied().collect();
    let mut popped = Vec::new();
    while let Ok(bit) = bits.pop() {
        popped.push(bit);
    }
    popped.reverse();
    popped == data && bits.is_empty() && bits.word_count() == 0
}

#[quickcheck]
fn with_length_fill_uniform(n: u16, fill: bool) -> bool {
    let n = usize::from(n % 1024);
    let msb = MsbBitBuffer::<u64>::with_length_fill(n, fill).unwrap();
    let lsb = LsbBitBuffer::<u8>::with_length_fill(n, fill).unwrap();
    msb.len() == n
        && lsb.len() == n
        && (0..n).all(|i| msb.get(i) == fill && lsb.get(i) == fill)
}

fn concat_holds<W: Word, const M: bool>(a: &[bool], b: &[bool]) -> bool {
    let lhs: BitBuffer<W, M> = a.iter().copied().collect();
    let rhs: BitBuffer<W, M> = b.iter().copied().collect();
    let joined = BitBuffer::concat(&lhs, &rhs);

    let mut expected = a.to_vec();
    expected.extend_from_slice(b);
    let fresh: BitBuffer<W, M> = expected.iter().copied().collect();

    joined.len() == lhs.len() + rhs.len() && to_bools(&joined) == expected && joined == fresh
}

#[quickcheck]
fn concat_preserves_both(a: Vec<bool>, b: Vec<bool>) -> bool {
    concat_holds::<u8, true>(&a, &b)
        && concat_holds::<u8, false>(&a, &b)
        && concat_holds::<u16, true>(&a, &b)
        && concat_holds::<u64, false>(&a, &b)
}

#[quickcheck]
fn concat_associative(a: Vec<bool>, b: Vec<bool>, c: Vec<bool>) -> bool {
    let a: MsbBitBuffer<u8> = a.into_iter().collect();
    let b: MsbBitBuffer<u8> = b.into_iter().collect();
    let c: MsbBitBuffer<u8> = c.into_iter().collect();
    &(&a + &b) + &c == &a + &(&b + &c)
}

#[quickcheck]
fn align_reaches_boundary(data: Vec<bool>, pattern: u32) -> bool {
    let mut bits: LsbBitBuffer<u32> = data.iter().copied().collect();
    let len = bits.len();
    bits.align(pattern);

    let padded = bits.len() - len;
    bits.len() % 32 == 0
        && bits.is_aligned()
        && padded < 32
        && (0..padded).all(|k| bits.get(len + k) == ((pattern >> k) & 1 == 1))
        && to_bools(&bits)[..len] == data[..]
}

fn bytes_as_bits(prefix: &[bool], data: &[u8]) -> Vec<bool> {
    let mut expected = prefix.to_vec();
    for &byte in data {
        for shift in (0..8).rev() {
            expected.push((byte >> shift) & 1 == 1);
        }
    }
    expected
}

#[quickcheck]
fn push_bytes_matches_bits(prefix: Vec<bool>, data: Vec<u8>) -> bool {
    let expected = bytes_as_bits(&prefix, &data);

    let mut msb: MsbBitBuffer<u8> = prefix.iter().copied().collect();
    msb.push_bytes(&data);
    let mut lsb: LsbBitBuffer<u8> = prefix.iter().copied().collect();
    lsb.push_bytes(&data);
    let mut wide: MsbBitBuffer<u32> = prefix.iter().copied().collect();
    for &byte in &data {
        wide.push_byte(byte);
    }

    to_bools(&msb) == expected && to_bools(&lsb) == expected && to_bools(&wide) == expected
}

#[quickcheck]
fn aligned_msb_bytes_are_words(data: Vec<u8>) -> bool {
    let mut bits = MsbBitBuffer::<u8>::new();
    bits.push_bytes(&data);
    bits.as_words() == data.as_slice()
}

#[quickcheck]
fn resize_matches_model(data: Vec<bool>, n: u8, fill: bool) -> bool {
    let n = usize::from(n);
    let mut bits: MsbBitBuffer<u16> = data.iter().copied().collect();
    bits.resize_fill(n, fill).unwrap();

    let mut expected = data.clone();
    expected.resize(n, fill);

    let fresh: MsbBitBuffer<u16> = expected.iter().copied().collect();
    to_bools(&bits) == expected && bits == fresh
}

#[quickcheck]
fn sub_range_matches_slice(data: Vec<bool>, a: usize, b: usize) -> bool {
    let bits: LsbBitBuffer<u8> = data.iter().copied().collect();
    if data.is_empty() {
        return bits.sub_range(0, 0).map_or(false, |x| x.is_empty());
    }

    let (mut begin, mut end) = (a % (data.len() + 1), b % (data.len() + 1));
    if begin > end {
        core::mem::swap(&mut begin, &mut end);
    }

    let sub = bits.sub_range(begin, end).unwrap();
    let fresh: LsbBitBuffer<u8> = data[begin..end].iter().copied().collect();
    to_bools(&sub) == data[begin..end] && sub == fresh
}

#[quickcheck]
fn from_words_roundtrip(data: Vec<bool>) -> bool {
    let bits: LsbBitBuffer<u32> = data.iter().copied().collect();
    let copy = LsbBitBuffer::<u32>::from_words(bits.as_words(), bits.len()).unwrap();
    copy == bits
}

#[quickcheck]
fn replace_matches_model(data: Vec<bool>, index: usize, bit: bool) -> bool {
    let mut bits: MsbBitBuffer<u64> = data.iter().copied().collect();
    let mut expected = data.clone();
    match bits.replace(index, bit) {
        Ok(()) => {
            expected[index] = bit;
            to_bools(&bits) == expected
        }
        Err(_) => index >= data.len() && to_bools(&bits) == expected,
    }
}

#[quickcheck]
fn at_agrees_with_len(data: Vec<bool>, index: usize) -> bool {
    let bits: LsbBitBuffer<u16> = data.iter().copied().collect();
    match bits.at(index) {
        Ok(bit) => index < data.len() && bit == data[index],
        Err(_) => index >= data.len(),
    }
}
