#![no_main]
use bitbuf::{LsbBitBuffer, MsbBitBuffer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut msb = MsbBitBuffer::<u8>::new();
    let mut lsb = LsbBitBuffer::<u8>::new();
    let mut wide = MsbBitBuffer::<u64>::new();
    msb.push_bytes(data);
    lsb.push_bytes(data);
    wide.push_bytes(data);

    assert_eq!(msb.as_words(), data);
    for (&word, &byte) in lsb.as_words().iter().zip(data) {
        assert_eq!(word, byte.reverse_bits());
    }

    let joined = MsbBitBuffer::concat(&wide, &wide);
    assert_eq!(joined.len(), data.len() * 16);
    for i in 0..wide.len() {
        assert_eq!(msb.get(i), lsb.get(i));
        assert_eq!(msb.get(i), wide.get(i));
        assert_eq!(joined.get(i), joined.get(i + wide.len()));
    }
});
