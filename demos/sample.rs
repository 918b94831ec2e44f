use bitbuf::{Error, MsbBitBuffer};
use std::io::Read;

// Using debug_assertions as a poor man's way to omit no_panic compilation on
// unoptimized builds.
#[cfg_attr(not(debug_assertions), no_panic::no_panic)]
#[inline(never)]
fn read_header(bits: &MsbBitBuffer<u8>) -> Result<(u8, bool), Error> {
    let mut version = 0u8;
    for i in 0..3 {
        version = (version << 1) | bits.at(i)? as u8;
    }

    let compressed = bits.at(3)?;
    Ok((version, compressed))
}

fn main() {
    let stdin = std::io::stdin();
    let mut data = Vec::new();
    stdin.lock().read_to_end(&mut data).unwrap();

    let mut bits = MsbBitBuffer::<u8>::new();
    bits.push_bytes(&data);
    bits.align(0);

    println!("{:?}", read_header(&bits));
    println!("{} bits in {} words", bits.len(), bits.word_count());
}
