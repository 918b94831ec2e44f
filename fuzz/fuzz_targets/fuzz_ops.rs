#![no_main]
use bitbuf::{LsbBitBuffer, MsbBitBuffer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut msb = MsbBitBuffer::<u16>::new();
    let mut lsb = LsbBitBuffer::<u8>::new();
    let mut model: Vec<bool> = Vec::new();

    for pair in data.chunks(2) {
        let op = pair[0];
        let arg = pair.get(1).copied().unwrap_or(0);
        match op % 8 {
            0 | 1 => {
                let bit = arg & 1 == 1;
                msb.push(bit).unwrap();
                lsb.push(bit).unwrap();
                model.push(bit);
            }
            2 => {
                let expected = model.pop();
                assert_eq!(msb.pop().ok(), expected);
                assert_eq!(lsb.pop().ok(), expected);
            }
            3 => {
                let len = usize::from(arg);
                let fill = op & 0x80 != 0;
                msb.resize_fill(len, fill).unwrap();
                lsb.resize_fill(len, fill).unwrap();
                model.resize(len, fill);
            }
            4 => {
                msb.push_byte(arg);
                lsb.push_byte(arg);
                for shift in (0..8).rev() {
                    model.push((arg >> shift) & 1 == 1);
                }
            }
            5 => {
                let index = usize::from(arg);
                let bit = op & 0x80 != 0;
                let ok = index < model.len();
                assert_eq!(msb.replace(index, bit).is_ok(), ok);
                assert_eq!(lsb.replace(index, bit).is_ok(), ok);
                if ok {
                    model[index] = bit;
                }
            }
            6 if model.len() < 4096 => {
                let tail = msb.sub_range(model.len() / 2, model.len()).unwrap();
                msb = MsbBitBuffer::concat(&msb, &tail);
                let tail = lsb.sub_range(model.len() / 2, model.len()).unwrap();
                lsb += &tail;
                let half = model[model.len() / 2..].to_vec();
                model.extend(half);
            }
            7 => {
                let pattern = u16::from(arg) | u16::from(op) << 8;
                msb.align(pattern);
                let mut k = 0;
                while model.len() % 16 != 0 {
                    model.push((pattern >> k) & 1 == 1);
                    k += 1;
                }
                lsb.clear();
                lsb.extend(model.iter().copied());
            }
            _ => {}
        }

        assert_eq!(msb.len(), model.len());
        assert_eq!(lsb.len(), model.len());
    }

    for (i, &bit) in model.iter().enumerate() {
        assert_eq!(msb.get(i), bit);
        assert_eq!(lsb.at(i), Ok(bit));
    }
});
