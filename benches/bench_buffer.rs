use bitbuf::{BitBuffer, LsbBitBuffer, MsbBitBuffer, Word};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

static DATA: [u8; 0x1_000] = [0xa5; 0x1_000];

const ITER: u64 = 1000;

fn push_bits<W: Word, const M: bool>(n: u64) -> BitBuffer<W, M> {
    let mut bits = BitBuffer::<W, M>::new();
    for i in 0..n {
        bits.push(i & 1 == 1).unwrap();
    }
    bits
}

fn pushing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit-pushing");
    group.throughput(Throughput::Bytes(ITER / 8));
    group.bench_function("msb-u8", |b| b.iter(|| black_box(push_bits::<u8, true>(ITER))));
    group.bench_function("lsb-u8", |b| b.iter(|| black_box(push_bits::<u8, false>(ITER))));
    group.bench_function("msb-u32", |b| b.iter(|| black_box(push_bits::<u32, true>(ITER))));
    group.bench_function("msb-u64", |b| b.iter(|| black_box(push_bits::<u64, true>(ITER))));
    group.finish();
}

fn bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("push-bytes");
    group.throughput(Throughput::Bytes(DATA.len() as u64));
    group.bench_function("aligned-u8", |b| {
        b.iter(|| {
            let mut bits = MsbBitBuffer::<u8>::new();
            bits.push_bytes(&DATA);
            black_box(bits)
        })
    });

    group.bench_function("unaligned-u8", |b| {
        b.iter(|| {
            let mut bits = MsbBitBuffer::<u8>::new();
            bits.push(1).unwrap();
            bits.push_bytes(&DATA);
            black_box(bits)
        })
    });

    group.bench_function("aligned-u64", |b| {
        b.iter(|| {
            let mut bits = LsbBitBuffer::<u64>::new();
            bits.push_bytes(&DATA);
            black_box(bits)
        })
    });
    group.finish();
}

fn reading(c: &mut Criterion) {
    let mut bits = MsbBitBuffer::<u64>::new();
    bits.push_bytes(&DATA);

    let mut group = c.benchmark_group("bit-reading");
    group.throughput(Throughput::Bytes(DATA.len() as u64));
    group.bench_function("get", |b| {
        b.iter(|| (0..bits.len()).filter(|&i| bits.get(i)).count())
    });
    group.bench_function("at", |b| {
        b.iter(|| (0..bits.len()).filter(|&i| bits.at(i) == Ok(true)).count())
    });
    group.finish();
}

fn concatenating(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");
    for offset in [0usize, 1, 7, 31].iter() {
        let mut lhs = MsbBitBuffer::<u32>::new();
        lhs.push_bytes(&DATA[..64]);
        lhs.resize(lhs.len() + offset);

        let mut rhs = MsbBitBuffer::<u32>::new();
        rhs.push_bytes(&DATA);

        group.throughput(Throughput::Bytes(DATA.len() as u64));
        group.bench_with_input(BenchmarkId::new("lhs-offset", offset), offset, |b, _| {
            b.iter(|| black_box(MsbBitBuffer::concat(&lhs, &rhs)))
        });
    }
    group.finish();
}

criterion_group!(benches, pushing, bytes, reading, concatenating);
criterion_main!(benches);
