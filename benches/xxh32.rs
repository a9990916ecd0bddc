use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, RngCore};
use xxhash32::{hash, XxHash32};

const SIZES: [usize; 4] = [15, 256, 4096, 1 << 20];

fn bench_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("xxh32/oneshot");
    for &size in SIZES.iter() {
        let mut data = vec![0u8; size];
        thread_rng().fill_bytes(&mut data);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{} bytes", size), |b| b.iter(|| hash(&data, 0)));
    }
    group.finish()
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("xxh32/streaming");
    let mut data = vec![0u8; 1 << 20];
    thread_rng().fill_bytes(&mut data);
    group.throughput(Throughput::Bytes(data.len() as u64));
    for &chunk in [7usize, 64, 4096].iter() {
        group.bench_function(format!("{} byte chunks", chunk), |b| {
            b.iter(|| {
                let mut state = XxHash32::new(0);
                for piece in data.chunks(chunk) {
                    state.update(piece);
                }
                state.digest()
            })
        });
    }
    group.finish()
}

criterion_main!(xxh32);
criterion_group!(xxh32, bench_oneshot, bench_streaming);
