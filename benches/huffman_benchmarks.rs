use criterion::{criterion_group, criterion_main, Criterion};
use huffpress::{compress, decompress};

fn sample_text() -> Vec<u8> {
    let paragraph = b"the quick brown fox jumps over the lazy dog. \
                      pack my box with five dozen liquor jugs.\n";
    paragraph.iter().copied().cycle().take(64 * 1024).collect()
}

fn bench_compress(c: &mut Criterion) {
    let text = sample_text();
    let mut group = c.benchmark_group("huffman");

    group.bench_function("compress_64k", |b| b.iter(|| compress(&text).unwrap()));

    let packed = compress(&text).unwrap();
    group.bench_function("decompress_64k", |b| {
        b.iter(|| decompress(&packed).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_compress);
criterion_main!(benches);
