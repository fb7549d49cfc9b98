use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use git_oid::hasher::Hasher;
use git_oid::hex::hex_decode;
use git_oid::{ObjectId, Shortener};

fn make_hex(n: u32) -> String {
    Hasher::digest(&n.to_be_bytes()).unwrap().to_hex()
}

fn hex_encode_decode(c: &mut Criterion) {
    let bytes = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB,
                 0xCD, 0xEF, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];
    let hex = ObjectId::from_raw(bytes).hex();

    let mut group = c.benchmark_group("hex");

    group.bench_function("encode_20bytes", |b| {
        b.iter(|| ObjectId::from_raw(black_box(bytes)).hex())
    });

    group.bench_function("decode_40chars", |b| {
        b.iter(|| {
            let mut buf = [0u8; 20];
            hex_decode(black_box(&hex), &mut buf).unwrap();
            buf
        })
    });

    group.finish();
}

fn oid_comparison(c: &mut Criterion) {
    let a = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();
    let b = ObjectId::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80700").unwrap();

    let mut group = c.benchmark_group("oid");

    group.bench_function("cmp", |b_iter| {
        b_iter.iter(|| black_box(&a).cmp(black_box(&b)))
    });

    group.bench_function("prefix_eq_39", |b_iter| {
        b_iter.iter(|| black_box(&a).prefix_eq(black_box(&b), 39))
    });

    group.finish();
}

fn shortener_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortener");

    for count in [1_000u32, 10_000, 22_000] {
        let ids: Vec<String> = (0..count).map(make_hex).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("add", count), &ids, |b, ids| {
            b.iter(|| {
                let mut shortener = Shortener::new(4).unwrap();
                for hex in ids {
                    shortener.add(black_box(hex)).unwrap();
                }
                shortener.min_length()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, hex_encode_decode, oid_comparison, shortener_insert);
criterion_main!(benches);
