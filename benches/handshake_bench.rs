use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use panel_link::handshake::{derive_key, generate_type1, parse_type1, transform_type2};
use panel_link::message::{ByteCursor, Field, MessageLayout};
use panel_link::utils::random::OsRandom;

#[allow(clippy::unwrap_used)]
fn bench_handshake(c: &mut Criterion) {
    let mut group = c.benchmark_group("handshake");

    group.bench_function("derive_key", |b| {
        b.iter(|| derive_key("123456789012").unwrap())
    });

    group.bench_function("generate_type1", |b| {
        b.iter(|| generate_type1("12345678", &mut OsRandom).unwrap())
    });

    let hs = generate_type1("12345678", &mut OsRandom).unwrap();
    group.bench_function("parse_type1", |b| {
        b.iter(|| parse_type1("123456789012", &hs.initializer).unwrap())
    });

    let access_code = "11223344556677889900112233445566";
    let initializer = [0xA5u8; 16];
    group.bench_function("transform_type2", |b| {
        b.iter(|| transform_type2(access_code, &initializer).unwrap())
    });

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_layout_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_parse");
    let payload_sizes = [64usize, 512, 4096];

    for &size in &payload_sizes {
        let buffer = vec![0x42u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("fixed_header_unbounded_body_{size}b"), |b| {
            let mut layout = MessageLayout::new();
            layout.push(Field::fixed(2)).unwrap();
            layout.push(Field::fixed(4)).unwrap();
            layout.push(Field::unbounded()).unwrap();

            b.iter(|| {
                let mut cursor = ByteCursor::new(&buffer);
                assert!(layout.parse(&mut cursor));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_handshake, bench_layout_parse);
criterion_main!(benches);
