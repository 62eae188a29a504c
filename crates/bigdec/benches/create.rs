use bigdec::{Config, Precision, create};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Benchmarks the creation paths with the default configuration.
fn criterion_benchmark(c: &mut Criterion) {
    let config = Config::default();

    c.bench_function("create_int", |b| {
        b.iter(|| create(black_box(123_456_789_i64), Precision::Digits(5), false, &config));
    });
    c.bench_function("create_float", |b| {
        b.iter(|| create(black_box(0.1_f64), Precision::Digits(10), false, &config));
    });
    c.bench_function("create_literal_strict", |b| {
        b.iter(|| create(black_box("1_234_567.891e-3"), Precision::Omitted, true, &config));
    });
    c.bench_function("create_literal_prefix", |b| {
        let text = "  3.14159265358979323846264338327950288 trailing";
        b.iter(|| create(black_box(text), Precision::Digits(20), false, &config));
    });
    c.bench_function("create_literal_overflow", |b| {
        b.iter(|| create(black_box("1e400"), Precision::Omitted, true, &config));
    });

    let long = format!("0.{}", "7".repeat(400));
    c.bench_function("create_literal_round_long", |b| {
        b.iter(|| create(black_box(long.as_str()), Precision::Digits(34), true, &config));
    });

    let payload = "caf=C3=A9 =3D soft=\r\nbreak ".repeat(64);
    c.bench_function("mime_decode", |b| {
        b.iter(|| bigdec::mime::decode(black_box(payload.as_bytes()), 0, payload.len()));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
