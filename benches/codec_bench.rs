//! Codec Benchmarks — Record Encode/Decode Throughput
//!
//! Benchmarks the per-line codec and a full registry load, which run
//! once per record at startup and exit.
//!
//! Run with: cargo bench --bench codec_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook::adapters::persistence::codec::{decode, encode, load_all, save_all};
use gradebook::domain::{Registry, Student};

/// A student with 8 subjects of 10 grades each.
fn sample_student(n: u32) -> Student {
    let mut s = Student::new(format!("Student {n}"));
    for subject in 0..8 {
        for g in 0..10 {
            s.add_grade(format!("Subject {subject}"), f64::from(g * 7 + n % 13));
        }
    }
    s
}

fn bench_encode(c: &mut Criterion) {
    let s = sample_student(1);

    c.bench_function("encode_student", |b| {
        b.iter(|| {
            let _line = encode(black_box(&s));
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let line = encode(&sample_student(1)).unwrap_or_default();

    c.bench_function("decode_student", |b| {
        b.iter(|| {
            let _s = decode(black_box(&line));
        });
    });
}

/// Full load of a 1000-record file held in memory.
fn bench_load_all(c: &mut Criterion) {
    let mut registry = Registry::new();
    for n in 0..1000 {
        registry.add(n, sample_student(n));
    }
    let mut buf = Vec::new();
    let _ = save_all(&registry, &mut buf);

    c.bench_function("load_all_1000", |b| {
        b.iter(|| {
            let _r = load_all(&mut black_box(buf.as_slice()));
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_load_all);
criterion_main!(benches);
