//! Criterion benchmarks for `loads` and `dumps` over generated documents
//! of varying width, mirroring how the codec is measured against other
//! JSON implementations.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use cjson_core::{dumps, loads, Document, Value};

/// Build a flat document with `keys` entries cycling through every scalar
/// kind plus small arrays, the mix a telemetry-style payload would carry.
fn sample_document(keys: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..keys {
        let key = format!("field_{i}");
        match i % 5 {
            0 => doc.insert(key, i as i64),
            1 => doc.insert(key, i as f64 + 0.5),
            2 => doc.insert(key, format!("value for entry {i}")),
            3 => doc.insert(key, i % 2 == 0),
            _ => doc.insert(
                key,
                vec![
                    Value::Integer(i as i64),
                    Value::String(format!("tag-{i}")),
                    Value::Bool(true),
                ],
            ),
        };
    }
    doc
}

fn bench_loads(c: &mut Criterion) {
    let mut group = c.benchmark_group("loads");
    for keys in [10usize, 100, 1000] {
        let json = dumps(&sample_document(keys)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(keys), &json, |b, json| {
            b.iter(|| loads(black_box(json)).unwrap());
        });
    }
    group.finish();
}

fn bench_dumps(c: &mut Criterion) {
    let mut group = c.benchmark_group("dumps");
    for keys in [10usize, 100, 1000] {
        let doc = sample_document(keys);
        group.bench_with_input(BenchmarkId::from_parameter(keys), &doc, |b, doc| {
            b.iter(|| dumps(black_box(doc)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_loads, bench_dumps);
criterion_main!(benches);
