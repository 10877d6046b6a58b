//! Benchmarks for parsing, serialization, and path lookup.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jot_core::{parse, to_text};
use std::fmt::Write as _;

/// A records-style document: an array of small objects under one root.
fn records_doc(count: usize) -> String {
    let mut doc = String::from("{\"records\": [");
    for i in 0..count {
        if i > 0 {
            doc.push(',');
        }
        let _ = write!(
            doc,
            "{{\"id\": {i}, \"name\": \"record-{i}\", \"score\": {}.25, \"tags\": [1, 2, 3], \"active\": {}}}",
            i % 100,
            i % 2 == 0,
        );
    }
    doc.push_str("]}");
    doc
}

fn bench_parse(c: &mut Criterion) {
    let input = records_doc(200);

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("records_200", |b| {
        b.iter(|| parse(black_box(&input)).unwrap())
    });
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let root = parse(&records_doc(200)).unwrap();

    let mut group = c.benchmark_group("serialize");
    group.bench_function("compact", |b| b.iter(|| to_text(black_box(&root), false)));
    group.bench_function("pretty", |b| b.iter(|| to_text(black_box(&root), true)));
    group.finish();
}

fn bench_path(c: &mut Criterion) {
    let root = parse(&records_doc(200)).unwrap();

    let mut group = c.benchmark_group("path");
    group.bench_function("records_lookup", |b| {
        b.iter(|| root.get_path(black_box(".records[150].tags[2]")).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize, bench_path);
criterion_main!(benches);
