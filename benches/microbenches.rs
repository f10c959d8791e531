//! Criterion microbenches for coco2yolo parsing and label emission.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - COCO JSON parsing (from_coco_str, from_coco_slice)
//! - annotation grouping (group_annotations)
//! - YOLO label formatting (labels_to_string)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use coco2yolo::coco::{from_coco_slice, from_coco_str};
use coco2yolo::emit::labels_to_string;
use coco2yolo::index::{ClassIndex, ImageIndex};
use coco2yolo::transform::{group_annotations, LabelRecord};

// Include test fixtures at compile time (no file I/O during benchmark)
const COCO_FIXTURE: &str = include_str!("../tests/fixtures/sample_valid.coco.json");

/// Benchmark COCO JSON parsing from string.
fn bench_coco_parse_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("coco_parse");
    group.throughput(Throughput::Bytes(COCO_FIXTURE.len() as u64));

    group.bench_function("from_coco_str", |b| {
        b.iter(|| {
            let doc = from_coco_str(black_box(COCO_FIXTURE)).unwrap();
            black_box(doc)
        })
    });

    group.finish();
}

/// Benchmark COCO JSON parsing from byte slice.
fn bench_coco_parse_slice(c: &mut Criterion) {
    let bytes = COCO_FIXTURE.as_bytes();
    let mut group = c.benchmark_group("coco_parse");
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("from_coco_slice", |b| {
        b.iter(|| {
            let doc = from_coco_slice(black_box(bytes)).unwrap();
            black_box(doc)
        })
    });

    group.finish();
}

/// Benchmark grouping annotations into per-image label records.
///
/// The document is parsed once and the ID indexes are built once, so
/// the timed region covers only the lookup and normalization work.
fn bench_group_annotations(c: &mut Criterion) {
    let doc = from_coco_str(COCO_FIXTURE).expect("Failed to parse COCO fixture");
    let images = ImageIndex::from_images(&doc.images);
    let classes = ClassIndex::from_category_names(doc.category_names());
    let annotation_count = doc.annotations.as_deref().map_or(0, |a| a.len());

    let mut group = c.benchmark_group("group_annotations");
    group.throughput(Throughput::Elements(annotation_count as u64));

    group.bench_function("group_annotations", |b| {
        b.iter(|| {
            let groups =
                group_annotations(black_box(&doc), black_box(&images), black_box(&classes))
                    .unwrap();
            black_box(groups)
        })
    });

    group.finish();
}

/// Benchmark YOLO label line formatting.
fn bench_labels_to_string(c: &mut Criterion) {
    let doc = from_coco_str(COCO_FIXTURE).expect("Failed to parse COCO fixture");
    let images = ImageIndex::from_images(&doc.images);
    let classes = ClassIndex::from_category_names(doc.category_names());
    let groups = group_annotations(&doc, &images, &classes).expect("Failed to group annotations");
    let records: Vec<LabelRecord> = groups.into_values().flatten().collect();

    let mut group = c.benchmark_group("label_format");
    group.throughput(Throughput::Elements(records.len() as u64));

    group.bench_function("labels_to_string", |b| {
        b.iter(|| {
            let text = labels_to_string(black_box(&records));
            black_box(text)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_coco_parse_str,
    bench_coco_parse_slice,
    bench_group_annotations,
    bench_labels_to_string,
);
criterion_main!(benches);
