//! Criterion micro-benchmarks for sampling, row output and the snapshot codec.

use std::hint::black_box;
use std::io;

use criterion::{criterion_group, criterion_main, Criterion};
use fieldcast_bench::{reference_config, reference_profile};
use fieldcast_core::{FieldId, MeshTopology};
use fieldcast_extract::{format_g, standard_registry, OutputGrid, RowWriter, Sampler};
use fieldcast_kernels::Geometry;
use fieldcast_mesh::codec::{decode_snapshot, encode_snapshot};
use fieldcast_mesh::EdgeBehavior;

/// Benchmark: sample both derived columns on a 256x256 output grid.
fn bench_sample_256(c: &mut Criterion) {
    let mut mesh = reference_profile().unwrap();
    let plan = standard_registry(&mesh, Geometry::Axisymmetric)
        .unwrap()
        .dispatch(&mut mesh)
        .unwrap();
    let fields: Vec<FieldId> = plan.field_ids().collect();
    let grid = OutputGrid::plan(&reference_config(256).unwrap()).unwrap();

    c.bench_function("sample_256", |b| {
        b.iter(|| {
            let (buffer, report) = Sampler::new(&grid, &fields).sample(&mesh).unwrap();
            black_box((buffer, report));
        });
    });
}

/// Benchmark: format and write 65K rows to a sink.
fn bench_write_rows_256(c: &mut Criterion) {
    let mut mesh = reference_profile().unwrap();
    let plan = standard_registry(&mesh, Geometry::Planar)
        .unwrap()
        .dispatch(&mut mesh)
        .unwrap();
    let fields: Vec<FieldId> = plan.field_ids().collect();
    let grid = OutputGrid::plan(&reference_config(256).unwrap()).unwrap();
    let (buffer, _) = Sampler::new(&grid, &fields).sample(&mesh).unwrap();

    c.bench_function("write_rows_256", |b| {
        b.iter(|| {
            let mut writer = RowWriter::new(io::sink());
            writer.write_grid(&grid, &buffer).unwrap();
            black_box(writer.rows_written());
        });
    });
}

/// Benchmark: `%g` formatting of mixed-magnitude values.
fn bench_format_g(c: &mut Criterion) {
    let values: Vec<f64> = (0..1000).map(|i| (i as f64 - 500.0) * 1.37e-3).collect();

    c.bench_function("format_g_1000", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(format_g(v));
            }
        });
    });
}

/// Benchmark: encode and decode a 65K-cell snapshot.
fn bench_codec_256(c: &mut Criterion) {
    let mesh = reference_profile().unwrap();
    let mut bytes = Vec::new();
    encode_snapshot(&mut bytes, &mesh).unwrap();

    c.bench_function("codec_encode_256", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(bytes.len());
            encode_snapshot(&mut buf, &mesh).unwrap();
            black_box(&buf);
        });
    });

    c.bench_function("codec_decode_256", |b| {
        b.iter(|| {
            let m = decode_snapshot(&mut bytes.as_slice(), EdgeBehavior::Clamp).unwrap();
            black_box(m.cell_count());
        });
    });
}

criterion_group!(
    benches,
    bench_sample_256,
    bench_write_rows_256,
    bench_format_g,
    bench_codec_256
);
criterion_main!(benches);
