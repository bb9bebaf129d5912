//! Criterion micro-benchmarks for the derived-field kernels and registry dispatch.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fieldcast_bench::{reference_profile, stress_profile};
use fieldcast_core::SourceMesh;
use fieldcast_extract::standard_registry;
use fieldcast_kernel::{FieldKernel, KernelContext};
use fieldcast_kernels::{Geometry, StrainRate, VelocityMagnitude, VELOCITY, VOLUME_FRACTION};

/// Benchmark: StrainRate over 65K cells, both geometries.
fn bench_strain_rate_256(c: &mut Criterion) {
    let mesh = reference_profile().unwrap();
    let f = mesh.field_id(VOLUME_FRACTION).unwrap();
    let u = mesh.field_id(VELOCITY).unwrap();
    let mut out = vec![0.0; 256 * 256];

    for geometry in [Geometry::Axisymmetric, Geometry::Planar] {
        let kernel = StrainRate::builder()
            .volume_fraction(f)
            .velocity(u)
            .geometry(geometry)
            .build()
            .unwrap();
        c.bench_function(&format!("strain_rate_256_{geometry}"), |b| {
            b.iter(|| {
                let mut ctx = KernelContext::new(&mesh, &mesh, &mut out);
                kernel.compute(&mut ctx).unwrap();
                black_box(&out);
            });
        });
    }
}

/// Benchmark: axisymmetric StrainRate over ~1M cells.
fn bench_strain_rate_stress(c: &mut Criterion) {
    let mesh = stress_profile().unwrap();
    let kernel = StrainRate::builder()
        .volume_fraction(mesh.field_id(VOLUME_FRACTION).unwrap())
        .velocity(mesh.field_id(VELOCITY).unwrap())
        .build()
        .unwrap();
    let mut out = vec![0.0; 1024 * 1024];

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("strain_rate_1024", |b| {
        b.iter(|| {
            let mut ctx = KernelContext::new(&mesh, &mesh, &mut out);
            kernel.compute(&mut ctx).unwrap();
            black_box(&out);
        });
    });
    group.finish();
}

/// Benchmark: VelocityMagnitude over 65K cells.
fn bench_velocity_magnitude_256(c: &mut Criterion) {
    let mesh = reference_profile().unwrap();
    let u = mesh.field_id(VELOCITY).unwrap();
    let kernel = VelocityMagnitude::builder().velocity(u).build().unwrap();
    let mut out = vec![0.0; 256 * 256];

    c.bench_function("velocity_magnitude_256", |b| {
        b.iter(|| {
            let mut ctx = KernelContext::new(&mesh, &mesh, &mut out);
            kernel.compute(&mut ctx).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: validate, declare and fill both derived fields.
fn bench_registry_dispatch_256(c: &mut Criterion) {
    let mesh = reference_profile().unwrap();
    let registry = standard_registry(&mesh, Geometry::Axisymmetric).unwrap();

    c.bench_function("registry_dispatch_256", |b| {
        b.iter_batched(
            || mesh.clone(),
            |mut m| {
                let plan = registry.dispatch(&mut m).unwrap();
                black_box(plan);
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_strain_rate_256,
    bench_strain_rate_stress,
    bench_velocity_magnitude_256,
    bench_registry_dispatch_256
);
criterion_main!(benches);
