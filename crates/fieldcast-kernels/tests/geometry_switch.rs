//! Registry dispatch of both kernels under each geometry.

use fieldcast_core::{FieldReader, SourceMesh};
use fieldcast_kernel::FieldRegistry;
use fieldcast_kernels::{
    Geometry, StrainRate, VelocityMagnitude, STRAIN_RATE, VELOCITY, VELOCITY_MAGNITUDE,
    VOLUME_FRACTION,
};
use fieldcast_mesh::QuadMesh;
use fieldcast_test_utils::two_phase_mesh;

fn swirl() -> QuadMesh {
    two_phase_mesh(
        12,
        |x, y| if x + y < 1.0 { 1.0 } else { 0.0 },
        |x, y| [x * x - y, 0.5 * x * y + 0.25],
    )
}

fn extract(geometry: Geometry) -> (Vec<f64>, Vec<f64>) {
    let mut mesh = swirl();
    let f = mesh.field_id(VOLUME_FRACTION).unwrap();
    let u = mesh.field_id(VELOCITY).unwrap();

    let mut registry = FieldRegistry::new();
    registry
        .register(
            STRAIN_RATE,
            StrainRate::builder()
                .volume_fraction(f)
                .velocity(u)
                .geometry(geometry)
                .build()
                .unwrap(),
        )
        .unwrap();
    registry
        .register(
            VELOCITY_MAGNITUDE,
            VelocityMagnitude::builder().velocity(u).build().unwrap(),
        )
        .unwrap();

    let plan = registry.dispatch(&mut mesh).unwrap();
    let ids: Vec<_> = plan.field_ids().collect();
    (
        mesh.read(ids[0]).unwrap().to_vec(),
        mesh.read(ids[1]).unwrap().to_vec(),
    )
}

#[test]
fn geometry_changes_only_the_strain_column() {
    let (axi_strain, axi_vel) = extract(Geometry::Axisymmetric);
    let (planar_strain, planar_vel) = extract(Geometry::Planar);

    assert_eq!(axi_vel, planar_vel);
    assert_ne!(axi_strain, planar_strain);
    assert!(axi_strain
        .iter()
        .chain(&planar_strain)
        .all(|v| v.is_finite()));
}

#[test]
fn derived_fields_are_named_after_registration() {
    let mut mesh = swirl();
    let u = mesh.field_id(VELOCITY).unwrap();
    let mut registry = FieldRegistry::new();
    registry
        .register(
            VELOCITY_MAGNITUDE,
            VelocityMagnitude::builder().velocity(u).build().unwrap(),
        )
        .unwrap();
    let plan = registry.dispatch(&mut mesh).unwrap();
    let vel = plan.field_ids().next().unwrap();
    assert_eq!(mesh.field_id("vel"), Some(vel));
    assert_eq!(mesh.field_def(vel).unwrap().name, "vel");
}
