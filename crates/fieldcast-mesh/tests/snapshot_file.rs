//! Snapshot files written with `dump_snapshot` restore through `SnapshotRestore`.

use std::path::PathBuf;

use fieldcast_core::{
    FieldDef, FieldReader, FieldWriter, Interpolate, Sample, SnapshotRestore, SourceMesh,
};
use fieldcast_mesh::{dump_snapshot, EdgeBehavior, QuadMesh, SnapshotReader};

fn scratch_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "fieldcast-mesh-{tag}-{}.fcsn",
        std::process::id()
    ))
}

#[test]
fn restored_mesh_interpolates_like_the_source() {
    let mut mesh = QuadMesh::new([0.0, 0.0], 0.125, 16, 8, EdgeBehavior::Clamp)
        .unwrap()
        .with_time(0.5);
    let f = mesh
        .add_field_fn(FieldDef::scalar("f"), |x, y| {
            let r2 = (x - 1.0).powi(2) + (y - 0.5).powi(2);
            vec![if r2 < 0.09 { 1.0 } else { 0.0 }]
        })
        .unwrap();
    mesh.add_field_fn(FieldDef::vector("u", 2), |x, y| vec![x * y, x - y])
        .unwrap();

    let path = scratch_path("interp");
    dump_snapshot(&path, &mesh).unwrap();
    let restored = SnapshotReader::default().restore(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(restored.time(), 0.5);
    assert_eq!(restored.read(f), mesh.read(f));
    for &(x, y) in &[(0.3, 0.2), (1.0, 0.5), (1.99, 0.99), (0.0, 0.0)] {
        assert_eq!(
            restored.interpolate(f, x, y).unwrap(),
            mesh.interpolate(f, x, y).unwrap()
        );
    }
    assert_eq!(restored.interpolate(f, 2.5, 0.5).unwrap(), Sample::Outside);
}

#[test]
fn derived_fields_survive_a_dump() {
    let mut mesh = QuadMesh::new([-1.0, 0.0], 0.5, 4, 2, EdgeBehavior::Wrap).unwrap();
    mesh.add_field(FieldDef::scalar("f"), vec![0.25; 8]).unwrap();
    let vel = mesh.declare_scalar("vel").unwrap();
    for (i, v) in mesh.write(vel).unwrap().iter_mut().enumerate() {
        *v = i as f64;
    }

    let path = scratch_path("derived");
    dump_snapshot(&path, &mesh).unwrap();
    let restored = SnapshotReader::new(EdgeBehavior::Wrap)
        .restore(&path)
        .unwrap();
    std::fs::remove_file(&path).ok();

    let id = restored.field_id("vel").unwrap();
    assert_eq!(id, vel);
    assert_eq!(restored.read(id).unwrap()[3], 3.0);
}
