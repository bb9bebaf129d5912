//! Analytic two-phase meshes.
//!
//! Every fixture carries a scalar volume fraction `f` and a two-component
//! velocity `u`, the inputs a snapshot must provide. Velocities are
//! closed-form so kernel results can be checked exactly:
//!
//! - [`uniform_flow`]: constant velocity, zero strain everywhere.
//! - [`linear_shear`]: `u = (rate * y, 0)`, constant off-diagonal strain.
//! - [`solid_body_rotation`]: rigid rotation, zero planar strain.
//! - [`circular_bubble`]: a disc of `f = 1` in quiescent fluid.

use fieldcast_core::FieldDef;
use fieldcast_mesh::codec::encode_snapshot;
use fieldcast_mesh::{EdgeBehavior, QuadMesh};

/// Build a unit-square mesh of `n x n` cells with the given `f` and `u`.
pub fn two_phase_mesh(
    n: u32,
    f: impl Fn(f64, f64) -> f64,
    u: impl Fn(f64, f64) -> [f64; 2],
) -> QuadMesh {
    two_phase_mesh_on([0.0, 0.0], 1.0 / n as f64, n, n, f, u)
}

/// Build a mesh with explicit origin, cell size and extents.
pub fn two_phase_mesh_on(
    origin: [f64; 2],
    delta: f64,
    cols: u32,
    rows: u32,
    f: impl Fn(f64, f64) -> f64,
    u: impl Fn(f64, f64) -> [f64; 2],
) -> QuadMesh {
    let mut mesh = QuadMesh::new(origin, delta, cols, rows, EdgeBehavior::Clamp)
        .expect("fixture mesh dimensions are valid");
    mesh.add_field_fn(FieldDef::scalar("f"), |x, y| vec![f(x, y)])
        .expect("fixture field f");
    mesh.add_field_fn(FieldDef::vector("u", 2), |x, y| u(x, y).to_vec())
        .expect("fixture field u");
    mesh
}

/// Single-phase fluid moving at constant `(ux, uy)`.
pub fn uniform_flow(ux: f64, uy: f64) -> QuadMesh {
    two_phase_mesh(16, |_, _| 1.0, move |_, _| [ux, uy])
}

/// Single-phase simple shear `u = (rate * y, 0)`.
pub fn linear_shear(rate: f64) -> QuadMesh {
    two_phase_mesh(16, |_, _| 1.0, move |_, y| [rate * y, 0.0])
}

/// Rigid rotation at angular velocity `omega` about the square's centre.
pub fn solid_body_rotation(omega: f64) -> QuadMesh {
    two_phase_mesh(
        16,
        |_, _| 1.0,
        move |x, y| [-omega * (y - 0.5), omega * (x - 0.5)],
    )
}

/// A disc of primary phase at `center` with `radius`, fluid at rest.
pub fn circular_bubble(center: [f64; 2], radius: f64) -> QuadMesh {
    two_phase_mesh(
        32,
        move |x, y| {
            let r2 = (x - center[0]).powi(2) + (y - center[1]).powi(2);
            if r2 <= radius * radius {
                1.0
            } else {
                0.0
            }
        },
        |_, _| [0.0, 0.0],
    )
}

/// Encode a mesh as in-memory snapshot bytes.
pub fn snapshot_bytes(mesh: &QuadMesh) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_snapshot(&mut buf, mesh).expect("writing to Vec cannot fail");
    buf
}
