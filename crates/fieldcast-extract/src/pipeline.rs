//! End-to-end extraction: plan, restore, compute, sample, write.

use std::io::Write;

use fieldcast_core::{FieldId, RestoreError, SnapshotRestore, SourceMesh};
use fieldcast_kernel::FieldRegistry;
use fieldcast_kernels::{
    Geometry, StrainRate, VelocityMagnitude, STRAIN_RATE, VELOCITY, VELOCITY_MAGNITUDE,
    VOLUME_FRACTION,
};

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::grid::{GridError, OutputGrid};
use crate::sampler::Sampler;
use crate::writer::RowWriter;

/// Look up `name` and check it has `components` values per cell.
pub fn require_field<M: SourceMesh + ?Sized>(
    mesh: &M,
    name: &str,
    components: u32,
) -> Result<FieldId, RestoreError> {
    let id = mesh
        .field_id(name)
        .ok_or_else(|| RestoreError::MissingField {
            name: name.to_string(),
        })?;
    let found = mesh
        .field_def(id)
        .map(|def| def.field_type.components())
        .unwrap_or(0);
    if found != components {
        return Err(RestoreError::FieldShape {
            name: name.to_string(),
            expected: components,
            found,
        });
    }
    Ok(id)
}

/// The two output columns, in order: `D2c` under `geometry`, then `vel`.
///
/// # Errors
///
/// [`ExtractError::Restore`] if the mesh lacks a scalar `f` or a
/// 2-component `u`.
pub fn standard_registry<M: SourceMesh + ?Sized>(
    mesh: &M,
    geometry: Geometry,
) -> Result<FieldRegistry, ExtractError> {
    let f = require_field(mesh, VOLUME_FRACTION, 1)?;
    let u = require_field(mesh, VELOCITY, 2)?;

    let strain = StrainRate::builder()
        .volume_fraction(f)
        .velocity(u)
        .geometry(geometry)
        .build()
        .map_err(|reason| ExtractError::KernelConfig { reason })?;
    let vel = VelocityMagnitude::builder()
        .velocity(u)
        .build()
        .map_err(|reason| ExtractError::KernelConfig { reason })?;

    let mut registry = FieldRegistry::new();
    registry.register(STRAIN_RATE, strain)?;
    registry.register(VELOCITY_MAGNITUDE, vel)?;
    Ok(registry)
}

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Output columns along x.
    pub nx: usize,
    /// Output rows along y.
    pub ny: usize,
    /// Value column names in row order.
    pub columns: Vec<String>,
    /// Rows written, `nx * ny`.
    pub rows: u64,
    /// Points that received `NODATA`.
    pub outside: usize,
}

/// One configured extraction.
///
/// # Examples
///
/// ```no_run
/// use fieldcast_extract::{Extraction, ExtractionConfig};
/// use fieldcast_kernels::Geometry;
/// use fieldcast_mesh::SnapshotReader;
///
/// let cfg = ExtractionConfig::from_args(["run.fcsn", "0", "0", "1", "1", "64"]).unwrap();
/// let summary = Extraction::new(cfg, Geometry::Planar)
///     .run(&SnapshotReader::default(), std::io::stdout())
///     .unwrap();
/// println!("{} rows", summary.rows);
/// ```
#[derive(Clone, Debug)]
pub struct Extraction {
    config: ExtractionConfig,
    geometry: Geometry,
}

impl Extraction {
    /// Extract `config` under `geometry`.
    pub fn new(config: ExtractionConfig, geometry: Geometry) -> Self {
        Self { config, geometry }
    }

    /// The validated arguments.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// The strain-rate geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Plan the output grid without touching the snapshot.
    pub fn plan(&self) -> Result<OutputGrid, GridError> {
        OutputGrid::plan(&self.config)
    }

    /// Run every stage, writing rows to `out` only after sampling
    /// succeeded. On error nothing has been written.
    pub fn run<R, W>(&self, restore: &R, out: W) -> Result<RunSummary, ExtractError>
    where
        R: SnapshotRestore,
        W: Write,
    {
        let grid = self.plan()?;
        tracing::info!(
            nx = grid.nx(),
            ny = grid.ny(),
            dx = grid.dx(),
            dy = grid.dy(),
            "output grid planned"
        );

        let mut mesh = restore.restore(self.config.filename())?;
        let registry = standard_registry(&mesh, self.geometry)?;
        let plan = registry.dispatch(&mut mesh)?;

        let fields: Vec<FieldId> = plan.field_ids().collect();
        let (buffer, report) = Sampler::new(&grid, &fields).sample(&mesh)?;

        let mut writer = RowWriter::new(out);
        writer.write_grid(&grid, &buffer)?;
        let rows = writer.rows_written();
        writer.finish()?;
        tracing::info!(rows, geometry = %self.geometry, "extraction complete");

        Ok(RunSummary {
            nx: grid.nx(),
            ny: grid.ny(),
            columns: plan.names().map(str::to_string).collect(),
            rows,
            outside: report.outside,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcast_core::FieldDef;
    use fieldcast_mesh::{EdgeBehavior, QuadMesh};
    use fieldcast_test_utils::uniform_flow;

    fn bare_mesh() -> QuadMesh {
        QuadMesh::new([0.0, 0.0], 0.25, 4, 4, EdgeBehavior::Clamp).unwrap()
    }

    #[test]
    fn require_field_checks_presence_and_shape() {
        let mut mesh = bare_mesh();
        assert!(matches!(
            require_field(&mesh, "f", 1),
            Err(RestoreError::MissingField { name }) if name == "f"
        ));
        mesh.add_field(FieldDef::vector("f", 2), vec![0.0; 32]).unwrap();
        assert!(matches!(
            require_field(&mesh, "f", 1),
            Err(RestoreError::FieldShape { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn standard_registry_orders_strain_then_velocity() {
        let mesh = uniform_flow(1.0, 0.0);
        let registry = standard_registry(&mesh, Geometry::Axisymmetric).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["D2c", "vel"]);
    }

    #[test]
    fn standard_registry_needs_velocity() {
        let mut mesh = bare_mesh();
        mesh.add_field(FieldDef::scalar("f"), vec![1.0; 16]).unwrap();
        assert!(matches!(
            standard_registry(&mesh, Geometry::Planar),
            Err(ExtractError::Restore(RestoreError::MissingField { name })) if name == "u"
        ));
    }

    #[test]
    fn plan_needs_no_snapshot() {
        let cfg = ExtractionConfig::new("nowhere.fcsn", [0.0, 0.0], [1.0, 2.0], 4).unwrap();
        let grid = Extraction::new(cfg, Geometry::Planar).plan().unwrap();
        assert_eq!((grid.nx(), grid.ny()), (2, 4));

        let cfg = ExtractionConfig::new("nowhere.fcsn", [0.0, 0.0], [0.1, 1.0], 2).unwrap();
        assert!(matches!(
            Extraction::new(cfg, Geometry::Planar).plan(),
            Err(GridError::EmptyGrid { .. })
        ));
    }
}
