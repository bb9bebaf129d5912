//! Point sampling of derived fields onto the output grid.

use fieldcast_core::{FieldId, Interpolate, Sample, NODATA};

use crate::buffer::SampleBuffer;
use crate::error::ExtractError;
use crate::grid::OutputGrid;

/// Counts from one sampling pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleReport {
    /// Output points visited, `nx * ny`.
    pub points: usize,
    /// Points that fell outside the source mesh for at least one field.
    pub outside: usize,
}

/// Evaluates every column at every output cell centre.
///
/// Columns are visited in the order given, which must be registration
/// order: column `k` of the buffer is `columns[k]`.
pub struct Sampler<'a> {
    grid: &'a OutputGrid,
    columns: &'a [FieldId],
}

impl<'a> Sampler<'a> {
    /// Sample `columns` over `grid`.
    pub fn new(grid: &'a OutputGrid, columns: &'a [FieldId]) -> Self {
        Self { grid, columns }
    }

    /// Allocate the buffer and fill it from `source`.
    ///
    /// Points outside the source domain get [`NODATA`]; any other
    /// interpolation failure aborts the pass.
    pub fn sample(
        &self,
        source: &dyn Interpolate,
    ) -> Result<(SampleBuffer, SampleReport), ExtractError> {
        let fields = self.columns.len();
        let mut buffer = SampleBuffer::allocate(self.grid.nx(), self.grid.ny(), fields)?;
        let mut report = SampleReport::default();

        for (i, j, x, y) in self.grid.centers() {
            let mut outside = false;
            for (k, &field) in self.columns.iter().enumerate() {
                let v = match source.interpolate(field, x, y)? {
                    Sample::Value(v) => v,
                    Sample::Outside => {
                        outside = true;
                        NODATA
                    }
                };
                buffer.set(i, j, k, v);
            }
            report.points += 1;
            if outside {
                report.outside += 1;
            }
        }

        if report.outside > 0 {
            tracing::warn!(
                outside = report.outside,
                points = report.points,
                nodata = NODATA,
                "output points outside the snapshot domain"
            );
        }
        tracing::debug!(points = report.points, fields, "sampling complete");
        Ok((buffer, report))
    }
}
