//! Uniform cell-centred Cartesian mesh with named fields.

use indexmap::IndexMap;

use fieldcast_core::{
    FieldDef, FieldError, FieldId, FieldReader, FieldWriter, MeshTopology, SourceMesh,
};

use crate::edge::EdgeBehavior;
use crate::error::MeshError;

/// A uniform two-dimensional mesh of square cells.
///
/// Cell `(col, row)` covers `[x0 + col*Δ, x0 + (col+1)*Δ] x [y0 + row*Δ, y0 + (row+1)*Δ]`
/// and stores its values at the cell centre. Flat index is `row * cols + col`,
/// so x (column) varies fastest.
///
/// Fields are held in declaration order. Names are unique and map to the
/// [`FieldId`] that indexes the field table.
///
/// # Examples
///
/// ```
/// use fieldcast_core::{FieldDef, MeshTopology};
/// use fieldcast_mesh::{EdgeBehavior, QuadMesh};
///
/// let mut mesh = QuadMesh::new([0.0, 0.0], 0.25, 4, 4, EdgeBehavior::Clamp).unwrap();
/// assert_eq!(mesh.cell_count(), 16);
/// assert_eq!(mesh.cell_center(5), [0.375, 0.375]);
///
/// let f = mesh.add_field(FieldDef::scalar("f"), vec![1.0; 16]).unwrap();
/// assert_eq!(mesh.field_by_name("f"), Some(f));
/// ```
#[derive(Debug, Clone)]
pub struct QuadMesh {
    origin: [f64; 2],
    delta: f64,
    cols: u32,
    rows: u32,
    edge: EdgeBehavior,
    time: f64,
    defs: Vec<FieldDef>,
    data: Vec<Vec<f64>>,
    names: IndexMap<String, FieldId>,
}

impl QuadMesh {
    /// Upper bound on the number of cells, guarding corrupt snapshot headers.
    pub const MAX_CELLS: u64 = 1 << 28;

    /// Create an empty mesh (no fields) of `cols x rows` cells of size `delta`.
    pub fn new(
        origin: [f64; 2],
        delta: f64,
        cols: u32,
        rows: u32,
        edge: EdgeBehavior,
    ) -> Result<Self, MeshError> {
        if cols == 0 || rows == 0 {
            return Err(MeshError::EmptyMesh);
        }
        if !delta.is_finite() || delta <= 0.0 {
            return Err(MeshError::InvalidCellSize { value: delta });
        }
        if !origin[0].is_finite() || !origin[1].is_finite() {
            return Err(MeshError::InvalidOrigin { origin });
        }
        let cells = cols as u64 * rows as u64;
        if cells > Self::MAX_CELLS {
            return Err(MeshError::DimensionTooLarge {
                name: "cells",
                value: cells,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self {
            origin,
            delta,
            cols,
            rows,
            edge,
            time: 0.0,
            defs: Vec::new(),
            data: Vec::new(),
            names: IndexMap::new(),
        })
    }

    /// Set the simulation time the mesh state corresponds to.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Simulation time of the snapshot.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Lower-left corner of the domain.
    pub fn origin(&self) -> [f64; 2] {
        self.origin
    }

    /// Uniform cell size Δ.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Number of cells along x.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of cells along y.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Edge behavior for stencil offsets and interpolation ghosts.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Upper-right corner of the domain.
    pub fn upper(&self) -> [f64; 2] {
        [
            self.origin[0] + self.cols as f64 * self.delta,
            self.origin[1] + self.rows as f64 * self.delta,
        ]
    }

    /// Whether `(x, y)` lies inside the closed domain rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let [x1, y1] = self.upper();
        x >= self.origin[0] && x <= x1 && y >= self.origin[1] && y <= y1
    }

    /// Number of fields held.
    pub fn field_count(&self) -> usize {
        self.defs.len()
    }

    /// Look up a field by name.
    pub fn field_by_name(&self, name: &str) -> Option<FieldId> {
        self.names.get(name).copied()
    }

    /// Iterate fields in declaration order as `(id, def, data)`.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &FieldDef, &[f64])> + '_ {
        self.defs
            .iter()
            .zip(&self.data)
            .enumerate()
            .map(|(i, (def, data))| (FieldId(i as u32), def, data.as_slice()))
    }

    /// Add a field with its data.
    ///
    /// # Errors
    ///
    /// - [`FieldError::Duplicate`] if the name is already taken.
    /// - [`FieldError::LengthMismatch`] if `data` is not
    ///   `cell_count * components` long.
    pub fn add_field(&mut self, def: FieldDef, data: Vec<f64>) -> Result<FieldId, FieldError> {
        if self.names.contains_key(&def.name) {
            return Err(FieldError::Duplicate { name: def.name });
        }
        let expected = self.cell_count() * def.field_type.components() as usize;
        if data.len() != expected {
            return Err(FieldError::LengthMismatch {
                name: def.name,
                expected,
                found: data.len(),
            });
        }
        let id = FieldId(self.defs.len() as u32);
        self.names.insert(def.name.clone(), id);
        self.defs.push(def);
        self.data.push(data);
        Ok(id)
    }

    /// Fill a new field by evaluating `f(x, y)` at every cell centre.
    ///
    /// For vector fields `f` must return `components` values per call.
    pub fn add_field_fn(
        &mut self,
        def: FieldDef,
        f: impl Fn(f64, f64) -> Vec<f64>,
    ) -> Result<FieldId, FieldError> {
        let n = def.field_type.components() as usize;
        let mut data = Vec::with_capacity(self.cell_count() * n);
        for cell in 0..self.cell_count() {
            let [x, y] = self.cell_center(cell);
            let values = f(x, y);
            if values.len() != n {
                return Err(FieldError::LengthMismatch {
                    name: def.name,
                    expected: n,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        self.add_field(def, data)
    }

    /// Split a flat index into `(col, row)`.
    pub(crate) fn col_row(&self, cell: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((cell % cols) as u32, (cell / cols) as u32)
    }

    /// Flat index of `(col, row)`.
    pub(crate) fn flat(&self, col: u32, row: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }
}

impl FieldReader for QuadMesh {
    fn read(&self, field: FieldId) -> Option<&[f64]> {
        self.data.get(field.index()).map(|v| v.as_slice())
    }
}

impl FieldWriter for QuadMesh {
    fn write(&mut self, field: FieldId) -> Option<&mut [f64]> {
        self.data.get_mut(field.index()).map(|v| v.as_mut_slice())
    }
}

impl MeshTopology for QuadMesh {
    fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    fn cell_size(&self, _cell: usize) -> f64 {
        self.delta
    }

    fn cell_center(&self, cell: usize) -> [f64; 2] {
        let (c, r) = self.col_row(cell);
        [
            self.origin[0] + self.delta * (c as f64 + 0.5),
            self.origin[1] + self.delta * (r as f64 + 0.5),
        ]
    }

    fn offset(&self, cell: usize, dx: i32, dy: i32) -> usize {
        let (c, r) = self.col_row(cell);
        let nc = self.edge.resolve(c as i64 + dx as i64, self.cols);
        let nr = self.edge.resolve(r as i64 + dy as i64, self.rows);
        self.flat(nc, nr)
    }
}

impl SourceMesh for QuadMesh {
    fn field_id(&self, name: &str) -> Option<FieldId> {
        self.field_by_name(name)
    }

    fn field_def(&self, field: FieldId) -> Option<&FieldDef> {
        self.defs.get(field.index())
    }

    fn declare_scalar(&mut self, name: &str) -> Result<FieldId, FieldError> {
        let zeros = vec![0.0; self.cell_count()];
        self.add_field(FieldDef::scalar(name), zeros)
    }
}
