//! Execution context passed to field kernels.

use fieldcast_core::{FieldReader, MeshTopology};

/// Execution context passed to each kernel's `compute()` method.
///
/// Uses dynamic dispatch (`&dyn FieldReader`, `&dyn MeshTopology`) to
/// keep [`FieldKernel`](crate::FieldKernel) object-safe while supporting
/// mock-based testing. The target is a plain slice with one slot per
/// mesh cell, disjoint from everything `reads` can see.
pub struct KernelContext<'a> {
    reads: &'a dyn FieldReader,
    mesh: &'a dyn MeshTopology,
    target: &'a mut [f64],
}

impl<'a> KernelContext<'a> {
    /// Construct a new kernel context.
    ///
    /// Typically called by the registry. For testing, construct with a
    /// mock reader from `fieldcast-test-utils`.
    pub fn new(
        reads: &'a dyn FieldReader,
        mesh: &'a dyn MeshTopology,
        target: &'a mut [f64],
    ) -> Self {
        Self {
            reads,
            mesh,
            target,
        }
    }

    /// Source field reader.
    pub fn reads(&self) -> &dyn FieldReader {
        self.reads
    }

    /// Cell geometry and stencil navigation.
    pub fn mesh(&self) -> &dyn MeshTopology {
        self.mesh
    }

    /// Output slice, one value per cell.
    pub fn target(&mut self) -> &mut [f64] {
        self.target
    }

    /// Split into the read side and the output slice at once.
    ///
    /// Kernels need both simultaneously inside their cell loop.
    pub fn split(&mut self) -> (&dyn FieldReader, &dyn MeshTopology, &mut [f64]) {
        (self.reads, self.mesh, &mut *self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcast_core::FieldId;
    use fieldcast_mesh::{EdgeBehavior, QuadMesh};
    use fieldcast_test_utils::MockFieldReader;

    #[test]
    fn context_provides_reads_mesh_and_target() {
        let mut reader = MockFieldReader::new();
        reader.set_field(FieldId(0), vec![1.0, 2.0, 3.0]);
        let mesh = QuadMesh::new([0.0, 0.0], 1.0, 3, 1, EdgeBehavior::Clamp).unwrap();
        let mut out = vec![0.0; 3];

        let mut ctx = KernelContext::new(&reader, &mesh, &mut out);
        assert_eq!(ctx.reads().read(FieldId(0)).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(ctx.mesh().cell_count(), 3);

        let (reads, topo, target) = ctx.split();
        for (cell, slot) in target.iter_mut().enumerate() {
            *slot = reads.read(FieldId(0)).unwrap()[cell] + topo.cell_center(cell)[0];
        }
        assert_eq!(out, vec![1.5, 3.5, 5.5]);
    }
}
