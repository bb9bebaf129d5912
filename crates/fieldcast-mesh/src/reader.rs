//! Snapshot restore from disk.
//!
//! [`SnapshotReader`] implements [`SnapshotRestore`] for [`QuadMesh`].
//! [`SnapshotReader::read_from`] decodes any `Read` source so tests can
//! restore from `&[u8]`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use fieldcast_core::{RestoreError, SnapshotRestore};

use crate::codec::decode_snapshot;
use crate::edge::EdgeBehavior;
use crate::quadmesh::QuadMesh;

/// Restores binary snapshots into [`QuadMesh`]es.
///
/// The snapshot format does not record edge behavior; the reader
/// applies its own to every mesh it restores.
///
/// # Examples
///
/// ```
/// use fieldcast_core::FieldDef;
/// use fieldcast_mesh::codec::encode_snapshot;
/// use fieldcast_mesh::{EdgeBehavior, QuadMesh, SnapshotReader};
///
/// let mut mesh = QuadMesh::new([0.0, 0.0], 0.5, 2, 2, EdgeBehavior::Clamp).unwrap();
/// mesh.add_field(FieldDef::scalar("f"), vec![0.0, 0.5, 1.0, 1.0]).unwrap();
///
/// let mut buf = Vec::new();
/// encode_snapshot(&mut buf, &mesh).unwrap();
///
/// let restored = SnapshotReader::default().read_from(buf.as_slice()).unwrap();
/// assert_eq!(restored.field_by_name("f"), mesh.field_by_name("f"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapshotReader {
    edge: EdgeBehavior,
}

impl SnapshotReader {
    /// Create a reader that restores meshes with the given edge behavior.
    pub fn new(edge: EdgeBehavior) -> Self {
        Self { edge }
    }

    /// Edge behavior applied to restored meshes.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Decode a snapshot from any byte stream.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<QuadMesh, RestoreError> {
        decode_snapshot(&mut reader, self.edge)
    }
}

impl SnapshotRestore for SnapshotReader {
    type Mesh = QuadMesh;

    fn restore(&self, path: &Path) -> Result<QuadMesh, RestoreError> {
        tracing::debug!(path = %path.display(), edge = self.edge.as_str(), "opening snapshot");
        let file = File::open(path)?;
        let mesh = self.read_from(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            time = mesh.time(),
            cols = mesh.cols(),
            rows = mesh.rows(),
            fields = mesh.field_count(),
            "snapshot restored"
        );
        Ok(mesh)
    }
}
