//! Snapshot output to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::codec::encode_snapshot;
use crate::quadmesh::QuadMesh;

/// Write `mesh` as a snapshot file at `path`, replacing any existing file.
pub fn dump_snapshot(path: &Path, mesh: &QuadMesh) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    encode_snapshot(&mut w, mesh)?;
    w.flush()?;
    tracing::info!(
        path = %path.display(),
        cols = mesh.cols(),
        rows = mesh.rows(),
        fields = mesh.field_count(),
        "snapshot written"
    );
    Ok(())
}
