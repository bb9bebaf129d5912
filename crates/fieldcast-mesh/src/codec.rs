//! Binary encode/decode for the snapshot format.
//!
//! All integers and floats are little-endian. Strings are length-prefixed
//! with a `u32` length. No compression, no alignment padding.

use std::io::{self, Read, Write};

use fieldcast_core::{FieldDef, FieldType, RestoreError};

use crate::edge::EdgeBehavior;
use crate::quadmesh::QuadMesh;
use crate::{FORMAT_VERSION, MAGIC};

/// Longest field name accepted on decode.
pub const MAX_NAME_LEN: usize = 4096;

/// Most fields accepted on decode.
pub const MAX_FIELDS: u32 = 1024;

/// Most components per cell accepted on decode.
pub const MAX_COMPONENTS: u8 = 4;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> io::Result<()> {
    w.write_all(&[v])
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> io::Result<()> {
    let len = u32::try_from(s.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "string too long"))?;
    write_u32_le(w, len)?;
    w.write_all(s.as_bytes())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, RestoreError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, RestoreError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, RestoreError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string of at most [`MAX_NAME_LEN`] bytes.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, RestoreError> {
    let len = read_u32_le(r)? as usize;
    if len > MAX_NAME_LEN {
        return Err(malformed(format!(
            "string length {len} exceeds maximum {MAX_NAME_LEN}"
        )));
    }
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| malformed(format!("invalid UTF-8 string: {e}")))
}

/// Read `count` little-endian f64 values.
///
/// The buffer is reserved fallibly so a corrupt count cannot abort the
/// process.
pub fn read_f64_array(r: &mut dyn Read, count: usize) -> Result<Vec<f64>, RestoreError> {
    let mut out = Vec::new();
    out.try_reserve_exact(count)
        .map_err(|_| malformed(format!("cannot allocate {count} values")))?;
    let mut chunk = [0u8; 8 * 512];
    let mut remaining = count;
    while remaining > 0 {
        let n = remaining.min(512);
        let bytes = &mut chunk[..n * 8];
        r.read_exact(bytes)?;
        out.extend(
            bytes
                .chunks_exact(8)
                .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])),
        );
        remaining -= n;
    }
    Ok(out)
}

fn malformed(detail: String) -> RestoreError {
    RestoreError::Malformed { detail }
}

// ── Snapshot encode/decode ──────────────────────────────────────

/// Encode a whole mesh as a snapshot.
pub fn encode_snapshot(w: &mut dyn Write, mesh: &QuadMesh) -> io::Result<()> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;

    let [x0, y0] = mesh.origin();
    write_f64_le(w, mesh.time())?;
    write_f64_le(w, x0)?;
    write_f64_le(w, y0)?;
    write_f64_le(w, mesh.delta())?;
    write_u32_le(w, mesh.cols())?;
    write_u32_le(w, mesh.rows())?;

    write_u32_le(w, mesh.field_count() as u32)?;
    for (_, def, data) in mesh.fields() {
        write_length_prefixed_str(w, &def.name)?;
        write_u8(w, def.field_type.components() as u8)?;
        for &v in data {
            write_f64_le(w, v)?;
        }
    }
    Ok(())
}

/// Decode and validate a snapshot into a mesh with the given edge behavior.
pub fn decode_snapshot(r: &mut dyn Read, edge: EdgeBehavior) -> Result<QuadMesh, RestoreError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(RestoreError::InvalidMagic { found: magic });
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(RestoreError::UnsupportedVersion { found: version });
    }

    let time = read_f64_le(r)?;
    let x0 = read_f64_le(r)?;
    let y0 = read_f64_le(r)?;
    let delta = read_f64_le(r)?;
    let cols = read_u32_le(r)?;
    let rows = read_u32_le(r)?;

    let mut mesh = QuadMesh::new([x0, y0], delta, cols, rows, edge)
        .map_err(|e| malformed(format!("bad mesh header: {e}")))?
        .with_time(time);
    let cells = cols as usize * rows as usize;

    let field_count = read_u32_le(r)?;
    if field_count > MAX_FIELDS {
        return Err(malformed(format!(
            "field count {field_count} exceeds maximum {MAX_FIELDS}"
        )));
    }

    for _ in 0..field_count {
        let name = read_length_prefixed_str(r)?;
        let components = read_u8(r)?;
        let field_type = match components {
            1 => FieldType::Scalar,
            2..=MAX_COMPONENTS => FieldType::Vector {
                dims: components as u32,
            },
            other => {
                return Err(malformed(format!(
                    "field '{name}' has {other} components per cell"
                )))
            }
        };
        let len = cells
            .checked_mul(components as usize)
            .ok_or_else(|| malformed(format!("field '{name}' size overflows")))?;
        let data = read_f64_array(r, len)?;
        mesh.add_field(FieldDef { name, field_type }, data)
            .map_err(|e| malformed(e.to_string()))?;
    }

    Ok(mesh)
}
