//! Reference source mesh for fieldcast.
//!
//! The extraction pipeline only talks to a mesh through the capability
//! traits in `fieldcast-core`. This crate provides one implementation of
//! them so the pipeline can run end to end:
//!
//! - [`QuadMesh`]: a uniform, cell-centred Cartesian mesh with named
//!   scalar and vector fields and configurable [`EdgeBehavior`]
//! - bilinear point interpolation between cell centres
//! - a binary snapshot codec with a reader ([`SnapshotReader`],
//!   implementing `SnapshotRestore`) and a writer ([`dump_snapshot`])
//!
//! # Format
//!
//! ```text
//! [MAGIC "FCSN"] [VERSION u8]
//! [time f64] [x0 f64] [y0 f64] [delta f64] [cols u32] [rows u32]
//! [field_count u32]
//! field_count x { [name str] [components u8] [cols*rows*components f64] }
//! ```
//!
//! All integers and floats are little-endian; strings are `u32`
//! length-prefixed UTF-8.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod edge;
pub mod error;
pub mod interpolate;
pub mod quadmesh;
pub mod reader;
pub mod writer;

pub use edge::{EdgeBehavior, ParseEdgeError};
pub use error::MeshError;
pub use interpolate::Stencil;
pub use quadmesh::QuadMesh;
pub use reader::SnapshotReader;
pub use writer::dump_snapshot;

/// Magic bytes at the start of every snapshot file.
pub const MAGIC: [u8; 4] = *b"FCSN";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
