//! # Shape Mesh
//!
//! GPU-ready triangle meshes for 2D collision shapes.
//! Tessellates disks, polygons and polylines and batches the results into a
//! single draw buffer.
//!
//! ## Architecture
//!
//! ```text
//! Shape → Tessellator (PlanarMesh) → MeshBuffer → combine() → draw buffer
//! ```
//!
//! ## Modules
//!
//! - [`mesh`]: Vertex/normal/color/index buffers with a stride of four floats
//! - [`planar`]: Lifts 2D triangulations into the plane `z = depth`
//! - [`shape`]: Disk, polygon and polyline descriptions
//! - [`tessellate`]: Fill and stroke service, lyon by default
//! - [`dispatch`]: Per-variant tessellation
//! - [`batch`]: Concatenation with index offsetting
//! - [`program`]: Shader program contract and the flat-color program
//! - [`overlay`]: Line-strip paths and text label quads
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec2;
//! use shape_mesh::{combine, triangulate, Shape};
//!
//! let shapes = [
//!     Shape::disk(1.0),
//!     Shape::polyline(vec![Vec2::ZERO, Vec2::new(4.0, 0.0)]),
//! ];
//! let meshes: Vec<_> = shapes.iter().map(|s| triangulate(s, 0.0, true)).collect();
//! let batch = combine(&meshes);
//! assert!(batch.validate().is_ok());
//! ```

pub mod batch;
pub mod dispatch;
pub mod error;
pub mod mesh;
pub mod overlay;
pub mod planar;
pub mod program;
pub mod shape;
pub mod tessellate;

pub use batch::{combine, triangulate_all};
pub use config::constants::MeshConfig;
pub use dispatch::{triangulate, triangulate_extruded, Triangulator};
pub use error::{MeshError, MeshResult};
pub use mesh::{MeshBuffer, MAX_VERTICES};
pub use overlay::{serialize_path, TextQuad};
pub use planar::{to_mesh_buffer, to_mesh_buffer_with, PlanarMesh};
pub use program::{
    load_default_program, Location, ProgramCompiler, ProgramHandle, ShaderProgram,
};
pub use shape::{Polygon, Shape, ShapeKind};
pub use tessellate::{LyonTessellator, Tessellator};
