//! # Planar Mesh Adapter
//!
//! Places a flat 2D triangulation into the plane `z = depth` and packages it
//! as a [`MeshBuffer`].
//!
//! ## Layout
//!
//! - vertex `i` → `(x, y, depth, 1)`
//! - every normal → `(0, 0, ±1, 1)`
//! - color by `i % 3` → red, green, blue (debug striping)
//! - faces copied unchanged


use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuffer;
use config::constants::MeshConfig;
use glam::Vec2;

/// A 2D triangulation: points plus triangles indexing into them.
///
/// Construction checks every face index, so a `PlanarMesh` never references a
/// missing point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanarMesh {
    vertices: Vec<Vec2>,
    faces: Vec<[u32; 3]>,
}

impl PlanarMesh {
    /// Creates a planar mesh, rejecting faces that reference missing points.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::Vec2;
    /// use shape_mesh::PlanarMesh;
    ///
    /// let tri = PlanarMesh::new(vec![Vec2::ZERO, Vec2::X, Vec2::Y], vec![[0, 1, 2]]);
    /// assert!(tri.is_ok());
    /// assert!(PlanarMesh::new(vec![Vec2::ZERO], vec![[0, 1, 2]]).is_err());
    /// ```
    pub fn new(vertices: Vec<Vec2>, faces: Vec<[u32; 3]>) -> MeshResult<Self> {
        let vertex_count = vertices.len();
        if let Some(&index) = faces
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(MeshError::FaceIndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(Self { vertices, faces })
    }

    /// Creates an empty planar mesh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the points.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Returns the triangles.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns true if there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Converts a planar mesh into a [`MeshBuffer`] with the default
/// configuration (debug striping enabled).
///
/// `normal_up` selects `+z` normals when true and `-z` when false.
pub fn to_mesh_buffer(planar: &PlanarMesh, depth: f32, normal_up: bool) -> MeshBuffer {
    to_mesh_buffer_with(planar, depth, normal_up, &MeshConfig::default())
}

/// Converts a planar mesh into a [`MeshBuffer`], taking vertex colors from
/// `config`.
pub fn to_mesh_buffer_with(
    planar: &PlanarMesh,
    depth: f32,
    normal_up: bool,
    config: &MeshConfig,
) -> MeshBuffer {
    let sign = if normal_up { 1.0 } else { -1.0 };
    let normal = [0.0, 0.0, sign, 1.0];

    let mut mesh = MeshBuffer::with_capacity(planar.vertices.len(), planar.faces.len());
    for (i, point) in planar.vertices.iter().enumerate() {
        mesh.push_vertex(
            [point.x, point.y, depth, 1.0],
            normal,
            config.vertex_color(i),
        );
    }
    for face in &planar.faces {
        mesh.push_triangle(*face);
    }
    mesh
}
