//! # Mesh Buffer
//!
//! GPU-ready triangle mesh: parallel vertex, normal and color arrays with a
//! fixed stride of four floats per vertex, plus a `u32` index list grouped in
//! triangles.

use crate::error::{MeshError, MeshResult};
use config::constants::VERTEX_DIMENSION;

/// Largest vertex count addressable by `u32` indices.
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// A triangle mesh laid out for direct upload as vertex attributes.
///
/// Positions are homogeneous `(x, y, z, 1)`, normals are padded
/// `(x, y, z, 1)` and colors are RGBA in `[0, 1]`. The three attribute arrays
/// always have the same length; `indices.len()` is always a multiple of three.
///
/// Indices are `u32`, so a mesh holds at most [`MAX_VERTICES`] vertices.
/// [`MeshBuffer::try_append`] reports merges that would exceed it.
///
/// # Example
///
/// ```rust
/// use shape_mesh::MeshBuffer;
///
/// let mut mesh = MeshBuffer::with_capacity(3, 1);
/// let n = [0.0, 0.0, 1.0, 1.0];
/// let c = [1.0, 1.0, 1.0, 1.0];
/// let a = mesh.push_vertex([0.0, 0.0, 0.0, 1.0], n, c);
/// let b = mesh.push_vertex([1.0, 0.0, 0.0, 1.0], n, c);
/// let d = mesh.push_vertex([0.0, 1.0, 0.0, 1.0], n, c);
/// mesh.push_triangle([a, b, d]);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.index_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    vertices: Vec<[f32; 4]>,
    normals: Vec<[f32; 4]>,
    colors: Vec<[f32; 4]>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `vertex_count` vertices and
    /// `triangle_count` triangles.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            colors: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices and no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Adds a vertex with its normal and color, returning its index.
    ///
    /// The returned index is only meaningful while the mesh stays within
    /// [`MAX_VERTICES`].
    pub fn push_vertex(&mut self, position: [f32; 4], normal: [f32; 4], color: [f32; 4]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.colors.push(color);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.indices.extend_from_slice(&triangle);
    }

    /// Appends another mesh, shifting its indices past this mesh's vertices.
    ///
    /// `other` is left untouched, so appending the same mesh twice yields two
    /// independent copies rather than a double offset. A mesh that would push
    /// the total past [`MAX_VERTICES`] is skipped with an error log.
    pub fn append(&mut self, other: &MeshBuffer) {
        if let Err(err) = self.try_append(other) {
            log::error!("dropping {} vertices from merge: {err}", other.vertex_count());
        }
    }

    /// Appends another mesh, failing without modifying `self` if the combined
    /// vertex count would not fit in `u32` indices.
    pub fn try_append(&mut self, other: &MeshBuffer) -> MeshResult<()> {
        let offset = index_offset(self.vertices.len(), other.vertices.len())?;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.colors.extend_from_slice(&other.colors);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|&index| index.saturating_add(offset)),
        );
        Ok(())
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[[f32; 4]] {
        &self.vertices
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[[f32; 4]] {
        &self.normals
    }

    /// Returns the vertex colors.
    #[inline]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Returns the triangle indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Positions flattened to `[x, y, z, w, x, y, z, w, ...]`.
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Normals flattened with the same stride as [`Self::vertex_floats`].
    pub fn normal_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Colors flattened with the same stride as [`Self::vertex_floats`].
    pub fn color_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Raw bytes of the position buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the normal buffer.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Raw bytes of the color buffer.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Raw bytes of the index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Byte stride of one vertex in each attribute buffer.
    pub const fn attribute_stride() -> usize {
        VERTEX_DIMENSION * std::mem::size_of::<f32>()
    }

    /// Checks that every index references an existing vertex.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        match self
            .indices
            .iter()
            .find(|&&index| index as usize >= vertex_count)
        {
            Some(&index) => Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            }),
            None => Ok(()),
        }
    }
}

/// Offset for indices of `added` vertices placed after `current` ones.
fn index_offset(current: usize, added: usize) -> MeshResult<u32> {
    let vertex_count = current.saturating_add(added);
    if vertex_count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices { vertex_count });
    }
    u32::try_from(current).map_err(|_| MeshError::TooManyVertices { vertex_count })
}
