//! # Mesh Batcher
//!
//! Concatenates meshes into a single draw buffer.
//!
//! Each mesh's indices are shifted by the number of vertices already in the
//! combined buffer, so every index keeps pointing at its own mesh's vertices.
//! Input order is preserved and determines draw order.

use crate::dispatch::Triangulator;
use crate::mesh::MeshBuffer;
use crate::shape::Shape;
use crate::tessellate::Tessellator;
use rayon::prelude::*;
use std::borrow::Borrow;

/// Combines meshes into one buffer with offset indices.
///
/// Accepts owned meshes or references; the inputs are never modified.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{combine, triangulate, Shape};
///
/// let a = triangulate(&Shape::disk(1.0), 0.0, true);
/// let b = triangulate(&Shape::disk(2.0), 1.0, true);
/// let merged = combine([&a, &b]);
/// assert_eq!(merged.vertex_count(), a.vertex_count() + b.vertex_count());
/// assert!(merged.validate().is_ok());
/// assert!(combine(Vec::<shape_mesh::MeshBuffer>::new()).is_empty());
/// ```
pub fn combine<I>(meshes: I) -> MeshBuffer
where
    I: IntoIterator,
    I::Item: Borrow<MeshBuffer>,
{
    let mut combined = MeshBuffer::new();
    for mesh in meshes {
        combined.append(mesh.borrow());
    }
    combined
}

/// Triangulates every shape into the plane `z = depth` and combines the
/// results in input order.
///
/// Shapes are tessellated in parallel; the concatenation is a single
/// sequential pass, so the output is identical to triangulating and
/// combining one by one.
pub fn triangulate_all<T: Tessellator>(
    triangulator: &Triangulator<T>,
    shapes: &[Shape],
    depth: f32,
    normal_up: bool,
) -> MeshBuffer {
    let meshes: Vec<MeshBuffer> = shapes
        .par_iter()
        .map(|shape| triangulator.triangulate(shape, depth, normal_up))
        .collect();
    log::debug!(
        "triangulated {} shapes into {} meshes",
        shapes.len(),
        meshes.iter().filter(|mesh| !mesh.is_empty()).count()
    );
    combine(&meshes)
}
