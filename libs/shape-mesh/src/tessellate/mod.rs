//! # Tessellation Service
//!
//! Turns polygon outlines and polylines into planar triangulations.
//!
//! The mesh pipeline only talks to the [`Tessellator`] trait; the bundled
//! [`LyonTessellator`] is the default implementation.
//!
//! ## Contract
//!
//! - Deterministic: identical input gives identical output
//! - Faces index into the returned point list
//! - Degenerate input (too few points) gives an empty mesh rather than an
//!   error

mod lyon_backend;


pub use lyon_backend::LyonTessellator;

use crate::error::MeshResult;
use crate::planar::PlanarMesh;
use crate::shape::Polygon;
use glam::Vec2;

/// A service that triangulates 2D outlines.
///
/// Implementations must be `Sync` so one instance can serve a parallel batch.
pub trait Tessellator: Sync {
    /// Fills a polygon, cutting out its holes.
    fn triangulate_polygon(&self, polygon: &Polygon) -> MeshResult<PlanarMesh>;

    /// Sweeps a stroke of `stroke_width` along an open polyline.
    fn triangulate_polyline(&self, points: &[Vec2], stroke_width: f32) -> MeshResult<PlanarMesh>;
}

impl<T: Tessellator + ?Sized> Tessellator for &T {
    fn triangulate_polygon(&self, polygon: &Polygon) -> MeshResult<PlanarMesh> {
        (**self).triangulate_polygon(polygon)
    }

    fn triangulate_polyline(&self, points: &[Vec2], stroke_width: f32) -> MeshResult<PlanarMesh> {
        (**self).triangulate_polyline(points, stroke_width)
    }
}
