//! # Shape Dispatcher
//!
//! Selects the tessellation procedure for each [`Shape`] variant and packages
//! the result as a [`MeshBuffer`].
//!
//! ## Dispatch
//!
//! - `Disk` → regular polygon of `disk_segment_count` points → fill
//! - `Polygon` → fill (holes cut out)
//! - `Polyline` → stroke of `stroke_width`
//! - `Other` → empty buffer
//!
//! ## Example
//!
//! ```rust
//! use shape_mesh::{triangulate, Shape};
//!
//! let mesh = triangulate(&Shape::disk(2.0), 0.0, true);
//! assert!(mesh.vertex_count() > 0);
//! assert!(mesh.vertices().iter().all(|v| v[2] == 0.0));
//! ```

#[cfg(test)]
mod tests;

use crate::error::MeshResult;
use crate::mesh::MeshBuffer;
use crate::planar::{to_mesh_buffer_with, PlanarMesh};
use crate::shape::{Polygon, Shape};
use crate::tessellate::{LyonTessellator, Tessellator};
use config::constants::MeshConfig;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Triangulates a shape into the plane `z = depth` using the default
/// tessellator and configuration.
///
/// Never fails: unknown kinds and rejected geometry give an empty buffer.
pub fn triangulate(shape: &Shape, depth: f32, normal_up: bool) -> MeshBuffer {
    Triangulator::<LyonTessellator>::default().triangulate(shape, depth, normal_up)
}

/// Extrudes a shape into a closed 3D hull of the given depth.
///
/// Not implemented yet: always returns an empty buffer and logs a warning.
pub fn triangulate_extruded(shape: &Shape, depth: f32) -> MeshBuffer {
    Triangulator::<LyonTessellator>::default().triangulate_extruded(shape, depth)
}

// =============================================================================
// TRIANGULATOR
// =============================================================================

/// A tessellation service paired with mesh construction settings.
#[derive(Debug, Clone, Default)]
pub struct Triangulator<T = LyonTessellator> {
    tessellator: T,
    config: MeshConfig,
}

impl<T: Tessellator> Triangulator<T> {
    /// Creates a triangulator from a tessellator and configuration.
    ///
    /// An invalid configuration is logged; polylines drawn with it come out
    /// empty.
    pub fn new(tessellator: T, config: MeshConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("triangulator created with invalid config: {err}");
        }
        Self {
            tessellator,
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Returns the tessellation service.
    pub fn tessellator(&self) -> &T {
        &self.tessellator
    }

    /// Triangulates a shape into the plane `z = depth`.
    ///
    /// Tessellation failures are logged and produce an empty buffer; use
    /// [`Self::try_triangulate`] to receive the error instead.
    pub fn triangulate(&self, shape: &Shape, depth: f32, normal_up: bool) -> MeshBuffer {
        self.try_triangulate(shape, depth, normal_up)
            .unwrap_or_else(|err| {
                log::warn!("failed to triangulate {:?} shape: {err}", shape.kind());
                MeshBuffer::new()
            })
    }

    /// Triangulates a shape into the plane `z = depth`, reporting tessellation
    /// failures.
    pub fn try_triangulate(
        &self,
        shape: &Shape,
        depth: f32,
        normal_up: bool,
    ) -> MeshResult<MeshBuffer> {
        let planar = match self.tessellate(shape)? {
            Some(planar) => planar,
            None => {
                log::debug!("no tessellation for shape kind {:?}", shape.kind());
                return Ok(MeshBuffer::new());
            }
        };
        Ok(to_mesh_buffer_with(&planar, depth, normal_up, &self.config))
    }

    /// Extrudes a shape into a closed 3D hull.
    ///
    /// TODO: build side walls and caps once the extrusion layout (cap normals,
    /// shared or split rim vertices) is settled; until then this returns an
    /// empty buffer.
    pub fn triangulate_extruded(&self, shape: &Shape, depth: f32) -> MeshBuffer {
        log::warn!(
            "extruded triangulation is not implemented; {:?} shape at depth {depth} produces no geometry",
            shape.kind()
        );
        MeshBuffer::new()
    }

    /// Runs the tessellation procedure for the shape's variant.
    ///
    /// Returns `None` for kinds without a visual representation.
    fn tessellate(&self, shape: &Shape) -> MeshResult<Option<PlanarMesh>> {
        let planar = match shape {
            Shape::Disk { radius } => {
                let outline = Polygon::regular(*radius, self.config.disk_segment_count);
                self.tessellator.triangulate_polygon(&outline)?
            }
            Shape::Polygon(polygon) => self.tessellator.triangulate_polygon(polygon)?,
            Shape::Polyline { points } => self
                .tessellator
                .triangulate_polyline(points, self.config.stroke_width)?,
            Shape::Other { .. } => return Ok(None),
        };
        Ok(Some(planar))
    }
}
