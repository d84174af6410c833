//! Fill and stroke tessellation backed by `lyon`.

use super::Tessellator;
use crate::error::{MeshError, MeshResult};
use crate::planar::PlanarMesh;
use crate::shape::Polygon;
use config::constants::TESSELLATION_TOLERANCE;
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, LineCap, LineJoin,
    StrokeOptions, StrokeTessellator, StrokeVertex, VertexBuffers,
};

/// [`Tessellator`] using lyon's fill and stroke tessellators.
///
/// Polygons are filled with the even-odd rule so holes are cut out
/// regardless of their winding. Polylines are stroked with butt caps and
/// miter joins.
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use shape_mesh::{LyonTessellator, Polygon, Tessellator};
///
/// let square = Polygon::new(vec![
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ]);
/// let planar = LyonTessellator::default().triangulate_polygon(&square).unwrap();
/// assert_eq!(planar.faces().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LyonTessellator {
    /// Maximum deviation allowed when flattening curved joins
    pub tolerance: f32,
}

impl Default for LyonTessellator {
    fn default() -> Self {
        Self {
            tolerance: TESSELLATION_TOLERANCE,
        }
    }
}

impl LyonTessellator {
    /// Creates a tessellator with the given curve tolerance.
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }
}

impl Tessellator for LyonTessellator {
    fn triangulate_polygon(&self, polygon: &Polygon) -> MeshResult<PlanarMesh> {
        if polygon.boundary.len() < 3 {
            return Ok(PlanarMesh::empty());
        }
        ensure_finite(&polygon.boundary, "polygon boundary")?;
        for hole in &polygon.holes {
            ensure_finite(hole, "polygon hole")?;
        }

        let mut builder = Path::builder();
        add_loop(&mut builder, &polygon.boundary, true);
        for hole in polygon.holes.iter().filter(|hole| hole.len() >= 3) {
            add_loop(&mut builder, hole, true);
        }
        let path = builder.build();

        let options = FillOptions::tolerance(self.tolerance).with_fill_rule(FillRule::EvenOdd);
        let mut geometry: VertexBuffers<Vec2, u32> = VertexBuffers::new();
        FillTessellator::new()
            .tessellate_path(
                &path,
                &options,
                &mut BuffersBuilder::new(&mut geometry, |vertex: FillVertex| {
                    let p = vertex.position();
                    Vec2::new(p.x, p.y)
                }),
            )
            .map_err(|err| MeshError::tessellation(format!("polygon fill: {err:?}")))?;

        into_planar(geometry)
    }

    fn triangulate_polyline(&self, points: &[Vec2], stroke_width: f32) -> MeshResult<PlanarMesh> {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(MeshError::InvalidStrokeWidth(stroke_width));
        }
        if points.len() < 2 {
            return Ok(PlanarMesh::empty());
        }
        ensure_finite(points, "polyline")?;

        let mut builder = Path::builder();
        add_loop(&mut builder, points, false);
        let path = builder.build();

        let options = StrokeOptions::tolerance(self.tolerance)
            .with_line_width(stroke_width)
            .with_line_cap(LineCap::Butt)
            .with_line_join(LineJoin::Miter);
        let mut geometry: VertexBuffers<Vec2, u32> = VertexBuffers::new();
        StrokeTessellator::new()
            .tessellate_path(
                &path,
                &options,
                &mut BuffersBuilder::new(&mut geometry, |vertex: StrokeVertex| {
                    let p = vertex.position();
                    Vec2::new(p.x, p.y)
                }),
            )
            .map_err(|err| MeshError::tessellation(format!("polyline stroke: {err:?}")))?;

        into_planar(geometry)
    }
}

/// Rejects NaN or infinite coordinates, which lyon's path builder does not
/// accept.
fn ensure_finite(points: &[Vec2], what: &str) -> MeshResult<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(i) => Err(MeshError::tessellation(format!(
            "{what} point {i} is not finite: {}",
            points[i]
        ))),
        None => Ok(()),
    }
}

/// Adds one sub-path through `points`.
fn add_loop(builder: &mut lyon::path::path::Builder, points: &[Vec2], close: bool) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    builder.begin(point(first.x, first.y));
    for p in rest {
        builder.line_to(point(p.x, p.y));
    }
    builder.end(close);
}

fn into_planar(geometry: VertexBuffers<Vec2, u32>) -> MeshResult<PlanarMesh> {
    let faces = geometry
        .indices
        .chunks_exact(3)
        .map(|tri| [tri[0], tri[1], tri[2]])
        .collect();
    PlanarMesh::new(geometry.vertices, faces)
}
