//! # Shapes
//!
//! The closed set of 2D collision shapes the renderer knows how to draw.

use config::constants::FRAME_PADDING;
use glam::Vec2;

/// A 2D shape handed over by the physics layer.
///
/// Each variant carries its own payload, so the shape kind can never disagree
/// with the data behind it.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Circle centered at the origin.
    Disk {
        /// Circle radius
        radius: f32,
    },
    /// Closed polygon, optionally with holes.
    Polygon(Polygon),
    /// Open polyline; rendered as a stroke.
    Polyline {
        /// Points in drawing order
        points: Vec<Vec2>,
    },
    /// A collision shape kind with no visual representation here.
    Other {
        /// Kind identifier as reported by the physics layer
        kind: u32,
    },
}

/// Discriminant of a [`Shape`], used for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Shape::Disk`]
    Disk,
    /// [`Shape::Polygon`]
    Polygon,
    /// [`Shape::Polyline`]
    Polyline,
    /// [`Shape::Other`] with its raw kind identifier
    Other(u32),
}

impl Shape {
    /// Creates a disk.
    pub fn disk(radius: f32) -> Self {
        Self::Disk { radius }
    }

    /// Creates a polygon without holes.
    pub fn polygon(boundary: Vec<Vec2>) -> Self {
        Self::Polygon(Polygon::new(boundary))
    }

    /// Creates an open polyline.
    pub fn polyline(points: Vec<Vec2>) -> Self {
        Self::Polyline { points }
    }

    /// Returns the discriminant of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Disk { .. } => ShapeKind::Disk,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Polyline { .. } => ShapeKind::Polyline,
            Shape::Other { kind } => ShapeKind::Other(*kind),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

/// A closed 2D polygon.
///
/// The boundary is implicitly closed (the last point connects back to the
/// first). Holes are closed loops cut out of the interior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// Outer boundary
    pub boundary: Vec<Vec2>,
    /// Interior holes
    pub holes: Vec<Vec<Vec2>>,
}

impl Polygon {
    /// Creates a polygon from its outer boundary.
    pub fn new(boundary: Vec<Vec2>) -> Self {
        Self {
            boundary,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(boundary: Vec<Vec2>, holes: Vec<Vec<Vec2>>) -> Self {
        Self { boundary, holes }
    }

    /// Creates a regular `segments`-gon inscribed in a circle of `radius`.
    ///
    /// Point `k` sits at angle `2πk / segments`. Zero segments yields an empty
    /// polygon.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_mesh::Polygon;
    ///
    /// let hexagon = Polygon::regular(1.0, 6);
    /// assert_eq!(hexagon.boundary.len(), 6);
    /// ```
    pub fn regular(radius: f32, segments: u32) -> Self {
        let boundary = (0..segments)
            .map(|k| {
                let theta = k as f32 / segments as f32 * std::f32::consts::TAU;
                Vec2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self::new(boundary)
    }

    /// Wraps `path` in a rectangular frame and cuts it out as a hole.
    ///
    /// The frame is the bounding box of `path` grown by `padding` on every
    /// side. An empty path yields an empty polygon.
    pub fn with_framed_hole(path: Vec<Vec2>, padding: f32) -> Self {
        let Some((lower, upper)) = bounding_box(&path) else {
            return Self::default();
        };
        let lower = lower - Vec2::splat(padding);
        let upper = upper + Vec2::splat(padding);
        let frame = vec![
            lower,
            Vec2::new(upper.x, lower.y),
            upper,
            Vec2::new(lower.x, upper.y),
        ];
        Self::with_holes(frame, vec![path])
    }

    /// [`Self::with_framed_hole`] using the default padding.
    pub fn framed_hole(path: Vec<Vec2>) -> Self {
        Self::with_framed_hole(path, FRAME_PADDING)
    }

    /// Returns true if the polygon has holes.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }
}

/// Axis-aligned bounds of a point set, `None` when empty.
fn bounding_box(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
    )
}
