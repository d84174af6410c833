//! # Overlay Geometry
//!
//! Small fixed-layout buffers drawn on top of the shape meshes: paths
//! uploaded as line strips and textured quads carrying rendered text labels.

use config::constants::VERTEX_DIMENSION;
use glam::Vec2;

/// Corners of the unit label quad, clockwise from the top-left.
const UNIT_QUAD: [Vec2; 4] = [
    Vec2::new(-0.5, 0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(-0.5, -0.5),
];

/// Texture coordinates matching [`UNIT_QUAD`].
const QUAD_UV: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Packs a 2D path as `(x, y, 0, 1)` tuples for a line-strip upload.
///
/// A closed path with at least two points repeats its first point at the end.
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use shape_mesh::overlay::serialize_path;
///
/// let floats = serialize_path(&[Vec2::ZERO, Vec2::X, Vec2::Y], true);
/// assert_eq!(floats.len(), 4 * 4);
/// assert_eq!(&floats[12..], &[0.0, 0.0, 0.0, 1.0]);
/// ```
pub fn serialize_path(points: &[Vec2], closed: bool) -> Vec<f32> {
    let closing = (closed && points.len() >= 2).then(|| points[0]);
    let mut floats = Vec::with_capacity((points.len() + 1) * VERTEX_DIMENSION);
    for p in points.iter().copied().chain(closing) {
        floats.extend_from_slice(&[p.x, p.y, 0.0, 1.0]);
    }
    floats
}

/// A textured quad sized and placed to show a rendered text label.
///
/// Vertices pack `(x, y, u, v)`: the position in the first two components and
/// the texture coordinate in the last two.
#[derive(Debug, Clone, PartialEq)]
pub struct TextQuad {
    /// Corner positions and texture coordinates
    pub vertices: [[f32; 4]; 4],
    /// Per-corner RGBA tint
    pub colors: [[f32; 4]; 4],
    /// Two triangles covering the quad
    pub indices: [u32; 6],
}

impl TextQuad {
    /// Builds the quad for a `width` × `height` label centered on `position`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::Vec2;
    /// use shape_mesh::overlay::TextQuad;
    ///
    /// let quad = TextQuad::new(Vec2::new(10.0, 5.0), 4.0, 2.0);
    /// assert_eq!(quad.vertices[0], [8.0, 6.0, 0.0, 0.0]);
    /// assert_eq!(quad.indices, [0, 1, 2, 2, 3, 0]);
    /// ```
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height);
        let mut vertices = [[0.0; 4]; 4];
        for ((slot, corner), uv) in vertices.iter_mut().zip(UNIT_QUAD).zip(QUAD_UV) {
            let p = corner * size + position;
            *slot = [p.x, p.y, uv.x, uv.y];
        }
        Self {
            vertices,
            colors: [WHITE; 4],
            indices: [0, 1, 2, 2, 3, 0],
        }
    }

    /// Returns the corner data as one contiguous float slice.
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_serialize_open_path() {
        let floats = serialize_path(&[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)], false);
        assert_eq!(floats, vec![1.0, 2.0, 0.0, 1.0, 3.0, 4.0, 0.0, 1.0]);
    }

    #[test]
    fn test_serialize_closed_path_repeats_first() {
        let square = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        let floats = serialize_path(&square, true);
        assert_eq!(floats.len(), 5 * VERTEX_DIMENSION);
        assert_eq!(&floats[..4], &floats[16..]);
    }

    #[test]
    fn test_serialize_short_closed_path_not_repeated() {
        assert!(serialize_path(&[], true).is_empty());
        assert_eq!(serialize_path(&[Vec2::ONE], true).len(), VERTEX_DIMENSION);
    }

    #[test]
    fn test_text_quad_layout() {
        let quad = TextQuad::new(Vec2::new(-1.0, 3.0), 8.0, 2.0);
        let expected = [
            [-5.0, 4.0, 0.0, 0.0],
            [3.0, 4.0, 1.0, 0.0],
            [3.0, 2.0, 1.0, 1.0],
            [-5.0, 2.0, 0.0, 1.0],
        ];
        for (got, want) in quad.vertices.iter().zip(expected) {
            for (g, w) in got.iter().zip(want) {
                assert_relative_eq!(*g, w);
            }
        }
        assert!(quad.colors.iter().all(|c| *c == WHITE));
        assert_eq!(quad.indices, [0, 1, 2, 2, 3, 0]);
        assert_eq!(quad.vertex_floats().len(), 16);
    }

    #[test]
    fn test_text_quad_is_centered() {
        let position = Vec2::new(7.0, -2.5);
        let quad = TextQuad::new(position, 3.0, 1.0);
        let center = quad
            .vertices
            .iter()
            .fold(Vec2::ZERO, |acc, v| acc + Vec2::new(v[0], v[1]))
            / 4.0;
        assert_relative_eq!(center.x, position.x, epsilon = 1e-6);
        assert_relative_eq!(center.y, position.y, epsilon = 1e-6);
    }
}
