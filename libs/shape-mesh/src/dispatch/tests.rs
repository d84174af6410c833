//! # Dispatcher Tests
//!
//! A recording tessellator captures what each shape variant hands to the
//! tessellation service.

use super::*;
use crate::error::MeshError;
use approx::assert_relative_eq;
use glam::Vec2;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Polygon(Polygon),
    Polyline(Vec<Vec2>, f32),
}

/// Records every request and answers with a fan over the input points.
#[derive(Debug, Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

fn fan(points: &[Vec2]) -> MeshResult<PlanarMesh> {
    let faces = (1..points.len().saturating_sub(1))
        .map(|i| [0, i as u32, i as u32 + 1])
        .collect();
    PlanarMesh::new(points.to_vec(), faces)
}

impl Tessellator for Recorder {
    fn triangulate_polygon(&self, polygon: &Polygon) -> MeshResult<PlanarMesh> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Polygon(polygon.clone()));
        fan(&polygon.boundary)
    }

    fn triangulate_polyline(&self, points: &[Vec2], stroke_width: f32) -> MeshResult<PlanarMesh> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Polyline(points.to_vec(), stroke_width));
        fan(points)
    }
}

/// Rejects everything.
struct Failing;

impl Tessellator for Failing {
    fn triangulate_polygon(&self, _: &Polygon) -> MeshResult<PlanarMesh> {
        Err(MeshError::tessellation("rejected"))
    }

    fn triangulate_polyline(&self, _: &[Vec2], _: f32) -> MeshResult<PlanarMesh> {
        Err(MeshError::tessellation("rejected"))
    }
}

fn recording() -> Triangulator<Recorder> {
    Triangulator::new(Recorder::default(), MeshConfig::default())
}

// =============================================================================
// DISK
// =============================================================================

#[test]
fn test_disk_builds_thirty_point_outline() {
    let triangulator = recording();
    let mesh = triangulator.triangulate(&Shape::disk(2.0), 0.0, true);

    let calls = triangulator.tessellator().calls();
    assert_eq!(calls.len(), 1);
    let Call::Polygon(outline) = &calls[0] else {
        panic!("disk must be filled as a polygon, got {:?}", calls[0]);
    };
    assert_eq!(outline.boundary.len(), 30);
    assert!(!outline.has_holes());
    for (k, p) in outline.boundary.iter().enumerate() {
        let theta = std::f32::consts::TAU * k as f32 / 30.0;
        assert_relative_eq!(p.x, 2.0 * theta.cos(), epsilon = 1e-5);
        assert_relative_eq!(p.y, 2.0 * theta.sin(), epsilon = 1e-5);
    }

    assert_eq!(mesh.vertex_count(), 30);
    assert_eq!(mesh.triangle_count(), 28);
    assert!(mesh.vertices().iter().all(|v| v[2] == 0.0));
}

#[test]
fn test_disk_honors_depth_and_normal() {
    let mesh = recording().triangulate(&Shape::disk(1.0), 4.0, false);
    assert!(mesh.vertices().iter().all(|v| v[2] == 4.0));
    assert!(mesh.normals().iter().all(|n| *n == [0.0, 0.0, -1.0, 1.0]));
}

#[test]
fn test_disk_segment_count_configurable() {
    let config = MeshConfig::new(8, 1.5, true).unwrap();
    let triangulator = Triangulator::new(Recorder::default(), config);
    let mesh = triangulator.triangulate(&Shape::disk(1.0), 0.0, true);
    assert_eq!(mesh.vertex_count(), 8);
}

#[test]
fn test_disk_zero_segments_is_empty() {
    let config = MeshConfig::new(0, 1.5, true).unwrap();
    let triangulator = Triangulator::new(Recorder::default(), config);
    let mesh = triangulator.triangulate(&Shape::disk(1.0), 0.0, true);
    assert!(mesh.is_empty());
}

#[test]
fn test_zero_radius_disk_default_tessellator() {
    let mesh = triangulate(&Shape::disk(0.0), 0.0, true);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.normals().len(), mesh.vertex_count());
}

// =============================================================================
// POLYGON / POLYLINE
// =============================================================================

#[test]
fn test_polygon_passed_through() {
    let polygon = Polygon::with_holes(
        vec![Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(4.0, 4.0), Vec2::new(0.0, 4.0)],
        vec![vec![Vec2::ONE, Vec2::new(1.0, 2.0), Vec2::new(2.0, 2.0)]],
    );
    let triangulator = recording();
    let mesh = triangulator.triangulate(&Shape::Polygon(polygon.clone()), 1.0, true);
    assert_eq!(triangulator.tessellator().calls(), vec![Call::Polygon(polygon)]);
    assert_eq!(mesh.vertex_count(), 4);
    assert!(mesh.vertices().iter().all(|v| v[2] == 1.0));
}

#[test]
fn test_polyline_stroked_with_configured_width() {
    let points = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)];
    let triangulator = recording();
    let mesh = triangulator.triangulate(&Shape::polyline(points.clone()), 5.0, true);
    assert_eq!(
        triangulator.tessellator().calls(),
        vec![Call::Polyline(points, 1.5)]
    );
    assert!(mesh.vertices().iter().all(|v| v[2] == 5.0));
}

#[test]
fn test_polyline_default_tessellator() {
    let points = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)];
    let mesh = triangulate(&Shape::polyline(points), 5.0, true);
    assert!(mesh.vertex_count() > 0);
    assert!(mesh.index_count() > 0);
    assert!(mesh.vertices().iter().all(|v| v[2] == 5.0));
    assert!(mesh.validate().is_ok());
}

// =============================================================================
// UNRECOGNIZED / FAILURES
// =============================================================================

#[test]
fn test_other_kind_is_empty() {
    let triangulator = recording();
    let mesh = triangulator.triangulate(&Shape::Other { kind: 42 }, 0.0, true);
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.index_count(), 0);
    assert!(triangulator.tessellator().calls().is_empty());
}

#[test]
fn test_rejected_tessellation_gives_empty_buffer() {
    let triangulator = Triangulator::new(Failing, MeshConfig::default());
    let mesh = triangulator.triangulate(&Shape::disk(1.0), 0.0, true);
    assert!(mesh.is_empty());
}

#[test]
fn test_try_triangulate_reports_error() {
    let triangulator = Triangulator::new(Failing, MeshConfig::default());
    let err = triangulator
        .try_triangulate(&Shape::polyline(vec![Vec2::ZERO, Vec2::X]), 0.0, true)
        .unwrap_err();
    assert_eq!(err, MeshError::tessellation("rejected"));
}

#[test]
fn test_extruded_is_empty() {
    for shape in [
        Shape::disk(1.0),
        Shape::polygon(vec![Vec2::ZERO, Vec2::X, Vec2::Y]),
        Shape::polyline(vec![Vec2::ZERO, Vec2::X]),
    ] {
        let mesh = triangulate_extruded(&shape, 2.0);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.index_count(), 0);
    }
}

#[test]
fn test_non_finite_geometry_is_rejected() {
    let triangulator = Triangulator::<LyonTessellator>::default();
    let shapes = [
        Shape::disk(f32::NAN),
        Shape::disk(f32::INFINITY),
        Shape::polyline(vec![Vec2::ZERO, Vec2::new(f32::NAN, 1.0), Vec2::new(2.0, 1.0)]),
        Shape::polygon(vec![Vec2::ZERO, Vec2::X, Vec2::new(0.5, f32::NAN)]),
    ];
    for shape in &shapes {
        let mesh = triangulator.triangulate(shape, 0.0, true);
        assert_eq!(mesh.vertex_count(), 0, "{shape:?}");
        assert_eq!(mesh.index_count(), 0, "{shape:?}");
        assert!(
            matches!(
                triangulator.try_triangulate(shape, 0.0, true),
                Err(MeshError::Tessellation(_))
            ),
            "{shape:?}"
        );
    }

    let batch = crate::batch::triangulate_all(&triangulator, &shapes, 0.0, true);
    assert!(batch.is_empty());
}
