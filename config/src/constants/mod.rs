//! # Configuration Constants
//!
//! Centralized values shared across the shape-mesh pipeline. Each public item
//! documents its purpose and provides a minimal usage example so that
//! downstream crates can remain declarative and avoid scattering literals.
//!
//! ## Categories
//!
//! - **Layout**: GPU attribute stride
//! - **Tessellation**: Disk fidelity, stroke width, curve tolerance
//! - **Color**: Debug palette and default vertex color
//! - **Geometry**: Padding used when framing hole paths

use std::fmt;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of components stored per vertex for positions `(x, y, z, w)`,
/// normals `(x, y, z, pad)` and colors `(r, g, b, a)`.
///
/// # Examples
/// ```
/// use config::constants::VERTEX_DIMENSION;
/// let floats_for_three_vertices = 3 * VERTEX_DIMENSION;
/// assert_eq!(floats_for_three_vertices, 12);
/// ```
pub const VERTEX_DIMENSION: usize = 4;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of boundary points used to approximate a disk.
///
/// # Examples
/// ```
/// use config::constants::DISK_SEGMENT_COUNT;
/// assert_eq!(DISK_SEGMENT_COUNT, 30);
/// ```
pub const DISK_SEGMENT_COUNT: u32 = 30;

/// Thickness of the stroke swept along open polylines.
///
/// # Examples
/// ```
/// use config::constants::STROKE_WIDTH;
/// assert!(STROKE_WIDTH > 0.0);
/// ```
pub const STROKE_WIDTH: f32 = 1.5;

/// Maximum distance between a curve and its tessellated approximation.
///
/// Only relevant for round joins and curved path segments; straight polygon
/// and polyline edges are emitted exactly.
///
/// # Examples
/// ```
/// use config::constants::TESSELLATION_TOLERANCE;
/// assert!(TESSELLATION_TOLERANCE < 1.0);
/// ```
pub const TESSELLATION_TOLERANCE: f32 = 0.01;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Red, green and blue striping assigned by vertex position `i % 3`.
///
/// This is an identification aid for inspecting triangulations, not a
/// material color.
///
/// # Examples
/// ```
/// use config::constants::DEBUG_PALETTE;
/// assert_eq!(DEBUG_PALETTE[1], [0.0, 1.0, 0.0, 1.0]);
/// ```
pub const DEBUG_PALETTE: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

/// Vertex color used when the debug palette is disabled (light gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Padding added around a hole path when a rectangular frame is built to
/// contain it.
///
/// # Examples
/// ```
/// use config::constants::FRAME_PADDING;
/// assert!(FRAME_PADDING > 0.0);
/// ```
pub const FRAME_PADDING: f32 = 5e-2;

// =============================================================================
// MESH CONFIG
// =============================================================================

/// Immutable snapshot of the tunable mesh-construction settings.
///
/// The fields are public, so a struct literal bypasses the checks in
/// [`MeshConfig::new`]; call [`MeshConfig::validate`] on such values.
///
/// # Examples
/// ```
/// use config::constants::MeshConfig;
/// let config = MeshConfig::default();
/// assert!(config.stroke_width > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    /// Boundary points used for the disk approximation. Zero is accepted and
    /// produces an empty mesh.
    pub disk_segment_count: u32,
    /// Stroke thickness for open polylines.
    pub stroke_width: f32,
    /// Whether vertices are striped red/green/blue instead of using
    /// [`DEFAULT_COLOR`].
    pub debug_color_palette: bool,
}

impl MeshConfig {
    /// Builds a configuration, rejecting stroke widths that cannot produce
    /// geometry.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MeshConfig;
    /// let cfg = MeshConfig::new(64, 2.0, false).expect("valid config");
    /// assert_eq!(cfg.disk_segment_count, 64);
    /// assert!(MeshConfig::new(64, 0.0, false).is_err());
    /// ```
    pub fn new(
        disk_segment_count: u32,
        stroke_width: f32,
        debug_color_palette: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            disk_segment_count,
            stroke_width,
            debug_color_palette,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the values [`MeshConfig::new`] enforces.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MeshConfig;
    /// let literal = MeshConfig { stroke_width: 0.0, ..MeshConfig::default() };
    /// assert!(literal.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width));
        }
        Ok(())
    }

    /// Returns the color for the vertex at source position `index`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{MeshConfig, DEBUG_PALETTE};
    /// let cfg = MeshConfig::default();
    /// assert_eq!(cfg.vertex_color(4), DEBUG_PALETTE[1]);
    /// ```
    #[inline]
    pub fn vertex_color(&self, index: usize) -> [f32; 4] {
        if self.debug_color_palette {
            DEBUG_PALETTE[index % DEBUG_PALETTE.len()]
        } else {
            DEFAULT_COLOR
        }
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            disk_segment_count: DISK_SEGMENT_COUNT,
            stroke_width: STROKE_WIDTH,
            debug_color_palette: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the stroke width is zero, negative or not finite.
    InvalidStrokeWidth(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStrokeWidth(value) => {
                write!(f, "stroke_width must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
