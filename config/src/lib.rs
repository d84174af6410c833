//! # Config Crate
//!
//! Centralized configuration constants for the shape-mesh pipeline.
//! Tessellation fidelity, stroke thickness, the debug color palette and the
//! GPU attribute layout are defined here so that no crate carries inline
//! literals for them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MeshConfig, DISK_SEGMENT_COUNT, STROKE_WIDTH};
//!
//! let cfg = MeshConfig::default();
//! assert_eq!(cfg.disk_segment_count, DISK_SEGMENT_COUNT);
//! assert_eq!(cfg.stroke_width, STROKE_WIDTH);
//! assert!(cfg.debug_color_palette);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `MeshConfig::new` rejects unusable values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
