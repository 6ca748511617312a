//! Lawnpede - a grid-bound centipede arcade game
//!
//! Core modules:
//! - `geometry`: Immutable points, vectors, directions and shapes
//! - `path`: Grid-crossing predicates for sampled movement
//! - `mesh`: Procedural vertex buffers and fan draw commands
//! - `centipede`: The segment chain
//! - `models`: Static meshes built once per load
//! - `settings`: Persisted configuration

pub mod centipede;
pub mod geometry;
pub mod mesh;
pub mod models;
pub mod path;
pub mod settings;

pub use centipede::{Centipede, ChainError, Hit, Segment, SegmentInstance};
pub use mesh::{DrawCommand, GeneratedMesh, MeshError, PrimitiveKind};
pub use models::Models;
pub use settings::{QualityPreset, Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Radius of one centipede body segment
    pub const SEGMENT_RADIUS: f32 = 16.0;
    /// Lawn grid spacing, one segment diameter
    pub const GRID_SPACING: f32 = 32.0;
    /// Segments in a new centipede
    pub const START_LENGTH: usize = 8;
    /// Centipede speed (units/s)
    pub const START_SPEED: f32 = 128.0;

    /// Lawn dimensions in grid cells
    pub const LAWN_COLUMNS: u32 = 15;
    pub const LAWN_ROWS: u32 = 20;

    pub const POWER_UP_RADIUS: f32 = 12.0;
    pub const BORDER_THICKNESS: f32 = 8.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
