//! Immutable 2D geometry
//!
//! Everything lives in the Z = 0 plane.

pub mod direction;
pub mod point;
pub mod shapes;

pub use direction::{Direction, rotation_for};
pub use point::{Point, Vector};
pub use shapes::{Circle, Corner, Rectangle, Square, SquareWithHole};
