//! The four grid directions a segment can head in

use serde::{Deserialize, Serialize};

use super::point::Vector;

/// Heading on the axis-aligned grid
///
/// Each variant carries its own sprite rotation, so there is no need to
/// compare vectors against shared constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector for this heading
    pub const fn unit(self) -> Vector {
        match self {
            Direction::Up => Vector::new(0.0, 1.0),
            Direction::Down => Vector::new(0.0, -1.0),
            Direction::Left => Vector::new(-1.0, 0.0),
            Direction::Right => Vector::new(1.0, 0.0),
        }
    }

    /// Counter-clockwise sprite rotation, sprites face up at 0°
    pub const fn rotation_degrees(self) -> f32 {
        match self {
            Direction::Up => 0.0,
            Direction::Down => 180.0,
            Direction::Left => 90.0,
            Direction::Right => 270.0,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Exact value match against the four unit vectors
    pub fn from_vector(vector: Vector) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.unit() == vector)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Rotation for an optional heading, unknown headings draw unrotated
pub fn rotation_for(direction: Option<Direction>) -> f32 {
    direction.map(Direction::rotation_degrees).unwrap_or(0.0)
}

impl From<Direction> for Vector {
    fn from(direction: Direction) -> Self {
        direction.unit()
    }
}
