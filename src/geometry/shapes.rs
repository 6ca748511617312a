//! Shape descriptions consumed by the mesh builders
//!
//! Shapes are passed by value and only describe geometry. Each kind also
//! reports how many vertices it takes so builders can be sized up front.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Vertices in the fixed center + 4 corners + closing corner fan
pub const QUAD_FAN_VERTICES: usize = 6;

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Center plus `num_points + 1` rim points (the first rim point repeats)
    pub const fn vertices_needed(num_points: u32) -> usize {
        num_points as usize + 2
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub center: Point,
    pub height: f32,
    pub width: f32,
}

impl Rectangle {
    pub const fn new(center: Point, height: f32, width: f32) -> Self {
        Self {
            center,
            height,
            width,
        }
    }

    pub const fn vertices_needed() -> usize {
        QUAD_FAN_VERTICES
    }

    /// Corners counter-clockwise from bottom-left
    pub fn corners(&self) -> [Point; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let c = self.center;
        [
            Point::new(c.x - hw, c.y - hh),
            Point::new(c.x + hw, c.y - hh),
            Point::new(c.x + hw, c.y + hh),
            Point::new(c.x - hw, c.y + hh),
        ]
    }

    /// Whether `point` lies inside or on the edge
    pub fn contains(&self, point: Point) -> bool {
        (point.x - self.center.x).abs() <= self.width / 2.0
            && (point.y - self.center.y).abs() <= self.height / 2.0
    }
}

/// An axis-aligned square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub center: Point,
    pub length: f32,
}

impl Square {
    pub const fn new(center: Point, length: f32) -> Self {
        Self { center, length }
    }

    pub const fn vertices_needed() -> usize {
        QUAD_FAN_VERTICES
    }

    pub fn to_rectangle(self) -> Rectangle {
        Rectangle::new(self.center, self.length, self.length)
    }
}

/// Square corner a quarter-fan is anchored to, in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];

    /// Angle where this corner's quarter arc starts, measured clockwise from 12 o'clock
    pub const fn phase(self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Corner::TopRight => 0.0,
            Corner::BottomRight => FRAC_PI_2,
            Corner::BottomLeft => PI,
            Corner::TopLeft => 1.5 * PI,
        }
    }

    /// Sign of the corner offset from the square center
    pub const fn signs(self) -> (f32, f32) {
        match self {
            Corner::TopRight => (1.0, 1.0),
            Corner::BottomRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, -1.0),
            Corner::TopLeft => (-1.0, 1.0),
        }
    }
}

/// A square with a concentric circular hole of radius `length / 2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareWithHole {
    pub center: Point,
    pub length: f32,
}

impl SquareWithHole {
    pub const fn new(center: Point, length: f32) -> Self {
        Self { center, length }
    }

    #[inline]
    pub fn hole_radius(&self) -> f32 {
        self.length / 2.0
    }

    /// Position of a corner fan's apex
    pub fn corner(&self, corner: Corner) -> Point {
        let half = self.length / 2.0;
        let (sx, sy) = corner.signs();
        Point::new(self.center.x + sx * half, self.center.y + sy * half)
    }

    /// Apex plus `num_points_quarter + 1` arc points
    pub const fn vertices_per_corner(num_points_quarter: u32) -> usize {
        num_points_quarter as usize + 2
    }

    pub const fn vertices_needed(num_points_quarter: u32) -> usize {
        Self::vertices_per_corner(num_points_quarter) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_corners_ccw_from_bottom_left() {
        let r = Rectangle::new(Point::new(10.0, 20.0), 4.0, 8.0);
        let [bl, br, tr, tl] = r.corners();
        assert_eq!(bl, Point::new(6.0, 18.0));
        assert_eq!(br, Point::new(14.0, 18.0));
        assert_eq!(tr, Point::new(14.0, 22.0));
        assert_eq!(tl, Point::new(6.0, 22.0));
    }

    #[test]
    fn test_rectangle_contains() {
        let r = Rectangle::new(Point::ORIGIN, 2.0, 2.0);
        assert!(r.contains(Point::new(1.0, 1.0)));
        assert!(!r.contains(Point::new(1.5, 0.0)));
    }

    #[test]
    fn test_vertex_counts() {
        assert_eq!(Circle::vertices_needed(16), 18);
        assert_eq!(Square::vertices_needed(), 6);
        assert_eq!(SquareWithHole::vertices_needed(8), 40);
    }

    #[test]
    fn test_hole_corners() {
        let s = SquareWithHole::new(Point::new(0.0, 0.0), 2.0);
        assert_eq!(s.corner(Corner::TopRight), Point::new(1.0, 1.0));
        assert_eq!(s.corner(Corner::BottomRight), Point::new(1.0, -1.0));
        assert_eq!(s.corner(Corner::BottomLeft), Point::new(-1.0, -1.0));
        assert_eq!(s.corner(Corner::TopLeft), Point::new(-1.0, 1.0));
        assert_eq!(s.hole_radius(), 1.0);
    }
}
