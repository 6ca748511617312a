//! Point and vector value types
//!
//! Both are plain `Copy` values with Z fixed at zero. "Moving" a point means
//! building a new one and assigning it back to the owning field.

use std::ops::{Add, Mul, Neg, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A position on the playfield
///
/// Equality is exact component-wise float comparison. The path predicates
/// rely on this, so no epsilon is applied anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset this point along `vector`
    #[inline]
    pub fn translate(self, vector: Vector) -> Self {
        Self::new(self.x + vector.x, self.y + vector.y)
    }

    /// Vector pointing from `self` to `other`
    #[inline]
    pub fn vector_to(self, other: Point) -> Vector {
        Vector::new(other.x - self.x, other.y - self.y)
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        self.vector_to(other).length()
    }

    /// Position as `[x, y, 0]` for vertex data
    #[inline]
    pub fn to_array3(self) -> [f32; 3] {
        [self.x, self.y, 0.0]
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self.translate(rhs)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        self.translate(-rhs)
    }
}

/// A direction and magnitude, never a position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.to_vec2().length()
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
