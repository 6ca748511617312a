//! Grid-crossing predicates
//!
//! A moving entity is sampled once per step. Given the previous and next
//! samples, these decide whether it has passed through a fixed grid point
//! (`current`) in between. One axis is compared exactly and the other with
//! strict betweenness, so positions must snap to the grid spacing between
//! samples for the exact comparison to hold.

use crate::geometry::Point;

/// Strictly between `a` and `b`, in either order
#[inline]
fn strictly_between(value: f32, a: f32, b: f32) -> bool {
    (a < value && value < b) || (b < value && value < a)
}

/// Same column as `next`, and the row of `current` was crossed
///
/// `previous.x` is deliberately ignored: only `current` and `next` must share
/// the column.
pub fn was_passed_vertically(current: Point, previous: Point, next: Point) -> bool {
    current.x == next.x && strictly_between(current.y, previous.y, next.y)
}

/// Same row as `next`, and the column of `current` was crossed
pub fn was_passed_horizontally(current: Point, previous: Point, next: Point) -> bool {
    current.y == next.y && strictly_between(current.x, previous.x, next.x)
}

/// Whether the path `previous -> next` reached or crossed `current`
///
/// Landing exactly on `current` counts regardless of `previous`.
pub fn intersects_path_of(current: Point, previous: Point, next: Point) -> bool {
    current == next
        || was_passed_vertically(current, previous, next)
        || was_passed_horizontally(current, previous, next)
}

impl Point {
    /// See [`intersects_path_of`]
    pub fn intersects_path_of(self, previous: Point, next: Point) -> bool {
        intersects_path_of(self, previous, next)
    }
}
