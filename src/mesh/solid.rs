//! Flat-color shape tessellation

use std::f32::consts::TAU;

use glam::Vec2;

use super::{MeshBuilder, MeshError, SolidVertex, check_dimension, check_point_count};
use crate::geometry::{Circle, Corner, Point, Rectangle, Square, SquareWithHole};
use crate::polar_to_cartesian;

impl From<Point> for SolidVertex {
    fn from(p: Point) -> Self {
        SolidVertex::new(p.x, p.y)
    }
}

fn solid(v: Vec2) -> SolidVertex {
    SolidVertex::new(v.x, v.y)
}

impl MeshBuilder<SolidVertex> {
    /// Circle as a fan of `num_points` slices
    ///
    /// The last rim vertex reuses the first rim angle so the fan closes.
    pub fn append_circle(&mut self, circle: Circle, num_points: u32) -> Result<(), MeshError> {
        check_point_count(num_points)?;
        check_dimension("circle radius", circle.radius)?;

        let center = circle.center.to_vec2();
        let mut fan = Vec::with_capacity(Circle::vertices_needed(num_points));
        fan.push(solid(center));
        for i in 0..=num_points {
            let theta = ((i % num_points) as f32 / num_points as f32) * TAU;
            fan.push(solid(center + polar_to_cartesian(circle.radius, theta)));
        }

        self.push_fan(&fan);
        Ok(())
    }

    pub fn append_square(&mut self, square: Square) -> Result<(), MeshError> {
        check_dimension("square length", square.length)?;
        self.append_quad(square.to_rectangle());
        Ok(())
    }

    pub fn append_rectangle(&mut self, rectangle: Rectangle) -> Result<(), MeshError> {
        check_dimension("rectangle height", rectangle.height)?;
        check_dimension("rectangle width", rectangle.width)?;
        self.append_quad(rectangle);
        Ok(())
    }

    /// Center, four corners counter-clockwise from bottom-left, bottom-left again
    fn append_quad(&mut self, rectangle: Rectangle) {
        let [bl, br, tr, tl] = rectangle.corners();
        let fan = [rectangle.center, bl, br, tr, tl, bl].map(SolidVertex::from);
        self.push_fan(&fan);
    }

    /// Square with a circular hole, as four corner fans
    ///
    /// Each fan has its apex on a square corner and sweeps a quarter of the
    /// hole rim between the midpoints of the two adjacent edges. The rim is
    /// walked clockwise from 12 o'clock, so corner phases follow
    /// [`Corner::ALL`] order and the quarters meet without gaps.
    pub fn append_square_with_hole(
        &mut self,
        shape: SquareWithHole,
        num_points_quarter: u32,
    ) -> Result<(), MeshError> {
        check_point_count(num_points_quarter)?;
        check_dimension("square length", shape.length)?;

        let per_corner = SquareWithHole::vertices_per_corner(num_points_quarter);
        // Reserve all four up front so a short buffer fails before any write
        self.reserve(per_corner * 4);

        let center = shape.center.to_vec2();
        let radius = shape.hole_radius();
        let slices = (num_points_quarter * 4) as f32;

        for corner in Corner::ALL {
            let mut fan = Vec::with_capacity(per_corner);
            fan.push(SolidVertex::from(shape.corner(corner)));
            for i in 0..=num_points_quarter {
                let theta = (i as f32 / slices) * TAU + corner.phase();
                fan.push(solid(center + radius * Vec2::new(theta.sin(), theta.cos())));
            }
            self.push_fan(&fan);
        }

        Ok(())
    }
}
