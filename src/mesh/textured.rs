//! Textured shape tessellation
//!
//! Texture space is `[0, 1]` on both axes with `t = 0` on the top image row,
//! so geometric bottom maps to `t = 1`.

use super::{MeshBuilder, MeshError, TexturedVertex, check_dimension};
use crate::geometry::Rectangle;

/// Texture coordinates of the corners, counter-clockwise from bottom-left
const CORNER_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

impl MeshBuilder<TexturedVertex> {
    /// Rectangle as a 6-vertex fan with the full texture stretched over it
    pub fn append_rectangle(&mut self, rectangle: Rectangle) -> Result<(), MeshError> {
        check_dimension("rectangle height", rectangle.height)?;
        check_dimension("rectangle width", rectangle.width)?;

        let c = rectangle.center;
        let corners = rectangle.corners();
        let vertex = |i: usize| {
            let [s, t] = CORNER_TEX_COORDS[i];
            TexturedVertex::new(corners[i].x, corners[i].y, s, t)
        };

        let fan = [
            TexturedVertex::new(c.x, c.y, 0.5, 0.5),
            vertex(0),
            vertex(1),
            vertex(2),
            vertex(3),
            vertex(0),
        ];
        self.push_fan(&fan);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::mesh::{DrawCommand, TexturedBuilder};

    #[test]
    fn test_textured_rectangle_layout() {
        let mut builder = TexturedBuilder::new(Rectangle::vertices_needed());
        builder
            .append_rectangle(Rectangle::new(Point::new(0.0, 0.0), 2.0, 4.0))
            .unwrap();
        let mesh = builder.build();

        assert_eq!(mesh.floats_per_vertex(), 5);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.vertex(0).unwrap(), &[0.0, 0.0, 0.0, 0.5, 0.5]);
        // Bottom-left maps to the bottom-left of the image: (0, 1)
        assert_eq!(mesh.vertex(1).unwrap(), &[-2.0, -1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.vertex(2).unwrap(), &[2.0, -1.0, 0.0, 1.0, 1.0]);
        assert_eq!(mesh.vertex(3).unwrap(), &[2.0, 1.0, 0.0, 1.0, 0.0]);
        // Top-left maps to image origin
        assert_eq!(mesh.vertex(4).unwrap(), &[-2.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertex(5), mesh.vertex(1));
        assert_eq!(mesh.draw_commands(), &[DrawCommand::fan(0, 6)]);
    }

    #[test]
    fn test_textured_commands_follow_cursor() {
        let mut builder = TexturedBuilder::new(Rectangle::vertices_needed() * 2);
        let r = Rectangle::new(Point::ORIGIN, 1.0, 1.0);
        builder.append_rectangle(r).unwrap();
        builder.append_rectangle(r).unwrap();
        let mesh = builder.build();
        assert_eq!(mesh.draw_commands()[1], DrawCommand::fan(6, 6));
    }

    #[test]
    fn test_rejects_nan_width() {
        let mut builder = TexturedBuilder::new(Rectangle::vertices_needed());
        let err = builder.append_rectangle(Rectangle::new(Point::ORIGIN, 1.0, f32::NAN));
        assert!(err.is_err());
        assert_eq!(builder.vertices_written(), 0);
    }
}
