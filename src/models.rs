//! Static meshes built once at load time
//!
//! Shapes never change vertex count during play; the renderer uploads each
//! mesh once and only changes the transform it draws with.

use crate::consts::*;
use crate::geometry::{Circle, Point, Rectangle, Square, SquareWithHole};
use crate::mesh::{GeneratedMesh, MeshError, SolidBuilder, TexturedBuilder};
use crate::settings::Settings;

/// Every mesh the game draws, centered on the origin
#[derive(Debug, Clone)]
pub struct Models {
    /// Circular power-up pickup
    pub power_up: GeneratedMesh,
    /// Plain lawn tile
    pub tile: GeneratedMesh,
    /// Playfield border bar
    pub border: GeneratedMesh,
    /// Tile with a hole segments can pass through
    pub obstacle: Option<GeneratedMesh>,
    /// Textured quad drawn once per centipede segment
    pub segment: GeneratedMesh,
}

impl Models {
    pub fn new(settings: &Settings) -> Result<Self, MeshError> {
        let circle_points = settings.circle_points();
        let quarter_points = settings.quarter_points();
        let tile_length = settings.grid_spacing;

        let mut power_up = SolidBuilder::new(Circle::vertices_needed(circle_points));
        power_up.append_circle(Circle::new(Point::ORIGIN, POWER_UP_RADIUS), circle_points)?;

        let mut tile = SolidBuilder::new(Square::vertices_needed());
        tile.append_square(Square::new(Point::ORIGIN, tile_length))?;

        let mut border = SolidBuilder::new(Rectangle::vertices_needed());
        border.append_rectangle(Rectangle::new(
            Point::ORIGIN,
            BORDER_THICKNESS,
            tile_length * LAWN_COLUMNS as f32,
        ))?;

        let obstacle = if settings.show_obstacles {
            let mut builder = SolidBuilder::new(SquareWithHole::vertices_needed(quarter_points));
            builder
                .append_square_with_hole(SquareWithHole::new(Point::ORIGIN, tile_length), quarter_points)?;
            Some(builder.build())
        } else {
            None
        };

        let diameter = settings.segment_radius * 2.0;
        let mut segment = TexturedBuilder::new(Rectangle::vertices_needed());
        segment.append_rectangle(Rectangle::new(Point::ORIGIN, diameter, diameter))?;

        let models = Self {
            power_up: power_up.build(),
            tile: tile.build(),
            border: border.build(),
            obstacle,
            segment: segment.build(),
        };
        log::debug!(
            "built models: {} solid vertices, {} textured vertices",
            models.solid_vertex_count(),
            models.segment.vertex_count()
        );
        Ok(models)
    }

    /// Total vertices across the flat-color meshes
    pub fn solid_vertex_count(&self) -> usize {
        self.power_up.vertex_count()
            + self.tile.vertex_count()
            + self.border.vertex_count()
            + self.obstacle.as_ref().map_or(0, GeneratedMesh::vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::QualityPreset;

    #[test]
    fn test_models_fill_their_buffers() {
        let settings = Settings::default();
        let models = Models::new(&settings).unwrap();

        assert_eq!(
            models.power_up.vertex_count(),
            Circle::vertices_needed(settings.circle_points())
        );
        assert_eq!(models.tile.vertex_count(), 6);
        assert_eq!(models.border.vertex_count(), 6);
        let obstacle = models.obstacle.as_ref().unwrap();
        assert_eq!(obstacle.draw_commands().len(), 4);
        assert_eq!(models.segment.floats_per_vertex(), 5);
    }

    #[test]
    fn test_low_quality_skips_obstacle() {
        let models = Models::new(&Settings::from_preset(QualityPreset::Low)).unwrap();
        assert!(models.obstacle.is_none());
        assert_eq!(models.solid_vertex_count(), 14 + 6 + 6);
    }

    #[test]
    fn test_bad_settings_are_rejected() {
        let settings = Settings {
            segment_radius: -2.0,
            ..Settings::default()
        };
        assert!(Models::new(&settings).is_err());
    }
}
