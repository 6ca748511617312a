//! Lawnpede entry point
//!
//! Builds the static models and runs a short headless march of one
//! centipede across the lawn.

use lawnpede::consts::*;
use lawnpede::geometry::{Direction, Point};
use lawnpede::{Centipede, Models, Settings};

/// Default settings file, overridable by the first argument
const SETTINGS_FILE: &str = "lawnpede.json";

/// Upper bound on simulated ticks
const MAX_TICKS: u32 = 1000;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SETTINGS_FILE.to_string());
    let settings = Settings::load_or_default(&path);

    let models = match Models::new(&settings) {
        Ok(models) => models,
        Err(err) => {
            log::error!("Failed to build models: {err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Models ready ({} quality): {} solid vertices, {} segment vertices",
        settings.quality.as_str(),
        models.solid_vertex_count(),
        models.segment.vertex_count()
    );

    march(&settings);
}

/// Walk a centipede along the top row until its head reaches the far column
fn march(settings: &Settings) {
    let spacing = settings.grid_spacing;
    let row_y = spacing * (LAWN_ROWS - 1) as f32;
    let far_column = Point::new(spacing * (LAWN_COLUMNS - 1) as f32, row_y);

    let mut centipede = match Centipede::new(
        Point::new(0.0, row_y),
        Direction::Right.unit() * settings.start_speed,
        Direction::Right,
        settings.segment_radius,
    ) {
        Ok(centipede) => centipede,
        Err(err) => {
            log::error!("Failed to spawn centipede: {err}");
            return;
        }
    };
    centipede.add_tails(settings.start_length.saturating_sub(1), Direction::Left);

    if settings.start_speed <= 0.0 {
        log::warn!("Centipede has no speed, nothing to simulate");
        return;
    }
    // One grid step per tick keeps positions on grid lines
    let dt = spacing / settings.start_speed;

    for tick in 0..MAX_TICKS {
        let previous = centipede.head().position;
        centipede.advance(dt);
        let next = centipede.head().position;

        if far_column.intersects_path_of(previous, next) {
            log::info!("Head reached the far column after {} ticks", tick + 1);
            break;
        }
    }

    let middle = centipede.len() / 2;
    match centipede.destroy_segment(middle) {
        Ok(hit) => {
            let len = |c: &Option<Centipede>| c.as_ref().map_or(0, Centipede::len);
            log::info!(
                "Shot segment at ({}, {}): {} segments ahead, {} behind",
                hit.destroyed.position.x,
                hit.destroyed.position.y,
                len(&hit.front),
                len(&hit.back)
            );
            let drawn: usize = [hit.front, hit.back]
                .iter()
                .flatten()
                .map(|c| c.instances().count())
                .sum();
            log::info!("{drawn} segment quads to draw next frame");
        }
        Err(centipede) => log::warn!("No segment {middle} in a chain of {}", centipede.len()),
    }
}
