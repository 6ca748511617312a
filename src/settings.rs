//! Game settings and preferences
//!
//! Stored as JSON next to the executable on native builds.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tessellation quality levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Rim slices for full circles
    pub fn circle_points(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }

    /// Rim slices per corner of a square hole
    pub fn quarter_points(&self) -> u32 {
        self.circle_points() / 3
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mesh tessellation quality
    pub quality: QualityPreset,

    // === Centipede ===
    /// Radius of one body segment
    pub segment_radius: f32,
    /// Distance between lawn grid lines
    pub grid_spacing: f32,
    /// Segments in a freshly spawned centipede
    pub start_length: usize,
    /// Initial speed in units per second
    pub start_speed: f32,

    // === Rendering ===
    /// Draw the holed obstacle tiles
    pub show_obstacles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            segment_radius: SEGMENT_RADIUS,
            grid_spacing: GRID_SPACING,
            start_length: START_LENGTH,
            start_speed: START_SPEED,

            show_obstacles: true,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset skips the most vertex-heavy model
        if preset == QualityPreset::Low {
            self.show_obstacles = false;
        }
    }

    pub fn circle_points(&self) -> u32 {
        self.quality.circle_points()
    }

    pub fn quarter_points(&self) -> u32 {
        self.quality.quarter_points()
    }

    /// Replace unusable values with defaults
    ///
    /// Grid crossings are only detected when segments advance in whole grid
    /// steps, so a spacing that is not a multiple of the segment diameter
    /// is reported.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if !(self.segment_radius.is_finite() && self.segment_radius > 0.0) {
            log::warn!("invalid segment_radius {}, using default", self.segment_radius);
            self.segment_radius = defaults.segment_radius;
        }
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            log::warn!("invalid grid_spacing {}, using default", self.grid_spacing);
            self.grid_spacing = defaults.grid_spacing;
        }
        if !self.start_speed.is_finite() || self.start_speed < 0.0 {
            log::warn!("invalid start_speed {}, using default", self.start_speed);
            self.start_speed = defaults.start_speed;
        }
        if self.start_length == 0 {
            self.start_length = 1;
        }

        let steps = self.grid_spacing / (2.0 * self.segment_radius);
        if steps.fract() != 0.0 {
            log::warn!(
                "grid_spacing {} is not a multiple of the segment diameter {}",
                self.grid_spacing,
                2.0 * self.segment_radius
            );
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let mut settings: Settings = serde_json::from_str(&json)?;
        settings.sanitize();
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::info!("Using default settings ({err})");
                Self::default()
            }
        }
    }
}
