use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::MaterialType;

/// Settings for one sketch tool instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old config
pub struct SketchConfig {
    /// Maximum number of undo snapshots kept. `None` keeps every snapshot.
    pub max_history: Option<usize>,
    /// Stroke width of committed walls
    pub wall_width: f32,
    /// Stroke width of door and window outlines
    pub outline_width: f32,
    pub door_color: Color32,
    pub window_color: Color32,
    pub preview_color: Color32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            max_history: None,
            wall_width: 4.0,
            outline_width: 2.0,
            door_color: Color32::from_rgb(160, 82, 45),
            window_color: Color32::from_rgb(70, 130, 180),
            preview_color: Color32::from_rgba_unmultiplied(30, 144, 255, 160),
        }
    }
}

impl SketchConfig {
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = Some(max_history);
        self
    }

    pub fn wall_color(&self, material: MaterialType) -> Color32 {
        match material {
            MaterialType::Drywall => Color32::from_gray(90),
            MaterialType::Concrete => Color32::from_gray(40),
            MaterialType::Wood => Color32::from_rgb(133, 94, 66),
            MaterialType::Tile => Color32::from_rgb(0, 128, 128),
        }
    }
}
