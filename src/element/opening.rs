use egui::{Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::Point;
use crate::id_generator::{generate_id, ElementId};

/// Width and height every new door is stamped with.
pub const DOOR_SIZE: Vec2 = Vec2::new(30.0, 80.0);
/// Width and height every new window is stamped with.
pub const WINDOW_SIZE: Vec2 = Vec2::new(40.0, 60.0);

/// A fixture placed in a wall: a door or a window.
///
/// `position` is the centre of the shape. `rotation` is in degrees and is
/// always 0 for freshly drawn openings, but loaded sketches may carry other values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: ElementId,
    pub position: Point,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

pub type Door = Opening;
pub type Window = Opening;

impl Opening {
    pub fn new(position: Point, size: Vec2) -> Self {
        Self {
            id: generate_id(),
            position,
            width: size.x,
            height: size.y,
            rotation: 0.0,
        }
    }

    pub fn size(&self) -> Vec2 {
        egui::vec2(self.width, self.height)
    }

    /// The unrotated, axis-aligned outline around `position`.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position.into(), self.size())
    }

    /// Outline corners after applying `rotation` about the centre, clockwise from top-left.
    pub fn corners(&self) -> [egui::Pos2; 4] {
        let rect = self.rect();
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
        if self.rotation == 0.0 {
            return corners;
        }
        let center = rect.center();
        let rot = egui::emath::Rot2::from_angle(self.rotation.to_radians());
        corners.map(|corner| center + rot * (corner - center))
    }
}
