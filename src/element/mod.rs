use egui::Pos2;
use serde::{Deserialize, Serialize};

mod opening;
mod wall;

pub use opening::{Door, Opening, Window, DOOR_SIZE, WINDOW_SIZE};
pub use wall::Wall;

use crate::id_generator::ElementId;

/// A position on the drawing surface, in pixels from the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

impl From<Point> for Pos2 {
    fn from(point: Point) -> Self {
        egui::pos2(point.x, point.y)
    }
}

/// Material assigned to newly drawn walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    #[default]
    Drywall,
    Concrete,
    Wood,
    Tile,
}

impl MaterialType {
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Drywall,
        MaterialType::Concrete,
        MaterialType::Wood,
        MaterialType::Tile,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MaterialType::Drywall => "drywall",
            MaterialType::Concrete => "concrete",
            MaterialType::Wood => "wood",
            MaterialType::Tile => "tile",
        }
    }
}

/// An enclosed area bounded by walls.
///
/// Rooms are part of the stored data shape only; the sketch tool never builds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: ElementId,
    pub name: String,
    pub walls: Vec<ElementId>,
}

/// One committed sketch element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Wall(Wall),
    Door(Door),
    Window(Window),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Wall(wall) => wall.id,
            Element::Door(door) => door.id,
            Element::Window(window) => window.id,
        }
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            Element::Wall(_) => "wall",
            Element::Door(_) => "door",
            Element::Window(_) => "window",
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::state::DrawMode;

    /// Build the element a finished stroke stands for.
    ///
    /// Walls span `start` to `end` exactly. Doors and windows are stamped at `end`
    /// with their fixed size; the drag length does not affect them. `Reading` has
    /// no element type yet and yields `None`.
    pub fn create_element(
        mode: DrawMode,
        material: MaterialType,
        start: Point,
        end: Point,
    ) -> Option<Element> {
        match mode {
            DrawMode::Wall => Some(Element::Wall(create_wall(start, end, material))),
            DrawMode::Door => Some(Element::Door(create_door(end))),
            DrawMode::Window => Some(Element::Window(create_window(end))),
            DrawMode::Reading => None,
        }
    }

    /// Create a new wall element
    pub fn create_wall(start: Point, end: Point, material: MaterialType) -> Wall {
        Wall::new(start, end, material)
    }

    /// Create a new door centred on `position`
    pub fn create_door(position: Point) -> Door {
        Opening::new(position, DOOR_SIZE)
    }

    /// Create a new window centred on `position`
    pub fn create_window(position: Point) -> Window {
        Opening::new(position, WINDOW_SIZE)
    }
}
