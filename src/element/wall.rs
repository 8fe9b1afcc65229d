use serde::{Deserialize, Serialize};

use super::{MaterialType, Point};
use crate::id_generator::{generate_id, ElementId};

/// A straight wall between two absolute endpoints.
///
/// `start == end` is allowed; rejecting degenerate walls is left to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: ElementId,
    pub start: Point,
    pub end: Point,
    pub material: MaterialType,
}

impl Wall {
    pub fn new(start: Point, end: Point, material: MaterialType) -> Self {
        Self {
            id: generate_id(),
            start,
            end,
            material,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_keeps_endpoints_in_order() {
        let wall = Wall::new(Point::new(100.0, 0.0), Point::new(0.0, 0.0), MaterialType::Tile);
        assert_eq!(wall.start, Point::new(100.0, 0.0));
        assert_eq!(wall.end, Point::new(0.0, 0.0));
        assert!(!wall.is_degenerate());
    }

    #[test]
    fn test_degenerate_wall_is_accepted() {
        let wall = Wall::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0), MaterialType::Wood);
        assert!(wall.is_degenerate());
    }
}
