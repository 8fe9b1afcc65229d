use serde::{Deserialize, Serialize};

use crate::element::{Door, Element, Wall, Window};

/// The full state of one sketch.
///
/// List order is authoring order, which is also draw order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSet {
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
}

impl ElementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the list matching its type.
    pub fn add_element(&mut self, element: Element) {
        match element {
            Element::Wall(wall) => self.walls.push(wall),
            Element::Door(door) => self.doors.push(door),
            Element::Window(window) => self.windows.push(window),
        }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.walls.len() + self.doors.len() + self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, MaterialType, Point};

    #[test]
    fn test_add_element_routes_by_type() {
        let mut set = ElementSet::new();
        set.add_element(Element::Wall(factory::create_wall(
            Point::ORIGIN,
            Point::new(10.0, 0.0),
            MaterialType::Drywall,
        )));
        set.add_element(Element::Door(factory::create_door(Point::new(5.0, 5.0))));

        assert_eq!(set.walls().len(), 1);
        assert_eq!(set.doors().len(), 1);
        assert!(set.windows().is_empty());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut set = ElementSet::new();
        set.add_element(Element::Window(factory::create_window(Point::ORIGIN)));
        let snapshot = set.clone();

        set.windows[0].position = Point::new(99.0, 99.0);
        assert_eq!(snapshot.windows[0].position, Point::ORIGIN);
    }

    #[test]
    fn test_missing_lists_deserialize_empty() {
        let set: ElementSet = serde_json::from_str(r#"{"walls": []}"#).unwrap();
        assert!(set.is_empty());
    }
}
