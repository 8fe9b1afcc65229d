use egui::{Context, Pos2, Rect};

use crate::element::Point;

/// The rectangular region strokes are captured on and rendered into.
pub trait DrawingSurface {
    /// The rendering context used to schedule repaints, if one can be acquired.
    fn rendering_context(&self) -> Option<Context>;

    /// Where the surface currently sits, in device (screen) coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Convert a device position to surface space.
    fn to_surface(&self, device: Pos2) -> Point {
        let origin = self.bounding_rect().min;
        Point::new(device.x - origin.x, device.y - origin.y)
    }
}

/// Surface backed by an egui canvas region.
///
/// The host updates the rect each frame from the painter's allocated response.
#[derive(Debug, Clone)]
pub struct EguiSurface {
    ctx: Option<Context>,
    rect: Rect,
}

impl EguiSurface {
    pub fn new(ctx: Context, rect: Rect) -> Self {
        Self {
            ctx: Some(ctx),
            rect,
        }
    }

    /// A surface that is not attached to any egui context.
    pub fn detached(rect: Rect) -> Self {
        Self { ctx: None, rect }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

impl DrawingSurface for EguiSurface {
    fn rendering_context(&self) -> Option<Context> {
        self.ctx.clone()
    }

    fn bounding_rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_surface_is_relative_to_rect_origin() {
        let mut surface = EguiSurface::detached(Rect::from_min_size(
            egui::pos2(200.0, 50.0),
            egui::vec2(400.0, 300.0),
        ));
        assert_eq!(surface.to_surface(egui::pos2(210.0, 60.0)), Point::new(10.0, 10.0));

        // Moving the canvas does not move points already in surface space
        surface.set_rect(Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 300.0)));
        assert_eq!(surface.to_surface(egui::pos2(10.0, 10.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_detached_surface_has_no_context() {
        let surface = EguiSurface::detached(Rect::NOTHING);
        assert!(surface.rendering_context().is_none());
    }
}
