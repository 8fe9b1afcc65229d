// src/renderer.rs
use egui::{Context, Painter, Pos2, Rect, Shape, Stroke};

use crate::config::SketchConfig;
use crate::document::ElementSet;
use crate::element::{Opening, Point, DOOR_SIZE, WINDOW_SIZE};
use crate::error::{SketchError, SketchResult};
use crate::state::DrawMode;
use crate::surface::DrawingSurface;

/// Draws the committed sketch plus the in-progress preview.
///
/// Output is kept as a display list of shapes in surface space. `paint` copies
/// it onto an egui painter each frame; nothing else reads or writes the sketch.
#[derive(Debug)]
pub struct Renderer {
    ctx: Context,
    shapes: Vec<Shape>,
    config: SketchConfig,
}

impl Renderer {
    /// Creates a renderer bound to the surface's rendering context
    ///
    /// Args:
    ///     surface (DrawingSurface): The surface to draw on
    ///     config (SketchConfig): Stroke widths and colours
    ///
    /// Returns:
    ///     SketchResult<Self>: `SurfaceUnavailable` if the surface has no context
    pub fn new(surface: &dyn DrawingSurface, config: &SketchConfig) -> SketchResult<Self> {
        let ctx = surface
            .rendering_context()
            .ok_or(SketchError::SurfaceUnavailable)?;
        Ok(Self {
            ctx,
            shapes: Vec::new(),
            config: config.clone(),
        })
    }

    /// Clear the display list and draw every committed element.
    pub fn redraw(&mut self, elements: &ElementSet) {
        self.shapes.clear();

        for wall in elements.walls() {
            let stroke = Stroke::new(self.config.wall_width, self.config.wall_color(wall.material));
            self.shapes
                .push(Shape::line_segment([wall.start.into(), wall.end.into()], stroke));
        }
        for door in elements.doors() {
            let stroke = Stroke::new(self.config.outline_width, self.config.door_color);
            self.shapes.push(opening_shape(door, stroke));
        }
        for window in elements.windows() {
            let stroke = Stroke::new(self.config.outline_width, self.config.window_color);
            self.shapes.push(opening_shape(window, stroke));
        }

        self.ctx.request_repaint();
    }

    /// Redraw the committed elements, then overlay the shape `mode` would commit
    /// if the stroke ended at `end`.
    pub fn draw_preview(&mut self, elements: &ElementSet, start: Point, end: Point, mode: DrawMode) {
        self.redraw(elements);

        let center: Pos2 = end.into();
        match mode {
            DrawMode::Wall => {
                let stroke = Stroke::new(self.config.wall_width, self.config.preview_color);
                self.shapes
                    .push(Shape::line_segment([start.into(), end.into()], stroke));
            }
            DrawMode::Door => {
                let stroke = Stroke::new(self.config.outline_width, self.config.preview_color);
                self.shapes.push(Shape::rect_stroke(
                    Rect::from_center_size(center, DOOR_SIZE),
                    0.0,
                    stroke,
                ));
            }
            DrawMode::Window => {
                let stroke = Stroke::new(self.config.outline_width, self.config.preview_color);
                self.shapes.push(Shape::rect_stroke(
                    Rect::from_center_size(center, WINDOW_SIZE),
                    0.0,
                    stroke,
                ));
            }
            DrawMode::Reading => {}
        }
    }

    /// The current display list, in surface coordinates.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Paint the display list into `rect`, the surface's current screen rectangle.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let offset = rect.min.to_vec2();
        let clipped = painter.with_clip_rect(rect);
        clipped.extend(self.shapes.iter().cloned().map(|mut shape| {
            shape.translate(offset);
            shape
        }));
    }
}

fn opening_shape(opening: &Opening, stroke: Stroke) -> Shape {
    if opening.rotation == 0.0 {
        Shape::rect_stroke(opening.rect(), 0.0, stroke)
    } else {
        Shape::closed_line(opening.corners().to_vec(), stroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, Element, MaterialType};
    use crate::surface::EguiSurface;

    fn test_renderer() -> Renderer {
        let surface = EguiSurface::new(
            egui::Context::default(),
            Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0)),
        );
        Renderer::new(&surface, &SketchConfig::default()).unwrap()
    }

    fn sample_set() -> ElementSet {
        let mut set = ElementSet::new();
        set.add_element(Element::Wall(factory::create_wall(
            Point::ORIGIN,
            Point::new(50.0, 0.0),
            MaterialType::Concrete,
        )));
        set.add_element(Element::Door(factory::create_door(Point::new(20.0, 20.0))));
        set.add_element(Element::Window(factory::create_window(Point::new(60.0, 60.0))));
        set
    }

    #[test]
    fn test_renderer_requires_context() {
        let surface = EguiSurface::detached(Rect::NOTHING);
        let result = Renderer::new(&surface, &SketchConfig::default());
        assert!(matches!(result, Err(SketchError::SurfaceUnavailable)));
    }

    #[test]
    fn test_redraw_draws_one_shape_per_element() {
        let mut renderer = test_renderer();
        renderer.redraw(&sample_set());
        assert_eq!(renderer.shapes().len(), 3);
        assert!(matches!(renderer.shapes()[0], Shape::LineSegment { .. }));
        match &renderer.shapes()[1] {
            Shape::Rect(rect) => {
                assert_eq!(rect.rect, Rect::from_center_size(egui::pos2(20.0, 20.0), DOOR_SIZE))
            }
            other => panic!("expected door rect, got {:?}", other),
        }
    }

    #[test]
    fn test_redraw_clears_previous_frame() {
        let mut renderer = test_renderer();
        renderer.redraw(&sample_set());
        renderer.redraw(&ElementSet::new());
        assert!(renderer.shapes().is_empty());
    }

    #[test]
    fn test_preview_does_not_accumulate() {
        let mut renderer = test_renderer();
        let set = sample_set();
        for x in 0..5 {
            renderer.draw_preview(&set, Point::ORIGIN, Point::new(x as f32, 10.0), DrawMode::Wall);
        }
        assert_eq!(renderer.shapes().len(), set.len() + 1);
        match renderer.shapes().last() {
            Some(Shape::LineSegment { points, .. }) => {
                assert_eq!(points[0], egui::pos2(0.0, 0.0));
                assert_eq!(points[1], egui::pos2(4.0, 10.0));
            }
            other => panic!("expected preview line, got {:?}", other),
        }
    }

    #[test]
    fn test_window_preview_is_centered_on_pointer() {
        let mut renderer = test_renderer();
        renderer.draw_preview(
            &ElementSet::new(),
            Point::ORIGIN,
            Point::new(50.0, 50.0),
            DrawMode::Window,
        );
        match renderer.shapes() {
            [Shape::Rect(rect)] => {
                assert_eq!(rect.rect, Rect::from_center_size(egui::pos2(50.0, 50.0), WINDOW_SIZE))
            }
            other => panic!("expected a single window rect, got {:?}", other),
        }
    }

    #[test]
    fn test_reading_preview_only_redraws() {
        let mut renderer = test_renderer();
        renderer.draw_preview(&sample_set(), Point::ORIGIN, Point::new(5.0, 5.0), DrawMode::Reading);
        assert_eq!(renderer.shapes().len(), 3);
    }

    #[test]
    fn test_rotated_opening_is_drawn_as_outline() {
        let mut renderer = test_renderer();
        let mut set = ElementSet::new();
        let mut door = factory::create_door(Point::new(10.0, 10.0));
        door.rotation = 30.0;
        set.add_element(Element::Door(door));

        renderer.redraw(&set);
        assert!(matches!(renderer.shapes(), [Shape::Path(_)]));
    }
}
