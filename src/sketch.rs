use egui::{Context, Painter, Pos2};

use crate::config::SketchConfig;
use crate::document::ElementSet;
use crate::element::MaterialType;
use crate::error::SketchResult;
use crate::history::SnapshotHistory;
use crate::id_generator::ElementId;
use crate::input::{InputEvent, InputHandler};
use crate::renderer::Renderer;
use crate::state::{DrawMode, EditorState};
use crate::surface::DrawingSurface;
use crate::tools::{DrawElementTool, ToolContext};

/// One floor-plan sketching session on one drawing surface.
///
/// The host owns the instance: it builds it with [`SketchTool::new`], feeds it
/// pointer input, reads or replaces the sketch through [`SketchTool::elements`]
/// and [`SketchTool::load_elements`], and calls [`SketchTool::destroy`] last.
///
/// # Example
///
/// ```
/// use floorplan_sketch::{DrawMode, EguiSurface, SketchTool};
///
/// let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 300.0));
/// let surface = EguiSurface::new(egui::Context::default(), rect);
/// let mut tool = SketchTool::new(surface).unwrap();
///
/// tool.set_mode(DrawMode::Wall);
/// tool.on_press_start(egui::pos2(0.0, 0.0));
/// tool.on_press_end(egui::pos2(100.0, 0.0));
/// assert_eq!(tool.elements().walls.len(), 1);
/// ```
#[derive(Debug)]
pub struct SketchTool<S: DrawingSurface> {
    surface: S,
    elements: ElementSet,
    state: EditorState,
    history: SnapshotHistory,
    renderer: Renderer,
    draw_tool: DrawElementTool,
    /// Pointer subscription; `None` once destroyed
    input: Option<InputHandler>,
}

impl<S: DrawingSurface> SketchTool<S> {
    /// Attach a new, empty sketch to `surface` with the default configuration.
    ///
    /// Fails with `SurfaceUnavailable` if the surface has no rendering context.
    pub fn new(surface: S) -> SketchResult<Self> {
        Self::with_config(surface, SketchConfig::default())
    }

    pub fn with_config(surface: S, config: SketchConfig) -> SketchResult<Self> {
        let mut renderer = Renderer::new(&surface, &config)?;
        let elements = ElementSet::new();
        renderer.redraw(&elements);
        log::info!("Sketch tool attached (max history: {:?})", config.max_history);

        Ok(Self {
            surface,
            elements,
            state: EditorState::new(),
            history: SnapshotHistory::with_max_depth(config.max_history),
            renderer,
            draw_tool: DrawElementTool::new(),
            input: Some(InputHandler::new()),
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to update its rect after a layout change.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn mode(&self) -> DrawMode {
        self.state.mode()
    }

    pub fn set_mode(&mut self, mode: DrawMode) {
        self.state.set_mode(mode);
    }

    pub fn material(&self) -> MaterialType {
        self.state.material()
    }

    pub fn set_material(&mut self, material: MaterialType) {
        self.state.set_material(material);
    }

    pub fn is_drawing(&self) -> bool {
        self.draw_tool.is_drawing()
    }

    pub fn is_destroyed(&self) -> bool {
        self.input.is_none()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Pump this frame's pointer input from `ctx` into the tool.
    pub fn update(&mut self, ctx: &Context) {
        let events = match &mut self.input {
            Some(handler) => handler.process_input(ctx),
            None => return,
        };
        let bounds = self.surface.bounding_rect();
        for event in events {
            // Strokes may only start on the surface, but may end anywhere
            if let InputEvent::PointerDown { position } = event {
                if !bounds.contains(position) {
                    continue;
                }
            }
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.on_press_start(position),
            InputEvent::PointerMove { position } => self.on_press_move(position),
            InputEvent::PointerUp { position } => {
                self.on_press_end(position);
            }
        }
    }

    /// Start a stroke at a device position.
    pub fn on_press_start(&mut self, device: Pos2) {
        if self.is_destroyed() {
            return;
        }
        let pos = self.surface.to_surface(device);
        self.draw_tool.on_pointer_down(pos);
    }

    /// Preview the active stroke up to a device position.
    pub fn on_press_move(&mut self, device: Pos2) {
        if self.is_destroyed() || !self.draw_tool.is_drawing() {
            return;
        }
        let pos = self.surface.to_surface(device);
        let mut ctx = ToolContext {
            elements: &mut self.elements,
            history: &mut self.history,
            renderer: &mut self.renderer,
            state: &self.state,
        };
        self.draw_tool.on_pointer_move(pos, &mut ctx);
    }

    /// Finish the active stroke at a device position, returning the new element's id.
    pub fn on_press_end(&mut self, device: Pos2) -> Option<ElementId> {
        if self.is_destroyed() || !self.draw_tool.is_drawing() {
            return None;
        }
        let pos = self.surface.to_surface(device);
        let mut ctx = ToolContext {
            elements: &mut self.elements,
            history: &mut self.history,
            renderer: &mut self.renderer,
            state: &self.state,
        };
        self.draw_tool.on_pointer_up(pos, &mut ctx)
    }

    /// Restore the sketch as it was before the most recent commit.
    ///
    /// Does nothing when there is nothing to undo.
    pub fn undo(&mut self) {
        let Some(previous) = self.history.undo() else {
            log::debug!("Nothing to undo");
            return;
        };
        self.elements = previous;
        self.renderer.redraw(&self.elements);
        log::debug!("Undo: {} snapshot(s) left", self.history.len());
    }

    /// The live sketch. Callers get a shared borrow; clone it to keep a copy.
    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    /// Replace the whole sketch. Undo history is discarded.
    pub fn load_elements(&mut self, elements: ElementSet) {
        log::info!("Loaded sketch with {} element(s)", elements.len());
        self.draw_tool.cancel();
        self.elements = elements;
        self.history.clear();
        self.renderer.redraw(&self.elements);
    }

    /// Stop listening for pointer input. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.input.take().is_some() {
            self.draw_tool.cancel();
            log::info!("Sketch tool detached");
        }
    }

    /// Paint the current frame onto `painter` at the surface's rect.
    pub fn paint(&self, painter: &Painter) {
        self.renderer.paint(painter, self.surface.bounding_rect());
    }
}
