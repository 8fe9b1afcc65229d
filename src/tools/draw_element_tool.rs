use crate::document::ElementSet;
use crate::element::{factory, Element, Point};
use crate::history::SnapshotHistory;
use crate::id_generator::ElementId;
use crate::renderer::Renderer;
use crate::state::EditorState;

/// Everything a stroke touches while it is being drawn or committed.
pub struct ToolContext<'a> {
    pub elements: &'a mut ElementSet,
    pub history: &'a mut SnapshotHistory,
    pub renderer: &'a mut Renderer,
    pub state: &'a EditorState,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawElementState {
    #[default]
    Idle,
    Drawing {
        start: Point,
    },
}

/// Turns one press, move*, release sequence into at most one committed element.
///
/// All positions are already in surface space.
#[derive(Debug, Clone, Default)]
pub struct DrawElementTool {
    state: DrawElementState,
}

impl DrawElementTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawElementState::Drawing { .. })
    }

    pub fn start_point(&self) -> Option<Point> {
        match self.state {
            DrawElementState::Drawing { start } => Some(start),
            DrawElementState::Idle => None,
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        match self.state {
            DrawElementState::Idle => "Idle",
            DrawElementState::Drawing { .. } => "Drawing",
        }
    }

    /// Begin a stroke at `pos`. A press during an active stroke is ignored.
    pub fn on_pointer_down(&mut self, pos: Point) {
        if self.is_drawing() {
            log::debug!("Ignoring press at {:?}: stroke already in progress", pos);
            return;
        }
        log::debug!("Stroke started at {:?}", pos);
        self.state = DrawElementState::Drawing { start: pos };
    }

    /// Show a preview from the stroke start to `pos`. Never commits anything.
    pub fn on_pointer_move(&mut self, pos: Point, ctx: &mut ToolContext<'_>) {
        let DrawElementState::Drawing { start } = self.state else {
            return;
        };
        log::trace!("Preview {:?} -> {:?}", start, pos);
        ctx.renderer
            .draw_preview(ctx.elements, start, pos, ctx.state.mode());
    }

    /// Finish the stroke at `pos` and commit the element it stands for.
    ///
    /// Returns the id of the new element, or `None` if no stroke was active or
    /// the mode produces no element.
    pub fn on_pointer_up(&mut self, pos: Point, ctx: &mut ToolContext<'_>) -> Option<ElementId> {
        let DrawElementState::Drawing { start } = self.state else {
            return None;
        };
        self.state = DrawElementState::Idle;

        let mode = ctx.state.mode();
        let committed = match factory::create_element(mode, ctx.state.material(), start, pos) {
            Some(element) => {
                let id = element.id();
                ctx.history.snapshot(ctx.elements);
                log::debug!("Committed {} {} ({:?} -> {:?})", element.element_type(), id, start, pos);
                if let Element::Wall(wall) = &element {
                    if wall.is_degenerate() {
                        log::debug!("Wall {} has zero length", id);
                    }
                }
                ctx.elements.add_element(element);
                Some(id)
            }
            None => {
                log::debug!("{} mode has no element type; stroke discarded", mode.name());
                None
            }
        };

        // Always redraw so the preview overlay disappears
        ctx.renderer.redraw(ctx.elements);
        committed
    }

    /// Abandon any stroke in progress without committing it.
    pub fn cancel(&mut self) {
        if self.is_drawing() {
            log::debug!("Stroke abandoned");
        }
        self.state = DrawElementState::Idle;
    }
}
