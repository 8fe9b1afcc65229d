use egui::{Context, PointerButton, Pos2};

/// Pointer events the sketch tool reacts to, in device (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { position: Pos2 },
    /// Pointer moved (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released
    PointerUp { position: Pos2 },
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerMove { position }
            | InputEvent::PointerUp { position } => *position,
        }
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process raw egui input and generate our InputEvents
    ///
    /// Events are returned in press, move, release order so that a click
    /// delivered within one frame still forms a complete stroke.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;

            if pointer.button_pressed(PointerButton::Primary) {
                if let Some(position) = pointer.interact_pos() {
                    events.push(InputEvent::PointerDown { position });
                }
            }

            if let Some(position) = pointer.latest_pos() {
                if Some(position) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { position });
                }
                self.last_pointer_pos = Some(position);
            }

            if pointer.button_released(PointerButton::Primary) {
                // The pointer may have left the window; fall back to its last known spot
                if let Some(position) = pointer.latest_pos().or(self.last_pointer_pos) {
                    events.push(InputEvent::PointerUp { position });
                }
            }
        });

        events
    }
}
