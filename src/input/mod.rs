use egui::{Context, Key, Modifiers, Pos2, Rect};

mod router;
pub use router::{route_event, shortcut_action};

/// Input events in surface coordinates (origin at the canvas top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the primary button is held
    PointerMove { position: Pos2 },
    /// Primary button released after a canvas press
    PointerUp { position: Pos2 },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    canvas_rect: Rect,
    // Part of the canvas not scrolled out of view
    visible_rect: Rect,
    pointer_down: bool,
    last_pointer_pos: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            visible_rect: canvas_rect,
            pointer_down: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle and the clip it is shown through
    /// (e.g. if the window is resized or the canvas scrolled)
    pub fn set_canvas_rect(&mut self, rect: Rect, clip: Rect) {
        self.canvas_rect = rect;
        self.visible_rect = rect.intersect(clip);
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Whether a press at `pos` lands on the visible canvas
    pub fn accepts_press(&self, pos: Pos2) -> bool {
        self.visible_rect.contains(pos)
    }

    /// Screen position to surface position
    pub fn to_surface(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// Presses only count when they start on the visible canvas; the matching moves
    /// and release are reported even if the pointer leaves it.
    pub fn process_input(&mut self, ctx: &Context, keyboard_enabled: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            if input.pointer.primary_pressed() {
                if let Some(pos) = hover.filter(|pos| self.accepts_press(*pos)) {
                    self.pointer_down = true;
                    self.last_pointer_pos = Some(pos);
                    events.push(InputEvent::PointerDown {
                        position: self.to_surface(pos),
                    });
                }
            }

            if self.pointer_down {
                if let Some(pos) = hover {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove {
                            position: self.to_surface(pos),
                        });
                        self.last_pointer_pos = Some(pos);
                    }
                }
            }

            if input.pointer.primary_released() && self.pointer_down {
                self.pointer_down = false;
                let pos = input
                    .pointer
                    .latest_pos()
                    .or(self.last_pointer_pos)
                    .unwrap_or(self.canvas_rect.min);
                events.push(InputEvent::PointerUp {
                    position: self.to_surface(pos),
                });
                self.last_pointer_pos = None;
            }

            if keyboard_enabled {
                for event in &input.events {
                    if let egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } = event
                    {
                        events.push(InputEvent::KeyDown {
                            key: *key,
                            modifiers: *modifiers,
                        });
                    }
                }
            }
        });

        events
    }
}
