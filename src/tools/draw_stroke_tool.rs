use crate::surface::Surface;
use egui::{Color32, Pos2};

/// An in-progress freehand stroke.
///
/// There is no preview: every move paints a permanent segment straight onto
/// the surface. Draw and eraser share this path and differ only by colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreehandStroke {
    head: Pos2,
    color: Color32,
    width: f32,
}

impl FreehandStroke {
    /// Start a stroke at the press point. Nothing is painted yet.
    pub fn begin(head: Pos2, color: Color32, width: f32) -> Self {
        Self { head, color, width }
    }

    /// Paint a segment from the head to `pos` and advance the head.
    pub fn extend_to(&mut self, pos: Pos2, surface: &mut Surface) {
        surface.stroke_segment(self.head, pos, self.color, self.width);
        self.head = pos;
    }

    pub fn head(&self) -> Pos2 {
        self.head
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
