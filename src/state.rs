use crate::snapshot::Snapshot;
use crate::tools::{FreehandStroke, SelectionBuffer, SelectionRegion, ShapeDrag};
use egui::Vec2;

/// What the pointer is currently doing on the canvas.
///
/// Transitions are driven only by press, move and release:
/// ```text
///           press (draw/eraser)        release
///   Idle ───────────────────────► Drawing ─────────► Idle
///   Idle ─ press (rect/circle) ─► ShapePreview ────► Idle
///   Idle ─ press on image ──────► ImageDrag ───────► Idle
///   Idle ─ press (select) ──────► Selecting ───────► PendingPaste (or Idle if empty)
///   PendingPaste ─ press ────────────────────────────► Idle (pasted)
/// ```
#[derive(Debug, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// Painting straight onto the surface
    Drawing(FreehandStroke),
    /// Dragging out a rectangle or circle over the last committed state
    ShapePreview(ShapeDrag),
    /// Moving the background image; the grabbed point follows the pointer
    ImageDrag { grab_offset: Vec2 },
    /// Dragging a selection marquee over `base`
    Selecting {
        region: SelectionRegion,
        /// Surface as it was at press, without the marquee
        base: Snapshot,
    },
    /// A cut region waiting for the next press to be pasted
    PendingPaste(SelectionBuffer),
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing(_) => "Drawing",
            Self::ShapePreview(_) => "ShapePreview",
            Self::ImageDrag { .. } => "ImageDrag",
            Self::Selecting { .. } => "Selecting",
            Self::PendingPaste(_) => "PendingPaste",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True between a press and its release
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle | Self::PendingPaste(_))
    }

    pub fn pending_paste(&self) -> Option<&SelectionBuffer> {
        match self {
            Self::PendingPaste(buffer) => Some(buffer),
            _ => None,
        }
    }
}
