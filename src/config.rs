use egui::Color32;
use std::path::PathBuf;

/// Number of committed snapshots kept for undo.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Fixed configuration of an editor instance.
///
/// Unlike [`crate::ToolSettings`] nothing here is persisted; the values are
/// chosen once when the editor is created.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Maximum length of the undo stack
    pub history_capacity: usize,
    /// Colour of the blank canvas, the eraser and the area behind a background image
    pub background: Color32,
    /// Stroke colour of the selection marquee
    pub marquee_color: Color32,
    /// Stroke width of the selection marquee
    pub marquee_width: f32,
    /// Directory that exported files are written to
    pub export_dir: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 600,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            background: Color32::WHITE,
            // rgba(0, 0, 255, 0.7)
            marquee_color: Color32::from_rgba_unmultiplied(0, 0, 255, 179),
            marquee_width: 2.0,
            export_dir: PathBuf::from("."),
        }
    }
}

impl EditorConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}
