use egui::Color32;
use serde::{Deserialize, Serialize};

mod draw_stroke_tool;
pub use draw_stroke_tool::FreehandStroke;

mod shape_tool;
pub use shape_tool::{ShapeDrag, ShapeKind};

mod selection_tool;
pub use selection_tool::{SelectionBuffer, SelectionRegion};

/// The tool that decides what a press on the canvas does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Draw,
    Eraser,
    Rectangle,
    Circle,
    Select,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Draw,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Select,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Draw => "Draw",
            Tool::Eraser => "Eraser",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Select => "Select",
        }
    }

    /// The shape drawn by this tool, if it is a shape tool
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            _ => None,
        }
    }
}

// Factory function to look a tool up by its display name
pub fn new_tool(name: &str) -> Option<Tool> {
    Tool::ALL.into_iter().find(|tool| tool.name() == name)
}

/// User-selected drawing parameters. Persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: Tool,
    pub color: Color32,
    pub brush_size: f32,
    /// Fill shapes instead of outlining them
    pub fill_shapes: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Draw,
            color: Color32::BLACK,
            brush_size: 5.0,
            fill_shapes: false,
        }
    }
}

impl ToolSettings {
    pub const MIN_BRUSH_SIZE: f32 = 1.0;
    pub const MAX_BRUSH_SIZE: f32 = 50.0;

    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = size.clamp(Self::MIN_BRUSH_SIZE, Self::MAX_BRUSH_SIZE);
    }

    pub fn toggle_fill(&mut self) {
        self.fill_shapes = !self.fill_shapes;
    }
}
