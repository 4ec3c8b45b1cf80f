use crate::config::EditorConfig;
use crate::editor::{Editor, EditorAction};
use crate::file_handler::FileHandler;
use crate::input::{InputHandler, route_event};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::tools::ToolSettings;

/// Storage key of the persisted tool settings
pub const SETTINGS_KEY: &str = "tool_settings";

pub struct PaintApp {
    // None only if the canvas could not be allocated
    editor: Option<Editor>,
    renderer: Renderer,
    input: InputHandler,
    files: FileHandler,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore the tool settings of the previous session, if any
        let settings: ToolSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, SETTINGS_KEY))
            .unwrap_or_default();
        Self::with_config(EditorConfig::default(), settings)
    }

    pub fn with_config(config: EditorConfig, settings: ToolSettings) -> Self {
        let editor = match Editor::new(config, settings) {
            Ok(editor) => Some(editor),
            Err(err) => {
                log::error!("Failed to create canvas: {err}");
                None
            }
        };
        Self {
            editor,
            renderer: Renderer::new(),
            input: InputHandler::default(),
            files: FileHandler::new(),
        }
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut Editor> {
        self.editor.as_mut()
    }

    pub fn apply(&mut self, action: EditorAction) {
        if let Some(editor) = &mut self.editor {
            editor.apply(action);
        }
    }

    /// Route this frame's pointer and keyboard input to the editor.
    ///
    /// `clip` is the viewport the canvas is shown through; presses outside it
    /// belong to whatever covers the canvas there.
    pub fn handle_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: egui::Rect,
        clip: egui::Rect,
    ) {
        self.input.set_canvas_rect(canvas_rect, clip);
        let keyboard_enabled = !ctx.wants_keyboard_input();
        let events = self.input.process_input(ctx, keyboard_enabled);
        if let Some(editor) = &mut self.editor {
            for event in &events {
                route_event(event, editor);
            }
        }
    }

    /// Draw the surface into `rect`.
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        if let Some(editor) = &self.editor {
            self.renderer.render(ctx, painter, rect, editor.surface());
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.files.preview_files_being_dropped(ctx);
        if !self.files.check_for_dropped_files(ctx) {
            return;
        }
        let Some(editor) = &mut self.editor else {
            return;
        };
        for bytes in self.files.take_image_bytes() {
            if let Err(err) = editor.load_background(&bytes) {
                log::error!("Failed to load background: {err}");
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(editor) = &self.editor {
            eframe::set_value(storage, SETTINGS_KEY, editor.settings());
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.handle_dropped_files(ctx);
    }
}
