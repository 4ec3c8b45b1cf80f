use crate::background::BackgroundImage;
use crate::config::EditorConfig;
use crate::error::SketchResult;
use crate::export::{self, ExportFormat};
use crate::history::History;
use crate::preview;
use crate::state::EditorState;
use crate::surface::Surface;
use crate::tools::{FreehandStroke, SelectionRegion, ShapeDrag, Tool, ToolSettings};
use egui::Pos2;
use std::path::PathBuf;

/// Editor-level actions triggered by buttons or keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Undo,
    Redo,
    /// Fill the canvas with the current colour and commit
    Clear,
    Save(ExportFormat),
}

/// All state of one drawing session.
///
/// Owns the surface, its history, the interaction state and the loaded
/// background image. Failures inside are logged and treated as no-ops.
pub struct Editor {
    config: EditorConfig,
    surface: Surface,
    history: History,
    state: EditorState,
    settings: ToolSettings,
    background: Option<BackgroundImage>,
}

impl Editor {
    /// Create an editor with a blank canvas committed as the first state.
    pub fn new(config: EditorConfig, settings: ToolSettings) -> SketchResult<Self> {
        let mut surface = Surface::new(config.width, config.height)?;
        surface.fill_solid(config.background);
        let mut history = History::new(config.history_capacity);
        history.commit(&surface)?;
        log::info!("Editor initialized: {}x{}", config.width, config.height);

        Ok(Self {
            config,
            surface,
            history,
            state: EditorState::Idle,
            settings,
            background: None,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.settings.tool != tool {
            log::info!("Tool changed: {} -> {}", self.settings.tool.name(), tool.name());
            self.settings.tool = tool;
        }
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    fn commit(&mut self) {
        if let Err(err) = self.history.commit(&self.surface) {
            log::error!("Failed to commit snapshot: {err}");
        }
    }

    /// Pointer pressed at `pos` (surface coordinates).
    pub fn pointer_down(&mut self, pos: Pos2) {
        let previous = std::mem::take(&mut self.state);
        match previous {
            EditorState::PendingPaste(buffer) => {
                // The press is spent on the paste.
                buffer.paste(&mut self.surface, pos);
                return;
            }
            EditorState::Idle => {}
            interrupted => {
                log::debug!("Press during {}; finishing it first", interrupted.name());
                self.finish(interrupted, None);
                if let EditorState::PendingPaste(buffer) = std::mem::take(&mut self.state) {
                    buffer.paste(&mut self.surface, pos);
                    return;
                }
            }
        }

        if let Some(background) = &self.background {
            if background.contains(pos) {
                self.state = EditorState::ImageDrag {
                    grab_offset: background.grab_offset(pos),
                };
                return;
            }
        }

        let settings = self.settings.clone();
        self.state = match settings.tool {
            Tool::Draw => EditorState::Drawing(FreehandStroke::begin(
                pos,
                settings.color,
                settings.brush_size,
            )),
            Tool::Eraser => EditorState::Drawing(FreehandStroke::begin(
                pos,
                self.config.background,
                settings.brush_size,
            )),
            Tool::Rectangle | Tool::Circle => {
                let Some(kind) = settings.tool.shape_kind() else {
                    return;
                };
                let drag = ShapeDrag::begin(
                    kind,
                    pos,
                    settings.fill_shapes,
                    settings.color,
                    settings.brush_size,
                );
                // Baseline the preview restores on every move
                self.commit();
                EditorState::ShapePreview(drag)
            }
            Tool::Select => match self.surface.snapshot() {
                Ok(base) => EditorState::Selecting {
                    region: SelectionRegion::begin(pos),
                    base,
                },
                Err(err) => {
                    log::error!("Failed to capture selection base: {err}");
                    EditorState::Idle
                }
            },
        };
    }

    /// Pointer moved to `pos`. Only has an effect between press and release.
    pub fn pointer_move(&mut self, pos: Pos2) {
        let result = match &mut self.state {
            EditorState::Idle | EditorState::PendingPaste(_) => Ok(()),
            EditorState::Drawing(stroke) => {
                stroke.extend_to(pos, &mut self.surface);
                Ok(())
            }
            EditorState::ShapePreview(drag) => {
                drag.current = pos;
                preview::render_shape_preview(&mut self.surface, self.history.current(), drag)
            }
            EditorState::ImageDrag { grab_offset } => {
                if let Some(background) = &mut self.background {
                    background.drag_to(pos, *grab_offset);
                    self.surface.compose_background(
                        self.config.background,
                        background.pixels(),
                        background.position(),
                    );
                }
                Ok(())
            }
            EditorState::Selecting { region, base } => {
                region.update(pos);
                preview::render_marquee(
                    &mut self.surface,
                    base,
                    region,
                    self.config.marquee_color,
                    self.config.marquee_width,
                )
            }
        };
        if let Err(err) = result {
            log::error!("Preview failed: {err}");
        }
    }

    /// Pointer released at `pos`.
    pub fn pointer_up(&mut self, pos: Pos2) {
        let state = std::mem::take(&mut self.state);
        self.finish(state, Some(pos));
    }

    /// Complete an interaction, at `at` or wherever it last was.
    fn finish(&mut self, state: EditorState, at: Option<Pos2>) {
        match state {
            EditorState::Idle => {}
            EditorState::Drawing(_) => self.commit(),
            EditorState::ShapePreview(mut drag) => {
                if let Some(at) = at {
                    drag.current = at;
                }
                if let Some(base) = self.history.current() {
                    if let Err(err) = self.surface.restore(base) {
                        log::error!("Failed to restore shape baseline: {err}");
                    }
                }
                drag.draw(&mut self.surface);
                self.commit();
            }
            EditorState::ImageDrag { .. } => {}
            EditorState::Selecting { mut region, base } => {
                if let Some(at) = at {
                    region.update(at);
                }
                if let Err(err) = self.surface.restore(&base) {
                    log::error!("Failed to remove marquee: {err}");
                }
                if let Some(buffer) = region.cut(&mut self.surface) {
                    self.state = EditorState::PendingPaste(buffer);
                }
            }
            EditorState::PendingPaste(buffer) => {
                // A stray release does not consume the buffer.
                self.state = EditorState::PendingPaste(buffer);
            }
        }
    }

    pub fn undo(&mut self) {
        if let Err(err) = self.history.undo(&mut self.surface) {
            log::error!("Undo failed: {err}");
        }
    }

    pub fn redo(&mut self) {
        if let Err(err) = self.history.redo(&mut self.surface) {
            log::error!("Redo failed: {err}");
        }
    }

    /// Fill the canvas with the currently selected colour and commit.
    pub fn clear_canvas(&mut self) {
        self.surface.fill_solid(self.settings.color);
        self.commit();
    }

    /// Place `image` at the top-left corner, compose it and commit.
    pub fn set_background(&mut self, image: BackgroundImage) {
        let mut image = image;
        image.set_position(Pos2::ZERO);
        self.surface
            .compose_background(self.config.background, image.pixels(), image.position());
        self.background = Some(image);
        self.commit();
    }

    /// Decode `bytes` as an image and use it as the background.
    pub fn load_background(&mut self, bytes: &[u8]) -> SketchResult<()> {
        let image = BackgroundImage::from_bytes(bytes)?;
        self.set_background(image);
        Ok(())
    }

    /// Encode the current surface without changing anything.
    pub fn export(&self, format: ExportFormat) -> SketchResult<Vec<u8>> {
        export::export(&self.surface, format)
    }

    /// Export into the configured directory.
    pub fn save(&self, format: ExportFormat) -> SketchResult<PathBuf> {
        export::save_to_dir(&self.surface, format, &self.config.export_dir)
    }

    /// Save natively, or download in the browser.
    #[cfg(not(target_arch = "wasm32"))]
    fn deliver(&self, format: ExportFormat) -> SketchResult<()> {
        self.save(format).map(|_| ())
    }

    #[cfg(target_arch = "wasm32")]
    fn deliver(&self, format: ExportFormat) -> SketchResult<()> {
        export::download(&self.surface, format)
    }

    pub fn apply(&mut self, action: EditorAction) {
        log::debug!("Applying {action:?}");
        match action {
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::Clear => self.clear_canvas(),
            EditorAction::Save(format) => {
                if let Err(err) = self.deliver(format) {
                    log::error!("Failed to save {}: {err}", format.file_name());
                }
            }
        }
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("surface", &self.surface)
            .field("history", &self.history)
            .field("state", &self.state.name())
            .field("tool", &self.settings.tool)
            .finish_non_exhaustive()
    }
}
