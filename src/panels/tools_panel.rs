use crate::PaintApp;
use crate::editor::EditorAction;
use crate::export::ExportFormat;
use crate::tools::{Tool, ToolSettings};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let mut action = None;
            let Some(editor) = app.editor_mut() else {
                return;
            };

            // Create selectable buttons for each tool
            let active_tool = editor.settings().tool;
            for tool in Tool::ALL {
                if ui.selectable_label(active_tool == tool, tool.name()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    editor.set_tool(tool);
                }
            }
            ui.separator();

            let settings = editor.settings_mut();
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut settings.color,
                    egui::color_picker::Alpha::Opaque,
                );
            });

            ui.horizontal(|ui| {
                ui.label("Brush size:");
                let mut size = settings.brush_size;
                ui.add(egui::Slider::new(
                    &mut size,
                    ToolSettings::MIN_BRUSH_SIZE..=ToolSettings::MAX_BRUSH_SIZE,
                ));
                settings.set_brush_size(size);
            });

            let fill_label = if settings.fill_shapes { "Fill: On" } else { "Fill: Off" };
            if ui.button(fill_label).clicked() {
                settings.toggle_fill();
            }
            ui.separator();

            // Undo/Redo section
            let history = editor.history();
            ui.horizontal(|ui| {
                if ui.add_enabled(history.can_undo(), egui::Button::new("Undo")).clicked() {
                    action = Some(EditorAction::Undo);
                }
                if ui.add_enabled(history.can_redo(), egui::Button::new("Redo")).clicked() {
                    action = Some(EditorAction::Redo);
                }
            });
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_len()));
                ui.label(format!("Redo stack size: {}", history.redo_len()));
            });
            ui.separator();

            if ui.button("Clear").clicked() {
                action = Some(EditorAction::Clear);
            }
            ui.horizontal(|ui| {
                if ui.button("Save PNG").clicked() {
                    action = Some(EditorAction::Save(ExportFormat::Png));
                }
                if ui.button("Export PDF").clicked() {
                    action = Some(EditorAction::Save(ExportFormat::Pdf));
                }
            });
            ui.separator();

            ui.label(format!("State: {}", editor.state().name()));
            if let Some(buffer) = editor.state().pending_paste() {
                ui.label(format!(
                    "Click to paste {}x{} selection",
                    buffer.width(),
                    buffer.height()
                ));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                if ui.button("Load background…").clicked() {
                    if let Some(bytes) = crate::file_handler::pick_image_file() {
                        if let Err(err) = editor.load_background(&bytes) {
                            log::error!("Failed to load background: {err}");
                        }
                    }
                }
            }
            ui.small("Drop an image file to set the background.");

            if let Some(action) = action {
                editor.apply(action);
            }
        });
}
