use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(editor) = app.editor() else {
            ui.heading("The canvas could not be created. See the log for details.");
            return;
        };
        let size = egui::vec2(editor.surface().width() as f32, editor.surface().height() as f32);

        egui::ScrollArea::both().show(ui, |ui| {
            let (canvas_rect, _response) = ui.allocate_exact_size(size, egui::Sense::drag());

            // Handle input
            app.handle_input(ctx, canvas_rect, ui.clip_rect());

            // Render the canvas
            app.render(ctx, ui.painter(), canvas_rect);
        });
    });
}
