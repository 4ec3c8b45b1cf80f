use crate::surface::Surface;
use eframe::egui::{self, Color32, Rect, TextureHandle, TextureOptions, pos2};

/// Displays the surface as an egui texture.
///
/// The texture is only re-uploaded when the surface generation changes.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    uploaded_generation: Option<u64>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next render will upload new pixels
    pub fn needs_upload(&self, surface: &Surface) -> bool {
        self.texture.is_none() || self.uploaded_generation != Some(surface.generation())
    }

    fn sync_texture(&mut self, ctx: &egui::Context, surface: &Surface) -> &TextureHandle {
        if self.needs_upload(surface) {
            let image = surface.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_generation = Some(surface.generation());
        }
        self.texture.get_or_insert_with(|| {
            ctx.load_texture("canvas", surface.to_color_image(), TextureOptions::NEAREST)
        })
    }

    /// Paint the surface into `rect` at 1:1 scale.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        surface: &Surface,
    ) {
        let texture = self.sync_texture(ctx, surface);
        painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::GRAY));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uploads_once_per_generation() {
        let ctx = egui::Context::default();
        let mut surface = Surface::new(16, 16).unwrap();
        surface.fill_solid(Color32::WHITE);
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(16.0, 16.0));
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);

        let mut renderer = Renderer::new();
        assert!(renderer.needs_upload(&surface));
        renderer.render(&ctx, &painter, rect, &surface);
        assert!(!renderer.needs_upload(&surface));

        surface.fill_solid(Color32::BLACK);
        assert!(renderer.needs_upload(&surface));
    }
}
