use crate::error::{SketchError, SketchResult};
use crate::geometry::{PixelRect, SignedRect};
use crate::snapshot::Snapshot;
use egui::{Color32, Pos2};
use tiny_skia::{
    FillRule, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8, Stroke,
    Transform,
};

/// The raster canvas. Everything the user sees lives in this buffer.
///
/// Drawing operations mutate it in place; history keeps encoded copies
/// (see [`Snapshot`]) and hands them back through [`Surface::restore`].
pub struct Surface {
    pixmap: Pixmap,
    generation: u64,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> SketchResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SketchError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            generation: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Bumped on every mutation so the host only re-uploads changed frames.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Colour of a single pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        // tiny-skia only checks the flat index, so x past the edge would wrap
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap
            .pixel(x, y)
            .map(|p| Color32::from_rgba_premultiplied(p.red(), p.green(), p.blue(), p.alpha()))
    }

    /// Capture the whole surface as a snapshot.
    pub fn snapshot(&self) -> SketchResult<Snapshot> {
        Snapshot::capture(&self.pixmap)
    }

    /// Replace the whole buffer with the decoded snapshot.
    ///
    /// Decoding finishes before this returns, so consecutive restores always
    /// apply in call order. On a decode failure the surface is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> SketchResult<()> {
        let decoded = snapshot.decode()?;
        if decoded.width() == self.width() && decoded.height() == self.height() {
            self.pixmap = decoded;
        } else {
            log::warn!(
                "Restoring {}x{} snapshot onto {}x{} surface",
                decoded.width(),
                decoded.height(),
                self.width(),
                self.height()
            );
            self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
            let size = (decoded.width(), decoded.height());
            blit(&decoded, (0, 0), &mut self.pixmap, (0, 0), size);
        }
        self.touch();
        Ok(())
    }

    /// Make every pixel fully transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        self.touch();
    }

    /// Paint the whole surface with one colour.
    pub fn fill_solid(&mut self, color: Color32) {
        self.pixmap.fill(to_skia(color));
        self.touch();
    }

    /// Fill with `fill`, then draw `image` at `position` at its native size.
    pub fn compose_background(&mut self, fill: Color32, image: &Pixmap, position: Pos2) {
        self.pixmap.fill(to_skia(fill));
        self.pixmap.draw_pixmap(
            position.x.round() as i32,
            position.y.round() as i32,
            image.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        self.touch();
    }

    /// Straight line with round caps.
    pub fn stroke_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        self.touch();
    }

    pub fn fill_rect(&mut self, rect: SignedRect, color: Color32) {
        if rect.is_empty() {
            return;
        }
        let Some(rect) = to_skia_rect(rect) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint(color), Transform::identity(), None);
        self.touch();
    }

    /// Outline of `rect`. A rectangle with one zero extent strokes as a line.
    pub fn stroke_rect(&mut self, rect: SignedRect, color: Color32, width: f32) {
        if rect.width() == 0.0 && rect.height() == 0.0 {
            return;
        }
        let Some(rect) = to_skia_rect(rect) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        self.touch();
    }

    pub fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        self.touch();
    }

    pub fn stroke_circle(&mut self, center: Pos2, radius: f32, color: Color32, width: f32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        self.touch();
    }

    /// Copy the pixels under `rect` into a new pixmap of exactly that size.
    /// Parts of `rect` outside the surface come back transparent.
    pub fn extract(&self, rect: PixelRect) -> Option<Pixmap> {
        let mut out = Pixmap::new(rect.width, rect.height)?;
        blit(
            &self.pixmap,
            (rect.x, rect.y),
            &mut out,
            (0, 0),
            (rect.width, rect.height),
        );
        Some(out)
    }

    /// Set the pixels under `rect` to fully transparent.
    pub fn clear_rect(&mut self, rect: PixelRect) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        let pixels = self.pixmap.pixels_mut();
        for y in rect.y.max(0)..(rect.y + rect.height as i32).min(h) {
            for x in rect.x.max(0)..(rect.x + rect.width as i32).min(w) {
                pixels[(y * w + x) as usize] = PremultipliedColorU8::TRANSPARENT;
            }
        }
        self.touch();
    }

    /// Overwrite pixels with `region` placed at (`x`, `y`), without blending.
    pub fn put(&mut self, region: &Pixmap, x: i32, y: i32) {
        let size = (region.width(), region.height());
        blit(region, (0, 0), &mut self.pixmap, (x, y), size);
        self.touch();
    }

    /// PNG encoding of the current contents.
    pub fn encode_png(&self) -> SketchResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| SketchError::Encode(e.to_string()))
    }

    /// Premultiplied copy for uploading as an egui texture.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_premultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixmap.data(),
        )
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("generation", &self.generation)
            .finish()
    }
}

pub(crate) fn to_skia(color: Color32) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn paint(color: Color32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia(color));
    paint.anti_alias = true;
    paint
}

fn to_skia_rect(rect: SignedRect) -> Option<tiny_skia::Rect> {
    let rect = rect.normalized();
    tiny_skia::Rect::from_ltrb(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

/// Copy a `size` block of pixels between pixmaps, clipping against both.
fn blit(
    src: &Pixmap,
    src_origin: (i32, i32),
    dst: &mut Pixmap,
    dst_origin: (i32, i32),
    size: (u32, u32),
) {
    let (sw, sh) = (src.width() as i32, src.height() as i32);
    let (dw, dh) = (dst.width() as i32, dst.height() as i32);
    let src_pixels = src.pixels();
    let dst_pixels = dst.pixels_mut();

    for row in 0..size.1 as i32 {
        let (sy, dy) = (src_origin.1 + row, dst_origin.1 + row);
        if sy < 0 || sy >= sh || dy < 0 || dy >= dh {
            continue;
        }
        for col in 0..size.0 as i32 {
            let (sx, dx) = (src_origin.0 + col, dst_origin.0 + col);
            if sx < 0 || sx >= sw || dx < 0 || dx >= dw {
                continue;
            }
            dst_pixels[(dy * dw + dx) as usize] = src_pixels[(sy * sw + sx) as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = Surface::new(10, 10).unwrap();
        assert_eq!(surface.pixel(5, 5), Some(Color32::TRANSPARENT));
        assert_eq!(surface.pixel(10, 0), None);
    }

    #[test]
    fn test_pixel_past_right_edge_does_not_wrap() {
        let mut surface = Surface::new(4, 3).unwrap();
        // Paint the first pixel of the second row
        let mut dot = Pixmap::new(1, 1).unwrap();
        dot.fill(to_skia(Color32::RED));
        surface.put(&dot, 0, 1);

        assert_eq!(surface.pixel(0, 1), Some(Color32::RED));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 3), None);
        assert_eq!(surface.pixel(3, 2), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_zero_size_surface_is_rejected() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(SketchError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_restore_replaces_content() {
        let mut surface = Surface::new(20, 20).unwrap();
        surface.fill_solid(Color32::RED);
        let snapshot = surface.snapshot().unwrap();

        surface.fill_solid(Color32::BLUE);
        surface.restore(&snapshot).unwrap();
        assert_eq!(surface.pixel(3, 3), Some(Color32::RED));
    }

    #[test]
    fn test_mutations_bump_generation() {
        let mut surface = Surface::new(4, 4).unwrap();
        let before = surface.generation();
        surface.fill_solid(Color32::WHITE);
        assert!(surface.generation() > before);
    }

    #[test]
    fn test_extract_pads_out_of_bounds_with_transparent() {
        let mut surface = Surface::new(10, 10).unwrap();
        surface.fill_solid(Color32::GREEN);
        let region = surface
            .extract(PixelRect { x: 8, y: 8, width: 4, height: 4 })
            .unwrap();
        assert_eq!(region.width(), 4);
        assert_eq!(region.pixel(0, 0).unwrap().alpha(), 255);
        assert_eq!(region.pixel(3, 3).unwrap().alpha(), 0);
    }

    #[test]
    fn test_clear_rect_only_touches_area() {
        let mut surface = Surface::new(10, 10).unwrap();
        surface.fill_solid(Color32::WHITE);
        surface.clear_rect(PixelRect { x: 2, y: 2, width: 3, height: 3 });
        assert_eq!(surface.pixel(2, 2), Some(Color32::TRANSPARENT));
        assert_eq!(surface.pixel(4, 4), Some(Color32::TRANSPARENT));
        assert_eq!(surface.pixel(5, 5), Some(Color32::WHITE));
        assert_eq!(surface.pixel(1, 1), Some(Color32::WHITE));
    }

    #[test]
    fn test_segment_uses_round_caps() {
        let mut surface = Surface::new(40, 40).unwrap();
        surface.stroke_segment(pos2(10.0, 20.0), pos2(30.0, 20.0), Color32::BLACK, 8.0);
        assert_eq!(surface.pixel(20, 20), Some(Color32::BLACK));
        // Round caps extend past the end point by half the width.
        assert_eq!(surface.pixel(32, 20).map(|c| c.a() > 0), Some(true));
        assert_eq!(surface.pixel(20, 30), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_compose_background_draws_image_at_position() {
        let mut surface = Surface::new(20, 20).unwrap();
        let mut image = Pixmap::new(5, 5).unwrap();
        image.fill(tiny_skia::Color::from_rgba8(255, 0, 0, 255));

        surface.compose_background(Color32::WHITE, &image, pos2(10.0, 10.0));
        assert_eq!(surface.pixel(0, 0), Some(Color32::WHITE));
        assert_eq!(surface.pixel(12, 12), Some(Color32::RED));
        assert_eq!(surface.pixel(15, 15), Some(Color32::WHITE));
    }
}
