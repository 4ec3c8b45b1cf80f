use crate::error::{SketchError, SketchResult};
use crate::geometry::contains_inclusive;
use egui::{Pos2, Vec2, pos2, vec2};
use tiny_skia::{ColorU8, IntSize, Pixmap};

/// A loaded raster image composed underneath the drawing.
///
/// It can be dragged around but keeps its native size.
pub struct BackgroundImage {
    pixels: Pixmap,
    position: Pos2,
}

impl BackgroundImage {
    /// Wrap decoded pixels, positioned at the top-left corner.
    pub fn new(pixels: Pixmap) -> Self {
        Self {
            pixels,
            position: Pos2::ZERO,
        }
    }

    /// Decode any format the `image` crate understands.
    pub fn from_bytes(bytes: &[u8]) -> SketchResult<Self> {
        let img = image::load_from_memory(bytes)?;
        log::debug!("Decoded background image: {}x{}", img.width(), img.height());
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let size = IntSize::from_wh(width, height)
            .ok_or(SketchError::InvalidDimensions { width, height })?;
        let data: Vec<u8> = rgba
            .pixels()
            .flat_map(|p| {
                let c = ColorU8::from_rgba(p[0], p[1], p[2], p[3]).premultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        let pixels =
            Pixmap::from_vec(data, size).ok_or(SketchError::InvalidDimensions { width, height })?;
        Ok(Self::new(pixels))
    }

    pub fn pixels(&self) -> &Pixmap {
        &self.pixels
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.pixels.width() as f32, self.pixels.height() as f32)
    }

    /// Whether `point` lies on the image, edges included
    pub fn contains(&self, point: Pos2) -> bool {
        contains_inclusive(self.position, self.size(), point)
    }

    /// Offset of `point` from the image's top-left corner
    pub fn grab_offset(&self, point: Pos2) -> Vec2 {
        point - self.position
    }

    /// Move so that the grabbed point follows the pointer.
    pub fn drag_to(&mut self, pointer: Pos2, grab_offset: Vec2) {
        self.position = pos2(pointer.x - grab_offset.x, pointer.y - grab_offset.y);
    }
}

impl std::fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundImage")
            .field("size", &self.size())
            .field("position", &self.position)
            .finish()
    }
}
