use crate::geometry::{PixelRect, SignedRect};
use crate::surface::Surface;
use egui::Pos2;
use tiny_skia::Pixmap;

/// A rectangular selection growing from its anchor while the pointer drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRegion {
    rect: SignedRect,
}

impl SelectionRegion {
    /// Zero-sized selection at the press point
    pub fn begin(anchor: Pos2) -> Self {
        Self {
            rect: SignedRect::at(anchor),
        }
    }

    /// Recompute width/height as signed offsets from the anchor.
    pub fn update(&mut self, current: Pos2) {
        self.rect = SignedRect::from_points(self.rect.origin, current);
    }

    pub fn rect(&self) -> SignedRect {
        self.rect
    }

    pub fn anchor(&self) -> Pos2 {
        self.rect.origin
    }

    /// Cut the selected pixels out of the surface.
    ///
    /// The area is cleared to transparent. A region that covers no pixels
    /// yields no buffer and leaves the surface alone.
    pub fn cut(&self, surface: &mut Surface) -> Option<SelectionBuffer> {
        let area = self.rect.to_pixel_rect()?;
        let pixels = surface.extract(area)?;
        surface.clear_rect(area);
        log::debug!("Cut {}x{} region at ({}, {})", area.width, area.height, area.x, area.y);
        Some(SelectionBuffer { pixels, source: area })
    }
}

/// Pixels lifted out of the surface, waiting to be pasted.
pub struct SelectionBuffer {
    pixels: Pixmap,
    source: PixelRect,
}

impl SelectionBuffer {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Where the pixels were cut from
    pub fn source(&self) -> PixelRect {
        self.source
    }

    pub fn pixels(&self) -> &Pixmap {
        &self.pixels
    }

    /// Write the pixels with their top-left corner at `at`, replacing what
    /// is there. Consumes the buffer.
    pub fn paste(self, surface: &mut Surface, at: Pos2) {
        let (x, y) = (at.x.round() as i32, at.y.round() as i32);
        surface.put(&self.pixels, x, y);
        log::debug!("Pasted {}x{} region at ({}, {})", self.width(), self.height(), x, y);
    }
}

impl std::fmt::Debug for SelectionBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("source", &self.source)
            .finish()
    }
}
