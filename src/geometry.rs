use egui::{Pos2, Rect, Vec2};

/// A rectangle anchored at `origin` whose size may be negative when the
/// pointer was dragged up or left of the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedRect {
    pub origin: Pos2,
    pub size: Vec2,
}

impl SignedRect {
    /// Zero-sized rectangle at `origin`
    pub fn at(origin: Pos2) -> Self {
        Self {
            origin,
            size: Vec2::ZERO,
        }
    }

    /// Rectangle from `anchor` to `current`, with signed offsets.
    pub fn from_points(anchor: Pos2, current: Pos2) -> Self {
        Self {
            origin: anchor,
            size: current - anchor,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0
    }

    /// The same area with non-negative extents.
    pub fn normalized(&self) -> Rect {
        Rect::from_two_pos(self.origin, self.origin + self.size)
    }

    /// Snap to whole pixels. Returns `None` when no pixel is covered.
    pub fn to_pixel_rect(&self) -> Option<PixelRect> {
        let rect = self.normalized();
        let left = rect.min.x.round() as i32;
        let top = rect.min.y.round() as i32;
        let right = rect.max.x.round() as i32;
        let bottom = rect.max.y.round() as i32;
        if right <= left || bottom <= top {
            return None;
        }
        Some(PixelRect {
            x: left,
            y: top,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

/// Integer pixel area; `x`/`y` may lie outside the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Hit test against an axis-aligned box, edges included.
pub fn contains_inclusive(min: Pos2, size: Vec2, point: Pos2) -> bool {
    point.x >= min.x && point.x <= min.x + size.x && point.y >= min.y && point.y <= min.y + size.y
}
