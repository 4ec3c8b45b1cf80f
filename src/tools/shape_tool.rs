use crate::geometry::SignedRect;
use crate::surface::Surface;
use egui::{Color32, Pos2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

/// A shape being dragged out between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDrag {
    pub kind: ShapeKind,
    pub anchor: Pos2,
    pub current: Pos2,
    pub filled: bool,
    pub color: Color32,
    pub width: f32,
}

impl ShapeDrag {
    pub fn begin(kind: ShapeKind, anchor: Pos2, filled: bool, color: Color32, width: f32) -> Self {
        Self {
            kind,
            anchor,
            current: anchor,
            filled,
            color,
            width,
        }
    }

    /// Rectangle from the anchor to the current point
    pub fn rect(&self) -> SignedRect {
        SignedRect::from_points(self.anchor, self.current)
    }

    /// Circle radius: distance from the anchor to the current point
    pub fn radius(&self) -> f32 {
        self.anchor.distance(self.current)
    }

    /// Paint the shape at its current extent onto `surface`.
    pub fn draw(&self, surface: &mut Surface) {
        match (self.kind, self.filled) {
            (ShapeKind::Rectangle, true) => surface.fill_rect(self.rect(), self.color),
            (ShapeKind::Rectangle, false) => surface.stroke_rect(self.rect(), self.color, self.width),
            (ShapeKind::Circle, true) => surface.fill_circle(self.anchor, self.radius(), self.color),
            (ShapeKind::Circle, false) => {
                surface.stroke_circle(self.anchor, self.radius(), self.color, self.width)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_radius_is_euclidean_distance() {
        let mut drag = ShapeDrag::begin(ShapeKind::Circle, pos2(10.0, 10.0), false, Color32::RED, 2.0);
        drag.current = pos2(13.0, 14.0);
        assert_eq!(drag.radius(), 5.0);
    }

    #[test]
    fn test_stroked_rect_leaves_interior() {
        let mut surface = Surface::new(60, 60).unwrap();
        let mut drag =
            ShapeDrag::begin(ShapeKind::Rectangle, pos2(10.0, 10.0), false, Color32::RED, 2.0);
        drag.current = pos2(50.0, 50.0);
        drag.draw(&mut surface);

        assert_eq!(surface.pixel(30, 10).map(|c| c.a() > 0), Some(true));
        assert_eq!(surface.pixel(30, 30), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_filled_rect_dragged_up_left() {
        let mut surface = Surface::new(60, 60).unwrap();
        let mut drag =
            ShapeDrag::begin(ShapeKind::Rectangle, pos2(50.0, 50.0), true, Color32::BLUE, 2.0);
        drag.current = pos2(10.0, 10.0);
        drag.draw(&mut surface);

        assert_eq!(surface.pixel(30, 30), Some(Color32::BLUE));
        assert_eq!(surface.pixel(5, 5), Some(Color32::TRANSPARENT));
    }
}
