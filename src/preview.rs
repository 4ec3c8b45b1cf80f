//! Transient overlays drawn while a drag is in progress.
//!
//! Every frame starts from a base snapshot, so the overlay never accumulates
//! trails and never reaches the history.

use crate::error::SketchResult;
use crate::snapshot::Snapshot;
use crate::surface::Surface;
use crate::tools::{SelectionRegion, ShapeDrag};
use egui::Color32;

/// Restore `base` and draw the shape at its current extent.
///
/// Without a base there is nothing to draw against, so the frame is skipped.
pub fn render_shape_preview(
    surface: &mut Surface,
    base: Option<&Snapshot>,
    drag: &ShapeDrag,
) -> SketchResult<()> {
    let Some(base) = base else {
        return Ok(());
    };
    surface.restore(base)?;
    drag.draw(surface);
    Ok(())
}

/// Restore `base` and outline the selection with the marquee stroke.
pub fn render_marquee(
    surface: &mut Surface,
    base: &Snapshot,
    region: &SelectionRegion,
    color: Color32,
    width: f32,
) -> SketchResult<()> {
    surface.restore(base)?;
    surface.stroke_rect(region.rect(), color, width);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ShapeKind;
    use egui::pos2;

    #[test]
    fn test_preview_leaves_no_trail() {
        let mut surface = Surface::new(80, 80).unwrap();
        surface.fill_solid(Color32::WHITE);
        let base = surface.snapshot().unwrap();

        let mut drag =
            ShapeDrag::begin(ShapeKind::Rectangle, pos2(10.0, 10.0), true, Color32::RED, 1.0);
        drag.current = pos2(70.0, 70.0);
        render_shape_preview(&mut surface, Some(&base), &drag).unwrap();
        assert_eq!(surface.pixel(60, 60), Some(Color32::RED));

        drag.current = pos2(20.0, 20.0);
        render_shape_preview(&mut surface, Some(&base), &drag).unwrap();
        assert_eq!(surface.pixel(60, 60), Some(Color32::WHITE));
        assert_eq!(surface.pixel(15, 15), Some(Color32::RED));
    }

    #[test]
    fn test_preview_without_base_is_skipped() {
        let mut surface = Surface::new(20, 20).unwrap();
        let mut drag =
            ShapeDrag::begin(ShapeKind::Rectangle, pos2(0.0, 0.0), true, Color32::RED, 1.0);
        drag.current = pos2(20.0, 20.0);
        render_shape_preview(&mut surface, None, &drag).unwrap();
        assert_eq!(surface.pixel(10, 10), Some(Color32::TRANSPARENT));
    }
}
