use eframe_sketchpad::{Editor, EditorConfig, EditorState, ToolSettings};
use egui::{Color32, pos2};
use std::io::Cursor;

fn green_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 255, 0, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn editor_with_background() -> Editor {
    let mut editor =
        Editor::new(EditorConfig::with_size(200, 150), ToolSettings::default()).unwrap();
    editor.load_background(&green_png(40, 30)).unwrap();
    editor
}

#[test]
fn test_load_composes_and_commits() {
    let editor = editor_with_background();
    assert_eq!(editor.history().undo_len(), 2);
    assert_eq!(editor.background().unwrap().position(), pos2(0.0, 0.0));
    assert_eq!(editor.surface().pixel(10, 10), Some(Color32::GREEN));
    assert_eq!(editor.surface().pixel(50, 50), Some(Color32::WHITE));
}

#[test]
fn test_drag_moves_image_without_history() {
    let mut editor = editor_with_background();
    editor.pointer_down(pos2(20.0, 15.0));
    assert!(matches!(editor.state(), EditorState::ImageDrag { .. }));

    editor.pointer_move(pos2(70.0, 65.0));
    assert_eq!(editor.background().unwrap().position(), pos2(50.0, 50.0));
    assert_eq!(editor.surface().pixel(60, 60), Some(Color32::GREEN));
    assert_eq!(editor.surface().pixel(10, 10), Some(Color32::WHITE));

    editor.pointer_up(pos2(70.0, 65.0));
    assert!(editor.state().is_idle());
    assert_eq!(editor.history().undo_len(), 2);
    assert_eq!(editor.history().redo_len(), 0);
}

#[test]
fn test_image_edge_counts_as_hit() {
    let mut editor = editor_with_background();
    editor.pointer_down(pos2(40.0, 30.0));
    assert!(matches!(editor.state(), EditorState::ImageDrag { .. }));
}

#[test]
fn test_press_outside_image_uses_tool() {
    let mut editor = editor_with_background();
    editor.pointer_down(pos2(150.0, 100.0));
    assert!(matches!(editor.state(), EditorState::Drawing(_)));
    editor.pointer_up(pos2(150.0, 100.0));
    assert_eq!(editor.history().undo_len(), 3);
}

#[test]
fn test_invalid_bytes_are_rejected() {
    let mut editor =
        Editor::new(EditorConfig::with_size(50, 50), ToolSettings::default()).unwrap();
    assert!(editor.load_background(b"not an image").is_err());
    assert!(editor.background().is_none());
    assert_eq!(editor.history().undo_len(), 1);
}
