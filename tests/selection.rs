use eframe_sketchpad::geometry::PixelRect;
use eframe_sketchpad::{Editor, EditorConfig, EditorState, Tool, ToolSettings};
use egui::{Color32, pos2};

/// Editor with a red block at (20,20)-(50,40) and a blue block at (50,40)-(80,60).
fn painted_editor() -> Editor {
    let mut editor =
        Editor::new(EditorConfig::with_size(200, 150), ToolSettings::default()).unwrap();
    editor.set_tool(Tool::Rectangle);
    editor.settings_mut().fill_shapes = true;

    editor.settings_mut().color = Color32::RED;
    editor.pointer_down(pos2(20.0, 20.0));
    editor.pointer_up(pos2(50.0, 40.0));
    editor.settings_mut().color = Color32::BLUE;
    editor.pointer_down(pos2(50.0, 40.0));
    editor.pointer_up(pos2(80.0, 60.0));

    editor.set_tool(Tool::Select);
    editor
}

fn region(editor: &Editor, x: i32, y: i32) -> Vec<u8> {
    let rect = PixelRect {
        x,
        y,
        width: 60,
        height: 40,
    };
    editor.surface().extract(rect).unwrap().data().to_vec()
}

#[test]
fn test_cut_and_paste_moves_pixels() {
    let mut editor = painted_editor();
    let before_cut = region(&editor, 20, 20);
    let commits = editor.history().undo_len();

    editor.pointer_down(pos2(20.0, 20.0));
    editor.pointer_move(pos2(80.0, 60.0));
    editor.pointer_up(pos2(80.0, 60.0));

    let buffer = editor.state().pending_paste().unwrap();
    assert_eq!((buffer.width(), buffer.height()), (60, 40));
    assert_eq!(editor.surface().pixel(30, 30), Some(Color32::TRANSPARENT));
    assert_eq!(editor.surface().pixel(70, 50), Some(Color32::TRANSPARENT));
    assert_eq!(editor.surface().pixel(19, 19), Some(Color32::WHITE));

    editor.pointer_down(pos2(100.0, 100.0));
    editor.pointer_up(pos2(100.0, 100.0));

    assert!(editor.state().is_idle());
    assert_eq!(region(&editor, 100, 100), before_cut);
    assert_eq!(editor.surface().pixel(99, 99), Some(Color32::WHITE));
    assert_eq!(editor.surface().pixel(160, 140), Some(Color32::WHITE));

    // Cut and paste live outside the undo timeline.
    assert_eq!(editor.history().undo_len(), commits);
}

#[test]
fn test_buffer_is_spent_after_one_paste() {
    let mut editor = painted_editor();
    editor.pointer_down(pos2(20.0, 20.0));
    editor.pointer_up(pos2(80.0, 60.0));
    editor.pointer_down(pos2(100.0, 100.0));
    editor.pointer_up(pos2(100.0, 100.0));
    let after_paste = editor.surface().pixmap().data().to_vec();

    // A click with the select tool selects nothing and pastes nothing.
    editor.pointer_down(pos2(0.0, 0.0));
    editor.pointer_up(pos2(0.0, 0.0));
    assert!(editor.state().is_idle());
    assert_eq!(editor.surface().pixmap().data(), &after_paste[..]);
}

#[test]
fn test_paste_takes_precedence_over_tool() {
    let mut editor = painted_editor();
    editor.pointer_down(pos2(20.0, 20.0));
    editor.pointer_up(pos2(80.0, 60.0));
    let commits = editor.history().undo_len();

    editor.set_tool(Tool::Circle);
    editor.pointer_down(pos2(120.0, 60.0));
    editor.pointer_move(pos2(150.0, 60.0));
    editor.pointer_up(pos2(150.0, 60.0));

    assert!(editor.state().is_idle());
    assert_eq!(editor.surface().pixel(125, 65), Some(Color32::RED));
    assert_eq!(editor.history().undo_len(), commits);
}

#[test]
fn test_reverse_drag_selects_same_area() {
    let mut editor = painted_editor();
    editor.pointer_down(pos2(80.0, 60.0));
    editor.pointer_move(pos2(20.0, 20.0));
    editor.pointer_up(pos2(20.0, 20.0));

    let buffer = editor.state().pending_paste().unwrap();
    assert_eq!(
        buffer.source(),
        PixelRect {
            x: 20,
            y: 20,
            width: 60,
            height: 40
        }
    );
}

#[test]
fn test_marquee_is_shown_while_dragging_only() {
    let mut editor = painted_editor();
    editor.pointer_down(pos2(100.0, 80.0));
    editor.pointer_move(pos2(150.0, 120.0));
    assert!(matches!(editor.state(), EditorState::Selecting { .. }));
    let outline = editor.surface().pixel(125, 80).unwrap();
    assert!(outline.b() > outline.r());

    editor.pointer_move(pos2(120.0, 100.0));
    assert_eq!(editor.surface().pixel(125, 120), Some(Color32::WHITE));

    editor.pointer_up(pos2(120.0, 100.0));
    // Just outside the cut area, where the outline was drawn
    assert_eq!(editor.surface().pixel(110, 100), Some(Color32::WHITE));
    assert_eq!(editor.surface().pixel(99, 90), Some(Color32::WHITE));
}

#[test]
fn test_click_without_drag_selects_nothing() {
    let mut editor = painted_editor();
    let before = editor.surface().pixmap().data().to_vec();
    editor.pointer_down(pos2(30.0, 30.0));
    editor.pointer_up(pos2(30.0, 30.0));

    assert!(editor.state().is_idle());
    assert_eq!(editor.surface().pixmap().data(), &before[..]);
}
