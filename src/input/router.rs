use crate::editor::{Editor, EditorAction};
use crate::export::ExportFormat;
use egui::{Key, Modifiers};

use super::InputEvent;

/// Routes input events to the editor's state machine or its actions
pub fn route_event(event: &InputEvent, editor: &mut Editor) {
    match *event {
        InputEvent::PointerDown { position } => editor.pointer_down(position),
        InputEvent::PointerMove { position } => editor.pointer_move(position),
        InputEvent::PointerUp { position } => editor.pointer_up(position),
        InputEvent::KeyDown { key, modifiers } => {
            if let Some(action) = shortcut_action(key, modifiers) {
                editor.apply(action);
            }
        }
    }
}

/// Keyboard shortcuts: Ctrl+Z undo, Ctrl+Y redo, C clear, S save as PNG.
pub fn shortcut_action(key: Key, modifiers: Modifiers) -> Option<EditorAction> {
    let ctrl = modifiers.ctrl || modifiers.command;
    match key {
        Key::Z if ctrl => Some(EditorAction::Undo),
        Key::Y if ctrl => Some(EditorAction::Redo),
        Key::C => Some(EditorAction::Clear),
        Key::S => Some(EditorAction::Save(ExportFormat::Png)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_need_ctrl() {
        assert_eq!(shortcut_action(Key::Z, Modifiers::CTRL), Some(EditorAction::Undo));
        assert_eq!(shortcut_action(Key::Y, Modifiers::COMMAND), Some(EditorAction::Redo));
        assert_eq!(shortcut_action(Key::Z, Modifiers::NONE), None);
    }

    #[test]
    fn test_letter_shortcuts() {
        assert_eq!(shortcut_action(Key::C, Modifiers::NONE), Some(EditorAction::Clear));
        assert_eq!(
            shortcut_action(Key::S, Modifiers::NONE),
            Some(EditorAction::Save(ExportFormat::Png))
        );
        assert_eq!(shortcut_action(Key::X, Modifiers::NONE), None);
    }
}
