use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::constants::WHEEL_STEP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEdit {
    Insert(char),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Edit(FilterEdit),
    LoadMore,
    Retry,
    BackToTop,
    ScrollBy(isize),
    PageUp,
    PageDown,
    ToBottom,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('n') if ctrl => KeyAction::LoadMore,
        KeyCode::Char('r') if ctrl => KeyAction::Retry,
        KeyCode::Char('t') if ctrl => KeyAction::BackToTop,
        KeyCode::Char('u') if ctrl => KeyAction::Edit(FilterEdit::Clear),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(ch) => KeyAction::Edit(FilterEdit::Insert(ch)),
        KeyCode::Backspace => KeyAction::Edit(FilterEdit::Backspace),
        KeyCode::Home => KeyAction::BackToTop,
        KeyCode::End => KeyAction::ToBottom,
        KeyCode::Up => KeyAction::ScrollBy(-1),
        KeyCode::Down => KeyAction::ScrollBy(1),
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        _ => return None,
    };
    Some(action)
}

pub fn map_mouse(mouse: MouseEvent) -> Option<KeyAction> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(KeyAction::ScrollBy(-WHEEL_STEP)),
        MouseEventKind::ScrollDown => Some(KeyAction::ScrollBy(WHEEL_STEP)),
        _ => None,
    }
}

/// Applies an edit to the filter text, returning the new value.
pub fn apply_edit(text: &str, edit: FilterEdit) -> String {
    match edit {
        FilterEdit::Insert(ch) => {
            let mut next = text.to_string();
            next.push(ch);
            next
        }
        FilterEdit::Backspace => {
            let mut next = text.to_string();
            next.pop();
            next
        }
        FilterEdit::Clear => String::new(),
    }
}
