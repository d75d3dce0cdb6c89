use crate::profile::{InputKind, ProfileField};
use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means for the app.
#[derive(Debug, Clone)]
pub enum KeyAction {
    None,
    Quit,
    Submit,
    DismissToast,
    Form(FormIntent),
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key_action(key, app.form().focused) {
        KeyAction::None => {}
        KeyAction::Quit => app.request_quit(),
        KeyAction::Submit => app.submit(),
        KeyAction::DismissToast => app.dismiss_toast(),
        KeyAction::Form(intent) => app.dispatch(intent),
    }
}

pub fn key_action(key: KeyEvent, focused: ProfileField) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        return KeyAction::Quit;
    }
    if is_ctrl_char(key, 's') {
        return KeyAction::Submit;
    }
    if is_ctrl_char(key, 'x') {
        return KeyAction::DismissToast;
    }
    if is_ctrl_char(key, 'u') {
        return KeyAction::Form(FormIntent::ClearField);
    }

    let on_phone = focused.input_kind() == InputKind::Phone;
    match key.code {
        // Enter submits from any field, like a browser form.
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Tab | KeyCode::Down => KeyAction::Form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => KeyAction::Form(FormIntent::FocusPrev),
        KeyCode::Left if on_phone => KeyAction::Form(FormIntent::PrevCountry),
        KeyCode::Right if on_phone => KeyAction::Form(FormIntent::NextCountry),
        KeyCode::Backspace => KeyAction::Form(FormIntent::DeleteChar),
        KeyCode::Char(ch) if is_text_input(key) => KeyAction::Form(FormIntent::InsertChar(ch)),
        _ => KeyAction::None,
    }
}

/// AltGr arrives as Ctrl+Alt on Windows.
fn is_altgr(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_text_input(key: KeyEvent) -> bool {
    is_altgr(key)
        || !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !is_altgr(key)
}
