use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route one key event.
///
/// While the modal editor is open it captures the keyboard completely;
/// otherwise keys go to the screen currently shown in the body.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.is_editing() {
        handle_editor_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::List => handle_list_key(app, key),
        Screen::Detail => handle_detail_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('e') => app.open_edit_for_selection(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
        KeyCode::Char('e') => app.open_edit_for_selection(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    // Dismiss always merges; there is no discard path.
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.dismiss_edit(),
        KeyCode::Backspace => app.edit_delete_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_insert_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
