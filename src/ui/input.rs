//! Key handling.
//!
//! `handle_key` runs the view reducers and returns the request intent,
//! if any, that the caller must dispatch to the effect layer. Returning
//! the intent instead of dispatching here keeps the key map testable
//! without a network.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};
use crate::ui::confirm::ConfirmIntent;
use crate::ui::form::{FormIntent, FormMode};
use crate::ui::users::UsersIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<UsersIntent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return None;
    }

    // The dialog is modal: while it is open nothing else sees keys.
    if app.confirm().is_visible() {
        return handle_confirm_key(app, key);
    }

    match app.focus() {
        Focus::List => handle_list_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) -> Option<UsersIntent> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => {
            // Read the target id before the reducer closes the dialog.
            let id = app.confirm().pending_id()?.to_string();
            app.apply_confirm(ConfirmIntent::Confirm);
            Some(UsersIntent::Delete { id })
        }
        KeyCode::Esc | KeyCode::Char('n') => {
            app.apply_confirm(ConfirmIntent::Cancel);
            None
        }
        _ => None,
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> Option<UsersIntent> {
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            None
        }
        KeyCode::Up => {
            app.move_selection(-1);
            None
        }
        KeyCode::Down => {
            app.move_selection(1);
            None
        }
        KeyCode::Left => {
            app.change_page(-1);
            None
        }
        KeyCode::Right => {
            app.change_page(1);
            None
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // Page buttons are numbered from 1.
            let page = ch.to_digit(10).unwrap_or(0) as usize;
            if page > 0 {
                app.jump_to_page(page - 1);
            }
            None
        }
        KeyCode::Char('r') => Some(UsersIntent::Fetch),
        KeyCode::Char('e') => {
            if let Some(user) = app.selected_user().cloned() {
                app.apply_form(FormIntent::BeginEdit(user));
                app.set_focus(Focus::Form);
            }
            None
        }
        KeyCode::Char('d') => {
            if let Some(user) = app.selected_user() {
                let user_id = user.id.clone();
                app.apply_confirm(ConfirmIntent::Request { user_id });
            }
            None
        }
        KeyCode::Tab => {
            app.set_focus(Focus::Form);
            None
        }
        _ => None,
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) -> Option<UsersIntent> {
    match key.code {
        KeyCode::Esc => {
            app.apply_form(FormIntent::CancelEdit);
            app.set_focus(Focus::List);
            None
        }
        KeyCode::Tab => {
            app.apply_form(FormIntent::FocusNext);
            None
        }
        KeyCode::BackTab => {
            app.apply_form(FormIntent::FocusPrev);
            None
        }
        KeyCode::Backspace => {
            app.apply_form(FormIntent::Backspace);
            None
        }
        KeyCode::Enter => {
            let form = app.form();
            let intent = match &form.mode {
                FormMode::Edit { id } => UsersIntent::Update {
                    id: id.clone(),
                    patch: form.patch(),
                },
                FormMode::Create => UsersIntent::Create(form.draft()),
            };
            app.apply_form(FormIntent::Submitted);
            Some(intent)
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.apply_form(FormIntent::Input(ch));
            None
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
