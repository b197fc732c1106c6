mod common;

use common::user;
use roster::ui::form::{FormField, FormIntent, FormMode, FormReducer, FormState};
use roster::ui::mvi::Reducer;

fn type_text(mut state: FormState, text: &str) -> FormState {
    for ch in text.chars() {
        state = FormReducer::reduce(state, FormIntent::Input(ch));
    }
    state
}

#[test]
fn input_goes_to_the_focused_field() {
    let state = type_text(FormState::default(), "Bob");
    assert_eq!(state.name, "Bob");
    assert!(state.email.is_empty());

    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    let state = type_text(state, "b@x.com");
    assert_eq!(state.email, "b@x.com");
}

#[test]
fn backspace_removes_from_the_focused_field() {
    let state = type_text(FormState::default(), "Boc");
    let state = FormReducer::reduce(state, FormIntent::Backspace);
    assert_eq!(state.name, "Bo");
}

#[test]
fn focus_cycles_through_all_three_fields() {
    let mut state = FormState::default();
    assert_eq!(state.focused, FormField::Name);
    state = FormReducer::reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FormField::Email);
    state = FormReducer::reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FormField::Role);
    state = FormReducer::reduce(state, FormIntent::FocusNext);
    assert_eq!(state.focused, FormField::Name);

    state = FormReducer::reduce(state, FormIntent::FocusPrev);
    assert_eq!(state.focused, FormField::Role);
}

#[test]
fn begin_edit_populates_fields_and_switches_mode() {
    let state = FormReducer::reduce(
        FormState::default(),
        FormIntent::BeginEdit(user("3", "Ada")),
    );

    assert_eq!(state.mode, FormMode::Edit { id: "3".to_string() });
    assert_eq!(state.name, "Ada");
    assert_eq!(state.email, "ada@example.com");
    assert_eq!(state.submit_label(), "Update");
}

#[test]
fn submitted_clears_fields_and_mode() {
    let state = FormReducer::reduce(
        FormState::default(),
        FormIntent::BeginEdit(user("3", "Ada")),
    );
    let state = FormReducer::reduce(state, FormIntent::Submitted);

    assert_eq!(state, FormState::default());
    assert_eq!(state.submit_label(), "Create");
}

#[test]
fn cancel_edit_returns_to_a_blank_create_form() {
    let state = FormReducer::reduce(
        FormState::default(),
        FormIntent::BeginEdit(user("3", "Ada")),
    );
    let state = FormReducer::reduce(state, FormIntent::CancelEdit);

    assert_eq!(state.mode, FormMode::Create);
    assert!(state.name.is_empty());
}

#[test]
fn patch_carries_all_three_fields() {
    let state = FormReducer::reduce(
        FormState::default(),
        FormIntent::BeginEdit(user("3", "Ada")),
    );
    let patch = state.patch();
    assert_eq!(patch.name.as_deref(), Some("Ada"));
    assert_eq!(patch.email.as_deref(), Some("ada@example.com"));
    assert_eq!(patch.role.as_deref(), Some("user"));
}
