use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Input(ch) => {
                let mut state = state;
                field_mut(&mut state).push(ch);
                state
            }
            FormIntent::Backspace => {
                let mut state = state;
                field_mut(&mut state).pop();
                state
            }
            FormIntent::FocusNext => FormState {
                focused: state.focused.next(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focused: state.focused.prev(),
                ..state
            },
            FormIntent::BeginEdit(user) => FormState::for_edit(&user),
            // Both leave a blank create form behind.
            FormIntent::CancelEdit | FormIntent::Submitted => FormState::default(),
        }
    }
}

fn field_mut(state: &mut FormState) -> &mut String {
    match state.focused {
        FormField::Name => &mut state.name,
        FormField::Email => &mut state.email,
        FormField::Role => &mut state.role,
    }
}
