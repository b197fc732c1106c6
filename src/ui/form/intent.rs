use crate::model::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Typed character goes into the focused field.
    Input(char),
    /// Remove the last character of the focused field.
    Backspace,
    FocusNext,
    FocusPrev,
    /// Populate the form from a record and switch to edit mode.
    BeginEdit(User),
    /// Drop edit mode and clear all fields.
    CancelEdit,
    /// The form was submitted; fields and mode are cleared. The dispatch
    /// of the create/update request happens in the input layer, before
    /// this intent is reduced.
    Submitted,
}

impl Intent for FormIntent {}
