use crate::model::{User, UserDraft, UserPatch};
use crate::ui::mvi::UiState;

/// Which field currently receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Role,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Role,
            FormField::Role => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Role,
            FormField::Email => FormField::Name,
            FormField::Role => FormField::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Role => "Role",
        }
    }
}

/// Create a new record, or edit the record with the held id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: String,
    },
}

/// One shared form for both create and edit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub name: String,
    pub email: String,
    pub role: String,
    pub focused: FormField,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Submit-button label, switching with the mode like the form title.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Create"
        }
    }

    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }

    /// Full-field patch: edit submissions always send all three fields.
    pub fn patch(&self) -> UserPatch {
        UserPatch {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            role: Some(self.role.clone()),
        }
    }

    /// Populate fields from an existing record and switch to edit mode.
    pub fn for_edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit {
                id: user.id.clone(),
            },
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            focused: FormField::Name,
        }
    }
}
