use crate::ui::mvi::UiState;

/// Modal confirmation before a delete is dispatched. Holds the target id
/// while open; closing without confirming discards it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDeleteState {
    #[default]
    Hidden,
    Visible {
        user_id: String,
    },
}

impl UiState for ConfirmDeleteState {}

impl ConfirmDeleteState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The id awaiting confirmation, if the dialog is open.
    pub fn pending_id(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Visible { user_id } => Some(user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(ConfirmDeleteState::default(), ConfirmDeleteState::Hidden);
    }

    #[test]
    fn pending_id_only_when_visible() {
        assert_eq!(ConfirmDeleteState::Hidden.pending_id(), None);
        let open = ConfirmDeleteState::Visible {
            user_id: "7".to_string(),
        };
        assert_eq!(open.pending_id(), Some("7"));
    }
}
