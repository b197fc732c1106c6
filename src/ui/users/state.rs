use crate::model::User;
use crate::ui::mvi::UiState;

/// Client-side cache of the directory plus request flags.
///
/// The list mirrors the last successful result; it is not authoritative
/// and drifts if another client mutates the directory concurrently.
/// `loading` is true only between a request intent and its result;
/// `error` is set only by a failed result and cleared by the next
/// request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    pub list: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for UsersState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_idle() {
        let state = UsersState::default();
        assert!(state.list.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }
}
