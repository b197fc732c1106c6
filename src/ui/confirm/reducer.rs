use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::ConfirmDeleteState;
use crate::ui::mvi::Reducer;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDeleteState;
    type Intent = ConfirmIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Request { user_id } => ConfirmDeleteState::Visible { user_id },
            // Both close the dialog; the caller reads pending_id()
            // before reducing Confirm to know what to delete.
            ConfirmIntent::Cancel | ConfirmIntent::Confirm => ConfirmDeleteState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_opens_with_target_id() {
        let state = ConfirmReducer::reduce(
            ConfirmDeleteState::Hidden,
            ConfirmIntent::Request {
                user_id: "3".to_string(),
            },
        );
        assert_eq!(state.pending_id(), Some("3"));
    }

    #[test]
    fn cancel_discards_pending_id() {
        let open = ConfirmDeleteState::Visible {
            user_id: "3".to_string(),
        };
        let state = ConfirmReducer::reduce(open, ConfirmIntent::Cancel);
        assert_eq!(state, ConfirmDeleteState::Hidden);
    }

    #[test]
    fn reopening_replaces_the_target() {
        let open = ConfirmDeleteState::Visible {
            user_id: "3".to_string(),
        };
        let state = ConfirmReducer::reduce(
            open,
            ConfirmIntent::Request {
                user_id: "9".to_string(),
            },
        );
        assert_eq!(state.pending_id(), Some("9"));
    }
}
