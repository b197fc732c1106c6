use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UsersIntent;
use crate::ui::users::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Requests keep the cached list visible while loading.
            UsersIntent::Fetch
            | UsersIntent::Create(_)
            | UsersIntent::Update { .. }
            | UsersIntent::Delete { .. } => UsersState {
                loading: true,
                error: None,
                ..state
            },

            UsersIntent::Fetched(list) => UsersState {
                list,
                loading: false,
                ..state
            },

            // Additive, not idempotent: a duplicate Created appends twice.
            UsersIntent::Created(user) => {
                let mut list = state.list;
                list.push(user);
                UsersState {
                    list,
                    loading: false,
                    ..state
                }
            }

            UsersIntent::Updated(user) => {
                let mut list = state.list;
                if let Some(slot) = list.iter_mut().find(|u| u.id == user.id) {
                    *slot = user;
                }
                UsersState {
                    list,
                    loading: false,
                    ..state
                }
            }

            UsersIntent::Deleted { id } => {
                let mut list = state.list;
                list.retain(|u| u.id != id);
                UsersState {
                    list,
                    loading: false,
                    ..state
                }
            }

            UsersIntent::Failed(message) => UsersState {
                error: Some(message),
                loading: false,
                ..state
            },
        }
    }
}
