use crate::model::{User, UserDraft, UserPatch};
use crate::ui::mvi::Intent;

/// Intents over the users state.
///
/// The first four are requests: they mark the state loading and are
/// picked up by the effect layer, which issues the API call. The rest
/// are results delivered back by effect tasks.
#[derive(Debug, Clone)]
pub enum UsersIntent {
    Fetch,
    Create(UserDraft),
    Update { id: String, patch: UserPatch },
    Delete { id: String },

    Fetched(Vec<User>),
    Created(User),
    Updated(User),
    Deleted { id: String },
    Failed(String),
}

impl Intent for UsersIntent {}

impl UsersIntent {
    /// Whether this intent requests an operation (as opposed to carrying
    /// a result).
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            UsersIntent::Fetch
                | UsersIntent::Create(_)
                | UsersIntent::Update { .. }
                | UsersIntent::Delete { .. }
        )
    }
}
