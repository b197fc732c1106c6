//! The users state container: the cached list plus loading/error flags.

mod intent;
mod reducer;
mod state;

pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use state::UsersState;
