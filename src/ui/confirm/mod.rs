//! Delete-confirmation dialog.

mod intent;
mod reducer;
mod state;

pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::ConfirmDeleteState;
