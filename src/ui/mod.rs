//! Terminal UI for the user directory.
//!
//! The view is a state machine over the current list page, the shared
//! create/edit form, and the delete-confirmation dialog, driven by the
//! intent → reducer → state flow in [`mvi`] and fed by the effect layer
//! in [`effects`].

pub mod app;
pub mod confirm;
pub mod effects;
pub mod events;
pub mod form;
pub mod input;
pub mod mvi;
pub mod pager;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod users;
