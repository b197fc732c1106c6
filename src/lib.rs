//! roster — a user-directory CRUD service and terminal client.
//!
//! One crate, two surfaces: `roster serve` runs the JSON-file-backed
//! directory API, and `roster` (or `roster ui`) runs a terminal UI that
//! lists, paginates, creates, edits, and deletes users through that API.

pub mod api;
pub mod client;
pub mod config;
pub mod model;
pub mod store;
pub mod ui;
