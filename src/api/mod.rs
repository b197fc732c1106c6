//! HTTP API over the record store.
//!
//! Four operation contracts (list, add, update, delete) plus a health
//! probe, served by axum. Each mutation is a direct pass-through to the
//! [`FileStore`](crate::store::FileStore); there is no authorization and
//! no validation beyond required-field presence.

mod error;
mod routes;
mod server;

pub use error::ApiError;
pub use routes::build_router;
pub use server::{ApiServer, ServerHandle};
