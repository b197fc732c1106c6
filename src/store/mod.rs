//! Flat-file persistence for the user directory.

mod file;

pub use file::{FileStore, StoreError};
