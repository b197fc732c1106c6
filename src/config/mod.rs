//! Application configuration.
//!
//! A single TOML file covers both surfaces: where the server binds and
//! stores its data, and where the TUI client finds the server. A missing
//! file falls back to defaults; CLI flags override the file. No
//! environment variables are read.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ClientConfig, Config, ServerConfig};
