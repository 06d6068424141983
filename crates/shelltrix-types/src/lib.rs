//! Foundation types for shelltrix.
//!
//! Everything here is free of shell state: the error type shared by all
//! crates, completion suggestions, the edit-buffer `Document` handed to the
//! completion router, and the TOML-backed shell configuration.

pub mod config;
pub mod document;
pub mod error;
pub mod suggest;

pub use config::ShellConfig;
pub use document::Document;
pub use error::{Result, ShellError};
pub use suggest::Suggestion;
