//! Command handlers
//!
//! One module per command, each exposing a `handle_*_command` function that
//! takes its arguments plus the output formatter and returns `Result<()>`.

pub mod common;
pub mod create;
pub mod issues;
pub mod list;
pub mod lookup;

#[cfg(feature = "api")]
pub mod serve;

pub use create::{CreateParams, handle_create_command};
pub use issues::handle_issues_command;
pub use list::handle_list_command;
pub use lookup::handle_lookup_command;

#[cfg(feature = "api")]
pub use serve::handle_serve_command;
