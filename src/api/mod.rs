//! HTTP/JSON API surface
//!
//! The primary interface of the service: ticket creation, listing, lookup,
//! and the two update entry points, plus the supported-issues catalog. The
//! external voice agent drives conversations and hits these same endpoints.

pub mod error;
pub mod handlers;
pub mod server;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use server::{ApiServer, router};
