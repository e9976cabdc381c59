//! helpdesk - An IT help desk ticketing service
//!
//! This crate provides a small ticketing service with:
//! - Keyword-based classification of free-text issue descriptions against a
//!   fixed four-category catalog
//! - A storage layer with interchangeable backends: JSON file on disk (with
//!   a writability fallback chain), process-local memory, and an external
//!   database variant
//! - An HTTP/JSON API used by the voice-agent front end, plus an
//!   operational CLI

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Storage fallback
//!
//! The file backend probes its data directory for writability at first use
//! and falls back to the platform temp directory, then to memory. The
//! decision is made once per process and cached; see [`storage::select`].
//!
//! # Example
//!
//! ```rust,ignore
//! use helpdesk::service::{TicketService, TicketSubmission};
//! use helpdesk::storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! let service = TicketService::new(Arc::new(MemoryStorage::new()));
//! let created = service.create(TicketSubmission {
//!     name: "Jane Doe".into(),
//!     email: "jane@example.com".into(),
//!     phone: "555-1234".into(),
//!     address: "1 Main St".into(),
//!     issue_description: "the office wifi is down".into(),
//! }).await?;
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod service;
pub mod storage;

#[cfg(feature = "api")]
pub mod api;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};
