//! Ticket persistence
//!
//! One trait, three backends: a JSON document on disk, a process-local
//! in-memory store, and (behind the `database` feature) an external SQLite
//! database. [`select`] resolves which backend a process uses, once,
//! through the writability fallback chain.

pub mod file;
pub mod memory;
pub mod repository;
pub mod select;

#[cfg(feature = "database")]
pub mod database;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use repository::TicketStore;
pub use select::{select_backend, shared_store};

#[cfg(feature = "database")]
pub use database::DatabaseStorage;

#[cfg(test)]
pub use repository::MockTicketStore;
