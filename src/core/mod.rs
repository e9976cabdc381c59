//! Core domain types for the help desk
//!
//! The issue catalog and classifier live in [`issue`]; the ticket record and
//! its patch/receipt companions in [`ticket`]. Everything here is pure data
//! and pure functions; persistence is the storage layer's job.

pub mod builders;
pub mod issue;
pub mod ticket;

pub use builders::{PatchBuilder, TicketBuilder};
pub use issue::{ISSUE_CATALOG, IssueCategory, IssueDefinition, identify_issue};
pub use ticket::{NewTicket, Ticket, TicketId, TicketPatch, TicketReceipt};
