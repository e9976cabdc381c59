use crate::core::{NewTicket, Ticket, TicketId, TicketPatch, TicketReceipt};
use crate::error::Result;
use async_trait::async_trait;

/// Storage trait for ticket persistence
///
/// This trait defines the backend-agnostic capability set for tickets:
/// create, list, find-by-identity, and update-by-id. The file, in-memory,
/// and database backends all implement it, and the backend is selected once
/// at startup (see [`crate::storage::select`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Persist a new ticket, assigning a fresh id and creation timestamp
    async fn create(&self, new_ticket: NewTicket) -> Result<TicketReceipt>;

    /// All tickets, most recently created first
    async fn list(&self) -> Result<Vec<Ticket>>;

    /// Find one ticket by its (name, email, confirmation number) identity
    ///
    /// Name and email match after trimming, case-insensitively. When
    /// duplicates exist the first record in storage order is returned.
    async fn find(&self, name: &str, email: &str, confirmation_number: u32)
    -> Result<Option<Ticket>>;

    /// Fetch a single ticket by id
    async fn get(&self, id: TicketId) -> Result<Option<Ticket>>;

    /// Apply a partial update to the ticket with the given id
    ///
    /// Fails with [`crate::error::HelpdeskError::TicketNotFound`] when no
    /// such ticket exists and with
    /// [`crate::error::HelpdeskError::UpdateFailed`] when the backend
    /// reports that the write modified nothing.
    async fn update(&self, id: TicketId, patch: TicketPatch) -> Result<()>;
}

/// Order tickets most recently created first
///
/// Ties on `created_at` are broken by id descending so the ordering is
/// total across backends.
pub(crate) fn sort_most_recent_first(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
