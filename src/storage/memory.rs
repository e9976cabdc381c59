//! In-memory ticket store
//!
//! Last tier of the backend fallback chain: a process-local `Vec` behind a
//! mutex. Tickets are lost on process restart. Semantics mirror the file
//! backend so the service layer cannot tell them apart.

use crate::core::{NewTicket, Ticket, TicketId, TicketPatch, TicketReceipt};
use crate::error::{HelpdeskError, Result};
use crate::storage::TicketStore;
use crate::storage::repository::sort_most_recent_first;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

/// Process-local ticket store
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tickets: Mutex<Vec<Ticket>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Ticket>>> {
        self.tickets
            .lock()
            .map_err(|_| HelpdeskError::custom("ticket store lock poisoned"))
    }

    fn next_id(tickets: &[Ticket]) -> TicketId {
        let last = tickets.last().map_or(0, |ticket| ticket.id.value());
        TicketId::new(last + 1)
    }
}

#[async_trait]
impl TicketStore for MemoryStorage {
    async fn create(&self, new_ticket: NewTicket) -> Result<TicketReceipt> {
        let mut tickets = self.lock()?;
        let id = Self::next_id(&tickets);
        let confirmation_number = new_ticket.confirmation_number;
        tickets.push(new_ticket.into_ticket(id, Utc::now()));
        Ok(TicketReceipt {
            id,
            confirmation_number,
        })
    }

    async fn list(&self) -> Result<Vec<Ticket>> {
        let mut tickets = self.lock()?.clone();
        sort_most_recent_first(&mut tickets);
        Ok(tickets)
    }

    async fn find(
        &self,
        name: &str,
        email: &str,
        confirmation_number: u32,
    ) -> Result<Option<Ticket>> {
        let tickets = self.lock()?;
        Ok(tickets
            .iter()
            .find(|ticket| ticket.matches_identity(name, email, confirmation_number))
            .cloned())
    }

    async fn get(&self, id: TicketId) -> Result<Option<Ticket>> {
        let tickets = self.lock()?;
        Ok(tickets.iter().find(|ticket| ticket.id == id).cloned())
    }

    async fn update(&self, id: TicketId, patch: TicketPatch) -> Result<()> {
        let mut tickets = self.lock()?;
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or_else(|| HelpdeskError::TicketNotFound {
                reference: format!("id {id}"),
            })?;
        patch.apply(ticket);
        Ok(())
    }
}
