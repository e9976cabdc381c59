//! JSON-file-backed ticket store
//!
//! Tickets live in a single JSON document, `tickets.json`, inside the
//! store's data directory: `{"tickets": [...]}`. Every operation is a full
//! read-modify-write of that document. Concurrent writers can interleave
//! read-modify-write cycles; that is an accepted limitation of this backend,
//! not something it guards against.

use crate::core::{NewTicket, Ticket, TicketId, TicketPatch, TicketReceipt};
use crate::error::{HelpdeskError, Result};
use crate::storage::TicketStore;
use crate::storage::repository::sort_most_recent_first;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the ticket document inside the data directory
const TICKETS_FILE: &str = "tickets.json";

/// File storage for tickets
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

/// On-disk shape of the ticket document
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    tickets: Vec<Ticket>,
}

impl JsonFileStorage {
    /// Create a store rooted at the given data directory
    ///
    /// The directory and document are created lazily on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory this store writes into
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the ticket document
    #[must_use]
    pub fn tickets_path(&self) -> PathBuf {
        self.data_dir.join(TICKETS_FILE)
    }

    fn ensure_store(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.tickets_path();
        if !path.exists() {
            let empty = serde_json::to_string_pretty(&StoreDocument::default())?;
            fs::write(&path, empty)?;
            debug!(path = %path.display(), "initialized ticket document");
        }
        Ok(())
    }

    fn read_document(&self) -> Result<StoreDocument> {
        self.ensure_store()?;
        let raw = fs::read_to_string(self.tickets_path())?;
        match serde_json::from_str(&raw) {
            Ok(document) => Ok(document),
            Err(error) => {
                // An unparseable document reads as an empty store; the next
                // write replaces it.
                warn!(%error, "ticket document is unreadable, treating as empty");
                Ok(StoreDocument::default())
            },
        }
    }

    fn write_document(&self, document: &StoreDocument) -> Result<()> {
        self.ensure_store()?;
        let raw = serde_json::to_string_pretty(document)?;
        fs::write(self.tickets_path(), raw)?;
        Ok(())
    }

    fn next_id(document: &StoreDocument) -> TicketId {
        let last = document
            .tickets
            .last()
            .map_or(0, |ticket| ticket.id.value());
        TicketId::new(last + 1)
    }
}

#[async_trait]
impl TicketStore for JsonFileStorage {
    async fn create(&self, new_ticket: NewTicket) -> Result<TicketReceipt> {
        let mut document = self.read_document()?;
        let id = Self::next_id(&document);
        let confirmation_number = new_ticket.confirmation_number;
        let ticket = new_ticket.into_ticket(id, Utc::now());
        document.tickets.push(ticket);
        self.write_document(&document)?;
        Ok(TicketReceipt {
            id,
            confirmation_number,
        })
    }

    async fn list(&self) -> Result<Vec<Ticket>> {
        let mut tickets = self.read_document()?.tickets;
        sort_most_recent_first(&mut tickets);
        Ok(tickets)
    }

    async fn find(
        &self,
        name: &str,
        email: &str,
        confirmation_number: u32,
    ) -> Result<Option<Ticket>> {
        let document = self.read_document()?;
        Ok(document
            .tickets
            .into_iter()
            .find(|ticket| ticket.matches_identity(name, email, confirmation_number)))
    }

    async fn get(&self, id: TicketId) -> Result<Option<Ticket>> {
        let document = self.read_document()?;
        Ok(document.tickets.into_iter().find(|ticket| ticket.id == id))
    }

    async fn update(&self, id: TicketId, patch: TicketPatch) -> Result<()> {
        let mut document = self.read_document()?;
        let ticket = document
            .tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or_else(|| HelpdeskError::TicketNotFound {
                reference: format!("id {id}"),
            })?;
        patch.apply(ticket);
        self.write_document(&document)
    }
}
