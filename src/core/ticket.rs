//! Ticket domain model
//!
//! A [`Ticket`] is one support request: requester contact details, the
//! canonical issue text with its quoted price, a five-digit confirmation
//! number handed to the caller, and a creation timestamp. Tickets are
//! created and updated through the storage layer; nothing ever deletes one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a ticket
///
/// File and memory backends assign these sequentially; the database backend
/// uses its native row id. Either way the value is an opaque integer to
/// callers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    /// Wrap a raw id value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// A persisted support ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier assigned by the storage backend
    pub id: TicketId,

    /// Requester name (free text)
    pub name: String,

    /// Requester email (free text, used as a lookup key)
    pub email: String,

    /// Requester phone number
    pub phone: String,

    /// Requester address
    pub address: String,

    /// Canonical issue description resolved from the catalog
    pub issue: String,

    /// Fixed price quoted for the issue category, in dollars
    pub price: u32,

    /// Five-digit confirmation number assigned at creation, immutable
    pub confirmation_number: u32,

    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Whether this ticket matches the (name, email, confirmation) identity
    ///
    /// Name and email are compared after trimming whitespace, case
    /// insensitively; the confirmation number must match exactly.
    #[must_use]
    pub fn matches_identity(&self, name: &str, email: &str, confirmation_number: u32) -> bool {
        normalize(&self.name) == normalize(name)
            && normalize(&self.email) == normalize(email)
            && self.confirmation_number == confirmation_number
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Fields for a ticket about to be created
///
/// The issue text and price must already be resolved through the catalog;
/// the confirmation number is supplied by the caller (the service layer
/// generates it).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub issue: String,
    pub price: u32,
    pub confirmation_number: u32,
}

impl NewTicket {
    /// Materialize into a [`Ticket`] with a backend-assigned id and timestamp
    #[must_use]
    pub fn into_ticket(self, id: TicketId, created_at: DateTime<Utc>) -> Ticket {
        Ticket {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            issue: self.issue,
            price: self.price,
            confirmation_number: self.confirmation_number,
            created_at,
        }
    }
}

/// Receipt returned by a successful create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketReceipt {
    pub id: TicketId,
    pub confirmation_number: u32,
}

/// A partial update restricted to the mutable ticket fields
///
/// `issue` and `price` travel together: the service re-resolves issue text
/// through the classifier and sets both, never one without the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPatch {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub issue: Option<String>,
    pub price: Option<u32>,
}

impl TicketPatch {
    /// Whether the patch carries no changes at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.address.is_none()
            && self.issue.is_none()
            && self.price.is_none()
    }

    /// Apply the patch to a ticket in place
    pub fn apply(&self, ticket: &mut Ticket) {
        if let Some(phone) = &self.phone {
            ticket.phone = phone.clone();
        }
        if let Some(address) = &self.address {
            ticket.address = address.clone();
        }
        if let Some(issue) = &self.issue {
            ticket.issue = issue.clone();
        }
        if let Some(price) = self.price {
            ticket.price = price;
        }
    }
}
