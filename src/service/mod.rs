//! Ticket service orchestration
//!
//! Thin layer between the transports (HTTP API, CLI) and the store: request
//! validation, issue classification, confirmation-number generation, and
//! field-restricted updates. No persistence logic of its own.

use crate::core::issue::{ISSUE_CATALOG, IssueDefinition, identify_issue};
use crate::core::{PatchBuilder, Ticket, TicketBuilder, TicketId, TicketPatch};
use crate::error::{HelpdeskError, Result};
use crate::storage::TicketStore;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

/// A ticket-submission request, before classification
#[derive(Debug, Clone)]
pub struct TicketSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub issue_description: String,
}

/// Outcome of a successful ticket creation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CreatedTicket {
    pub ticket_id: TicketId,
    pub confirmation_number: u32,
    pub email: String,
    pub issue: String,
    pub price: u32,
}

/// Outcome of a successful update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub ticket_id: TicketId,
    pub field: String,
    pub value: String,
    pub updated_price: Option<u32>,
}

/// Orchestrates validation, classification, and storage
#[derive(Clone)]
pub struct TicketService {
    store: Arc<dyn TicketStore>,
}

impl TicketService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    /// Create a ticket from a submission
    ///
    /// Classifies the free-text description; an unmatched description fails
    /// before anything is written. On a match, generates a confirmation
    /// number in `[10000, 99999]` (not checked for collisions) and persists.
    pub async fn create(&self, submission: TicketSubmission) -> Result<CreatedTicket> {
        ensure_present("name", &submission.name)?;
        ensure_present("email", &submission.email)?;
        ensure_present("phone", &submission.phone)?;
        ensure_present("address", &submission.address)?;
        ensure_present("issue_description", &submission.issue_description)?;

        let issue = classify(&submission.issue_description)?;
        let confirmation_number = generate_confirmation_number();

        let new_ticket = TicketBuilder::new()
            .name(submission.name)
            .email(submission.email.clone())
            .phone(submission.phone)
            .address(submission.address)
            .issue(issue.description, issue.price)
            .confirmation_number(confirmation_number)
            .build();
        let receipt = self.store.create(new_ticket).await?;

        info!(
            ticket_id = %receipt.id,
            confirmation_number = receipt.confirmation_number,
            issue = issue.description,
            "created ticket"
        );

        Ok(CreatedTicket {
            ticket_id: receipt.id,
            confirmation_number: receipt.confirmation_number,
            email: submission.email,
            issue: issue.description.to_string(),
            price: issue.price,
        })
    }

    /// All tickets, most recent first
    pub async fn list(&self) -> Result<Vec<Ticket>> {
        self.store.list().await
    }

    /// Fetch one ticket by its identity triple
    pub async fn lookup(
        &self,
        name: &str,
        email: &str,
        confirmation_number: u32,
    ) -> Result<Ticket> {
        self.store
            .find(name, email, confirmation_number)
            .await?
            .ok_or_else(|| HelpdeskError::TicketNotFound {
                reference: format!("{name} <{email}> #{confirmation_number}"),
            })
    }

    /// Fetch one ticket by id
    pub async fn get(&self, id: TicketId) -> Result<Ticket> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| HelpdeskError::TicketNotFound {
                reference: format!("id {id}"),
            })
    }

    /// Update one mutable field of the ticket with the given id
    ///
    /// When the field is `issue` the value is re-classified and the price
    /// updated alongside it.
    pub async fn update_by_id(
        &self,
        id: TicketId,
        field: &str,
        value: &str,
    ) -> Result<UpdateOutcome> {
        let patch = resolve_patch(field, value)?;
        let updated_price = patch.price;
        self.store.update(id, patch).await?;

        info!(ticket_id = %id, field, "updated ticket");

        Ok(UpdateOutcome {
            ticket_id: id,
            field: field.to_string(),
            value: value.to_string(),
            updated_price,
        })
    }

    /// Update one mutable field, resolving the ticket by identity first
    pub async fn update_by_identity(
        &self,
        name: &str,
        email: &str,
        confirmation_number: u32,
        field: &str,
        value: &str,
    ) -> Result<UpdateOutcome> {
        let ticket = self.lookup(name, email, confirmation_number).await?;
        self.update_by_id(ticket.id, field, value).await
    }

    /// The static issue catalog
    #[must_use]
    pub fn supported_issues(&self) -> &'static [IssueDefinition] {
        &ISSUE_CATALOG
    }
}

fn classify(description: &str) -> Result<&'static IssueDefinition> {
    identify_issue(description).ok_or_else(|| HelpdeskError::UnsupportedIssue {
        description: description.to_string(),
    })
}

fn ensure_present(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HelpdeskError::MissingRequiredField(field.to_string()));
    }
    Ok(())
}

/// Translate a (field, value) pair into a storage patch
fn resolve_patch(field: &str, value: &str) -> Result<TicketPatch> {
    match field {
        "phone" => Ok(PatchBuilder::new().phone(value).build()),
        "address" => Ok(PatchBuilder::new().address(value).build()),
        "issue" => {
            let issue = classify(value)?;
            Ok(PatchBuilder::new().issue(issue.description, issue.price).build())
        },
        other => Err(HelpdeskError::InvalidUpdateField {
            field: other.to_string(),
        }),
    }
}

fn generate_confirmation_number() -> u32 {
    rand::thread_rng().gen_range(10_000..=99_999)
}
