//! Request and response shapes for the HTTP API
//!
//! Field names mirror the wire format used by the voice agent and the
//! admin front end; `success` is carried explicitly in every success body
//! to pair with the `{success: false, error}` failure envelope.

use crate::core::issue::IssueDefinition;
use crate::core::{Ticket, TicketId};
use serde::{Deserialize, Serialize};

/// POST /tickets request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicketRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub issue_description: String,
}

/// POST /tickets success body
#[derive(Debug, Serialize)]
pub struct CreateTicketResponse {
    pub success: bool,
    pub ticket_id: TicketId,
    pub confirmation_number: u32,
    pub email: String,
    pub issue: String,
    pub price: u32,
}

/// GET /tickets success body
#[derive(Debug, Serialize)]
pub struct ListTicketsResponse {
    pub success: bool,
    pub tickets: Vec<Ticket>,
}

/// GET /tickets/{id} success body
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub success: bool,
    pub ticket: Ticket,
}

/// POST /tickets/lookup request body
#[derive(Debug, Clone, Deserialize)]
pub struct LookupTicketRequest {
    pub name: String,
    pub email: String,
    pub confirmation_number: u32,
}

/// POST /tickets/lookup success body
#[derive(Debug, Serialize)]
pub struct LookupTicketResponse {
    pub success: bool,
    pub ticket: Ticket,
    pub message: String,
}

/// POST /tickets/update request body
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTicketRequest {
    pub name: String,
    pub email: String,
    pub confirmation_number: u32,
    pub field: String,
    pub value: String,
}

/// POST /tickets/update-by-id request body
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTicketByIdRequest {
    pub ticket_id: TicketId,
    pub field: String,
    pub value: String,
}

/// Success body shared by both update endpoints
#[derive(Debug, Serialize)]
pub struct UpdateTicketResponse {
    pub success: bool,
    pub field: String,
    pub value: String,
    pub ticket_id: TicketId,
    pub message: String,
}

/// GET /supported-issues success body
#[derive(Debug, Serialize)]
pub struct SupportedIssuesResponse {
    pub success: bool,
    pub issues: &'static [IssueDefinition],
}

/// GET / body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}
