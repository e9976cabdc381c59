//! HTTP handlers
//!
//! Each handler shapes one endpoint: deserialize, delegate to
//! [`TicketService`], wrap the outcome in the response envelope. Failures
//! convert through [`ApiError`](crate::api::error::ApiError).

use crate::api::error::ApiResult;
use crate::api::types::{
    CreateTicketRequest, CreateTicketResponse, HealthResponse, ListTicketsResponse,
    LookupTicketRequest, LookupTicketResponse, SupportedIssuesResponse, TicketResponse,
    UpdateTicketByIdRequest, UpdateTicketRequest, UpdateTicketResponse,
};
use crate::core::TicketId;
use crate::service::{TicketService, TicketSubmission, UpdateOutcome};
use axum::Json;
use axum::extract::{Path, State};

/// GET /
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "IT Help Desk API is running",
    })
}

/// POST /tickets
pub async fn create_ticket(
    State(service): State<TicketService>,
    Json(request): Json<CreateTicketRequest>,
) -> ApiResult<Json<CreateTicketResponse>> {
    let created = service
        .create(TicketSubmission {
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            issue_description: request.issue_description,
        })
        .await?;

    Ok(Json(CreateTicketResponse {
        success: true,
        ticket_id: created.ticket_id,
        confirmation_number: created.confirmation_number,
        email: created.email,
        issue: created.issue,
        price: created.price,
    }))
}

/// GET /tickets
pub async fn list_tickets(
    State(service): State<TicketService>,
) -> ApiResult<Json<ListTicketsResponse>> {
    let tickets = service.list().await?;
    Ok(Json(ListTicketsResponse {
        success: true,
        tickets,
    }))
}

/// GET /tickets/{id}
pub async fn get_ticket(
    State(service): State<TicketService>,
    Path(id): Path<u64>,
) -> ApiResult<Json<TicketResponse>> {
    let ticket = service.get(TicketId::new(id)).await?;
    Ok(Json(TicketResponse {
        success: true,
        ticket,
    }))
}

/// POST /tickets/lookup
pub async fn lookup_ticket(
    State(service): State<TicketService>,
    Json(request): Json<LookupTicketRequest>,
) -> ApiResult<Json<LookupTicketResponse>> {
    let ticket = service
        .lookup(&request.name, &request.email, request.confirmation_number)
        .await?;

    let message = format!(
        "Found your ticket! Your issue is: {} for ${}",
        ticket.issue, ticket.price
    );
    Ok(Json(LookupTicketResponse {
        success: true,
        ticket,
        message,
    }))
}

/// POST /tickets/update
pub async fn update_ticket(
    State(service): State<TicketService>,
    Json(request): Json<UpdateTicketRequest>,
) -> ApiResult<Json<UpdateTicketResponse>> {
    let outcome = service
        .update_by_identity(
            &request.name,
            &request.email,
            request.confirmation_number,
            &request.field,
            &request.value,
        )
        .await?;
    Ok(Json(update_response(outcome)))
}

/// POST /tickets/update-by-id
pub async fn update_ticket_by_id(
    State(service): State<TicketService>,
    Json(request): Json<UpdateTicketByIdRequest>,
) -> ApiResult<Json<UpdateTicketResponse>> {
    let outcome = service
        .update_by_id(request.ticket_id, &request.field, &request.value)
        .await?;
    Ok(Json(update_response(outcome)))
}

/// GET /supported-issues
pub async fn supported_issues(
    State(service): State<TicketService>,
) -> Json<SupportedIssuesResponse> {
    Json(SupportedIssuesResponse {
        success: true,
        issues: service.supported_issues(),
    })
}

fn update_response(outcome: UpdateOutcome) -> UpdateTicketResponse {
    UpdateTicketResponse {
        success: true,
        message: format!("Updated {}", outcome.field),
        field: outcome.field,
        value: outcome.value,
        ticket_id: outcome.ticket_id,
    }
}
