//! End-to-end tests of the HTTP API over an in-memory store

#![cfg(feature = "api")]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use helpdesk::api::router;
use helpdesk::service::TicketService;
use helpdesk::storage::MemoryStorage;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn test_router() -> Router {
    router(TicketService::new(Arc::new(MemoryStorage::new())))
}

/// Send one request through the router and decode the JSON body
async fn send(
    router: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn create_body(name: &str, email: &str, issue_description: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "phone": "555-1234",
        "address": "1 Main St",
        "issue_description": issue_description,
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_router();
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "IT Help Desk API is running");
}

#[tokio::test]
async fn test_create_printer_ticket() {
    let app = test_router();
    let (status, body) = send(
        &app,
        "POST",
        "/tickets",
        Some(create_body(
            "Jane Doe",
            "jane@example.com",
            "printer won't turn on",
        )),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["issue"], "Power plug or driver issues");
    assert_eq!(body["price"], 10);
    assert_eq!(body["email"], "jane@example.com");

    let confirmation = body["confirmation_number"].as_u64().unwrap();
    assert!((10_000..=99_999).contains(&confirmation));
}

#[tokio::test]
async fn test_create_unsupported_issue_persists_nothing() {
    let app = test_router();
    let (status, body) = send(
        &app,
        "POST",
        "/tickets",
        Some(create_body("Jane Doe", "jane@example.com", "my cat is sick")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Wi-Fi not working ($20)"));
    assert!(error.contains("Email login issues ($15)"));
    assert!(error.contains("Slow laptop performance ($25)"));
    assert!(error.contains("Printer problems ($10)"));

    // No ticket was written
    let (status, body) = send(&app, "GET", "/tickets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tickets"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_then_lookup_with_varied_case() {
    let app = test_router();
    let (_, created) = send(
        &app,
        "POST",
        "/tickets",
        Some(create_body("Jane Doe", "jane@example.com", "wifi is down")),
    )
    .await;
    let confirmation = created["confirmation_number"].as_u64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/tickets/lookup",
        Some(json!({
            "name": "  JANE DOE ",
            "email": "Jane@Example.COM",
            "confirmation_number": confirmation,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["ticket"]["issue"], "Network connectivity issues");
    assert_eq!(
        body["message"],
        "Found your ticket! Your issue is: Network connectivity issues for $20"
    );
}

#[tokio::test]
async fn test_lookup_unknown_ticket_is_404() {
    let app = test_router();
    let (status, body) = send(
        &app,
        "POST",
        "/tickets/lookup",
        Some(json!({
            "name": "Nobody",
            "email": "no@example.com",
            "confirmation_number": 12345,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Not found"}));
}

#[tokio::test]
async fn test_list_returns_most_recent_first() {
    let app = test_router();
    send(
        &app,
        "POST",
        "/tickets",
        Some(create_body("Jane Doe", "jane@example.com", "wifi is down")),
    )
    .await;
    send(
        &app,
        "POST",
        "/tickets",
        Some(create_body("John Roe", "john@example.com", "printer jammed")),
    )
    .await;

    let (status, body) = send(&app, "GET", "/tickets", None).await;
    assert_eq!(status, StatusCode::OK);

    let tickets = body["tickets"].as_array().unwrap();
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0]["issue"], "Power plug or driver issues");
    assert_eq!(tickets[1]["issue"], "Network connectivity issues");
}

#[tokio::test]
async fn test_get_ticket_by_id() {
    let app = test_router();
    let (_, created) = send(
        &app,
        "POST",
        "/tickets",
        Some(create_body("Jane Doe", "jane@example.com", "wifi is down")),
    )
    .await;
    let id = created["ticket_id"].as_u64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/tickets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticket"]["name"], "Jane Doe");

    let (status, _) = send(&app, "GET", "/tickets/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_by_identity_changes_phone() {
    let app = test_router();
    let (_, created) = send(
        &app,
        "POST",
        "/tickets",
        Some(create_body("Jane Doe", "jane@example.com", "wifi is down")),
    )
    .await;
    let confirmation = created["confirmation_number"].as_u64().unwrap();
    let id = created["ticket_id"].as_u64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/tickets/update",
        Some(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "confirmation_number": confirmation,
            "field": "phone",
            "value": "555-9999",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["field"], "phone");
    assert_eq!(body["value"], "555-9999");
    assert_eq!(body["ticket_id"], id);
    assert_eq!(body["message"], "Updated phone");

    let (_, fetched) = send(&app, "GET", &format!("/tickets/{id}"), None).await;
    assert_eq!(fetched["ticket"]["phone"], "555-9999");
}

#[tokio::test]
async fn test_update_issue_by_id_reclassifies_and_reprices() {
    let app = test_router();
    let (_, created) = send(
        &app,
        "POST",
        "/tickets",
        Some(create_body("Jane Doe", "jane@example.com", "printer jammed")),
    )
    .await;
    let id = created["ticket_id"].as_u64().unwrap();
    let confirmation = created["confirmation_number"].as_u64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/tickets/update-by-id",
        Some(json!({
            "ticket_id": id,
            "field": "issue",
            "value": "my wifi is down",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, fetched) = send(&app, "GET", &format!("/tickets/{id}"), None).await;
    assert_eq!(fetched["ticket"]["issue"], "Network connectivity issues");
    assert_eq!(fetched["ticket"]["price"], 20);
    // The confirmation number never changes
    assert_eq!(fetched["ticket"]["confirmation_number"], confirmation);
}

#[tokio::test]
async fn test_update_rejects_invalid_field() {
    let app = test_router();
    let (_, created) = send(
        &app,
        "POST",
        "/tickets",
        Some(create_body("Jane Doe", "jane@example.com", "wifi is down")),
    )
    .await;
    let id = created["ticket_id"].as_u64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/tickets/update-by-id",
        Some(json!({"ticket_id": id, "field": "email", "value": "x@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("phone, address, issue"));
}

#[tokio::test]
async fn test_update_by_identity_unknown_ticket_is_404() {
    let app = test_router();
    let (status, body) = send(
        &app,
        "POST",
        "/tickets/update",
        Some(json!({
            "name": "Nobody",
            "email": "no@example.com",
            "confirmation_number": 11111,
            "field": "phone",
            "value": "555-0000",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_supported_issues_catalog() {
    let app = test_router();
    let (status, body) = send(&app, "GET", "/supported-issues", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let issues = body["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 4);
    assert_eq!(issues[0]["type"], "wifi");
    assert_eq!(issues[0]["price"], 20);
    assert_eq!(issues[3]["type"], "printer");
    assert_eq!(issues[3]["price"], 10);
    assert!(issues[1]["keywords"].as_array().unwrap().contains(&json!("password")));
}
