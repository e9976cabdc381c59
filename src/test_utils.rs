//! Test utilities for helpdesk
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{NewTicket, Ticket, TicketBuilder, TicketId};
use crate::service::TicketSubmission;
use crate::storage::JsonFileStorage;
use chrono::Utc;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a file-backed store in a temporary directory
pub struct TestStore {
    pub temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub storage: JsonFileStorage,
}

impl TestStore {
    /// Create a fresh file-backed store under a temp directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let storage = JsonFileStorage::new(data_dir.clone());
        Self {
            temp_dir,
            data_dir,
            storage,
        }
    }
}

/// A persisted ticket with id 1 and the Wi-Fi catalog issue
pub fn sample_ticket(name: &str, email: &str, confirmation_number: u32) -> Ticket {
    Ticket {
        id: TicketId::new(1),
        name: name.to_string(),
        email: email.to_string(),
        phone: "555-1234".to_string(),
        address: "1 Main St".to_string(),
        issue: "Network connectivity issues".to_string(),
        price: 20,
        confirmation_number,
        created_at: Utc::now(),
    }
}

/// A create-ready ticket with the Wi-Fi catalog issue
pub fn sample_new_ticket(name: &str, email: &str, confirmation_number: u32) -> NewTicket {
    TicketBuilder::new()
        .name(name)
        .email(email)
        .phone("555-1234")
        .address("1 Main St")
        .issue("Network connectivity issues", 20)
        .confirmation_number(confirmation_number)
        .build()
}

/// A complete submission with the given issue description
pub fn sample_submission(issue_description: &str) -> TicketSubmission {
    TicketSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "555-1234".to_string(),
        address: "1 Main St".to_string(),
        issue_description: issue_description.to_string(),
    }
}
