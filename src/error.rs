//! Error types for the helpdesk crate
//!
//! All fallible operations return [`Result`], an alias over
//! [`HelpdeskError`]. The enum spans the whole taxonomy: request validation,
//! ticket lookup, storage failures, and the ambient IO/serialization/config
//! errors they wrap.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// Main error type for helpdesk operations
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// The free-text issue description matched no catalog keyword
    #[error("unsupported issue: {description}")]
    UnsupportedIssue {
        /// The description that failed to classify
        description: String,
    },

    /// An update named a field outside the mutable set
    #[error("invalid update field: '{field}'")]
    InvalidUpdateField { field: String },

    /// No ticket matched the given id or identity triple
    #[error("ticket not found: {reference}")]
    TicketNotFound { reference: String },

    /// A required request field was missing or empty
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// The write reached the backend but modified nothing
    #[error("update did not take effect for ticket {id}")]
    UpdateFailed { id: u64 },

    /// IO error from file-backed storage
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Database error (database-backed store variant)
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Catch-all for errors that don't fit other variants
    #[error("{0}")]
    Custom(String),
}

impl HelpdeskError {
    /// Create a custom error with the given message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Returns a user-friendly message for this error
    ///
    /// Unlike the `Display` impl, which is terse and aimed at logs, this is
    /// the wording shown to callers of the API and CLI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedIssue { .. } => crate::core::issue::unsupported_issue_message(),
            Self::InvalidUpdateField { field } => format!(
                "Invalid field '{field}'. Can only edit: phone, address, issue"
            ),
            Self::TicketNotFound { .. } => "Not found".to_string(),
            Self::MissingRequiredField(field) => format!("Missing required field: {field}"),
            Self::UpdateFailed { .. } => "Update failed".to_string(),
            Self::Io(_) | Self::Json(_) => "Server error".to_string(),
            #[cfg(feature = "database")]
            Self::Database(_) => "Database error".to_string(),
            Self::Config(_) => "Configuration error".to_string(),
            Self::Custom(message) => message.clone(),
        }
    }

    /// Returns suggestions for resolving this error, if any
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedIssue { .. } => vec![
                "Describe the problem using one of the supported categories".to_string(),
                "Run `helpdesk issues` to see the catalog".to_string(),
            ],
            Self::TicketNotFound { .. } => vec![
                "Check the name, email, and confirmation number for typos".to_string(),
            ],
            Self::Config(_) => vec![
                "Check helpdesk.toml and HELPDESK__* environment variables".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Whether the caller can retry after fixing their input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedIssue { .. }
                | Self::InvalidUpdateField { .. }
                | Self::TicketNotFound { .. }
                | Self::MissingRequiredField(_)
        )
    }
}
