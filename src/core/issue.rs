//! Issue catalog and keyword classifier
//!
//! The help desk supports a fixed set of four issue categories. Free-text
//! descriptions are resolved against the catalog by case-insensitive
//! substring matching; the first category in declared order with any
//! matching keyword wins. The classifier is a pure function over the static
//! catalog: no scoring, no fuzzy matching, no I/O.

use serde::Serialize;

/// The four supported issue categories, in declared (tie-break) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Wifi,
    Email,
    Performance,
    Printer,
}

impl IssueCategory {
    /// Stable key used in API payloads and logs
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Email => "email",
            Self::Performance => "performance",
            Self::Printer => "printer",
        }
    }
}

/// One entry of the issue catalog
///
/// `description` is the canonical issue text stored on tickets; `price` is
/// the fixed quote for that category. Keywords are all lowercase.
#[derive(Debug, Clone, Serialize)]
pub struct IssueDefinition {
    #[serde(rename = "type")]
    pub category: IssueCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub keywords: &'static [&'static str],
}

/// The static issue catalog, immutable at runtime
///
/// Declared order is the classification tie-break order.
pub static ISSUE_CATALOG: [IssueDefinition; 4] = [
    IssueDefinition {
        category: IssueCategory::Wifi,
        name: "Wi-Fi not working",
        description: "Network connectivity issues",
        price: 20,
        keywords: &[
            "wifi",
            "wi-fi",
            "wireless",
            "internet",
            "connection",
            "network",
            "connectivity",
        ],
    },
    IssueDefinition {
        category: IssueCategory::Email,
        name: "Email login issues",
        description: "Password reset and login problems",
        price: 15,
        keywords: &[
            "email", "login", "password", "reset", "account", "access", "signin",
        ],
    },
    IssueDefinition {
        category: IssueCategory::Performance,
        name: "Slow laptop performance",
        description: "CPU change and optimization",
        price: 25,
        keywords: &[
            "laptop",
            "slow",
            "performance",
            "cpu",
            "speed",
            "computer",
            "pc",
            "optimization",
        ],
    },
    IssueDefinition {
        category: IssueCategory::Printer,
        name: "Printer problems",
        description: "Power plug or driver issues",
        price: 10,
        keywords: &[
            "printer", "printing", "power", "plug", "cable", "hardware", "driver",
        ],
    },
];

/// Resolve a free-text description to a catalog entry
///
/// Returns the first catalog entry (in declared order) with at least one
/// keyword appearing as a substring of the lower-cased input, or `None`
/// when no keyword matches.
#[must_use]
pub fn identify_issue(description: &str) -> Option<&'static IssueDefinition> {
    let text = description.to_lowercase();
    ISSUE_CATALOG
        .iter()
        .find(|issue| issue.keywords.iter().any(|keyword| text.contains(keyword)))
}

/// The message returned when a description matches no supported category
///
/// Enumerates all four categories with their prices so callers (and the
/// voice agent relaying this to a customer) can steer toward a supported
/// issue.
#[must_use]
pub fn unsupported_issue_message() -> String {
    let listing = ISSUE_CATALOG
        .iter()
        .map(|issue| format!("{} (${})", issue.name, issue.price))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Sorry, we don't support that type of issue. We handle: {listing}.")
}
