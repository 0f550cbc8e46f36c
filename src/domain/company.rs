//! Company domain model and query validation.
//!
//! This module defines the two record shapes returned by the directory
//! service and the validated [`Query`] type used to gate search submissions.
//! Both record types are read-only snapshots: the client never mutates them,
//! and every navigation or search event fetches them fresh.

use serde::{Deserialize, Serialize};

/// Full company record returned by the detail endpoint.
///
/// # Fields
///
/// - `id`: Opaque stable identifier, unique and immutable once assigned
/// - `name`: Non-empty display string
/// - `industry`: Required display string
/// - `location`: Optional display string
/// - `employees`: Optional non-negative headcount
/// - `founded_year`: Optional founding year
/// - `description`: Optional free text
///
/// Unknown fields in the server payload are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub industry: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employees: Option<u64>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Abbreviated company representation returned by the search endpoint.
///
/// Sufficient for listing results and navigating to the detail view. Every
/// `id` returned by search is resolvable by the detail fetch; that referential
/// consistency is a contract of the directory service, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub industry: String,
}

/// A validated search query: trimmed and non-empty.
///
/// Empty or whitespace-only input never becomes a `Query`, so it can never
/// be submitted to the directory service.
///
/// # Examples
///
/// ```
/// use firmscout::domain::Query;
///
/// assert_eq!(Query::parse("  Acme  ").map(|q| q.into_inner()), Some("Acme".to_string()));
/// assert!(Query::parse("   ").is_none());
/// assert!(Query::parse("").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Validates raw input into a query, trimming surrounding whitespace.
    ///
    /// Returns `None` when the trimmed input is empty.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the validated query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the query and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
