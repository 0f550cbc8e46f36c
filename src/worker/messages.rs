//! Fetch request and response message types.
//!
//! This is the protocol between the single-threaded event loop and the
//! spawned fetch tasks. Each request names one directory operation and
//! carries the generation token current at submit time; the matching
//! response echoes the token back so the controller can reject results from
//! requests it has since superseded.

use crate::app::fetch::Generation;
use crate::domain::{ApiError, Company, CompanySummary};

/// A single directory operation to execute off the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Search the directory with a validated query.
    Search {
        /// Trimmed, non-empty query text.
        query: String,
        /// Token tagging this request for staleness checks.
        generation: Generation,
    },

    /// Fetch one company record by identifier.
    Company {
        /// Opaque company identifier.
        id: String,
        /// Token tagging this request for staleness checks.
        generation: Generation,
    },
}

/// The resolution of one [`FetchRequest`], delivered to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    /// A search request completed.
    Search {
        /// Token echoed from the originating request.
        generation: Generation,
        /// Summaries in server order, or the failure.
        outcome: Result<Vec<CompanySummary>, ApiError>,
    },

    /// A company detail request completed.
    Company {
        /// Token echoed from the originating request.
        generation: Generation,
        /// The full record, or the failure (including `NotFound`).
        outcome: Result<Company, ApiError>,
    },
}
