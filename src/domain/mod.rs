//! Core domain types for the company directory client.
//!
//! This module contains the fundamental types shared across all layers:
//! the company records returned by the directory service, the validated
//! search query type, and the error types used throughout the crate.
//!
//! # Modules
//!
//! - [`company`]: `Company`, `CompanySummary` and `Query` types
//! - [`error`]: Centralized error handling with `ScoutError` and `ApiError`

pub mod company;
pub mod error;

pub use company::{Company, CompanySummary, Query};
pub use error::{ApiError, Result, ScoutError};
