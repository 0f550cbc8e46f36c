//! Directory service API client.
//!
//! This module owns the REST contract with the external company directory:
//! request construction, HTTP error mapping and JSON decoding. Nothing here
//! holds view state; the client is a thin operation pair consumed by the
//! fetch worker.

pub mod client;

pub use client::{CompanyDirectory, HttpDirectory};
