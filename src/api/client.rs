//! Reqwest-backed directory client.
//!
//! This adapter owns transport details only: URL construction, HTTP error
//! mapping and JSON decoding into domain records. Both operations are
//! single-shot with no retries; the request timeout lives on the underlying
//! reqwest client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use crate::domain::{ApiError, Company, CompanySummary};

/// Abstraction over the company directory consumed by the fetch worker.
///
/// The production implementation is [`HttpDirectory`]; tests substitute
/// in-memory stubs to exercise the fetch lifecycle without a network.
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// Searches the directory with a free-text query.
    ///
    /// Matching semantics are entirely server-defined; the client depends
    /// only on receiving zero or more summaries in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on network failure,
    /// [`ApiError::Server`] on a non-2xx status and [`ApiError::Decode`]
    /// when the body is not a summary array.
    async fn search_companies(&self, query: &str) -> Result<Vec<CompanySummary>, ApiError>;

    /// Fetches one full company record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the service reports the resource
    /// absent (HTTP 404), and the same transport/server/decode failures as
    /// [`CompanyDirectory::search_companies`] otherwise.
    async fn get_company(&self, id: &str) -> Result<Company, ApiError>;
}

/// Directory adapter performing HTTP GET requests against one base URL.
pub struct HttpDirectory {
    client: Client,
    base_url: Url,
}

impl HttpDirectory {
    /// Builds an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the reqwest client cannot be
    /// constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn search_url(&self) -> Result<Url, ApiError> {
        self.base_url
            .join("api/companies")
            .map_err(|e| ApiError::Transport(format!("invalid search url: {e}")))
    }

    fn company_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.search_url()?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport("base url cannot carry path segments".to_string()))?
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl CompanyDirectory for HttpDirectory {
    async fn search_companies(&self, query: &str) -> Result<Vec<CompanySummary>, ApiError> {
        let url = self.search_url()?;
        tracing::debug!(%url, query = %query, "searching companies");

        let response = self
            .client
            .get(url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        decode_summaries(body.as_ref())
    }

    async fn get_company(&self, id: &str) -> Result<Company, ApiError> {
        let url = self.company_url(id)?;
        tracing::debug!(%url, company_id = %id, "fetching company record");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // Resource absence is an expected outcome, not a failure.
            tracing::debug!(company_id = %id, "directory reported company absent");
            return Err(ApiError::NotFound);
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        decode_company(body.as_ref())
    }
}

fn decode_summaries(body: &[u8]) -> Result<Vec<CompanySummary>, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(format!("search payload: {e}")))
}

fn decode_company(body: &[u8]) -> Result<Company, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(format!("company payload: {e}")))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

fn map_status_error(status: StatusCode) -> ApiError {
    ApiError::Server {
        status: status.as_u16(),
    }
}
