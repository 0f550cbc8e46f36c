//! Fetch task execution.
//!
//! One task per request: perform the directory call, post exactly one
//! response, exit. There is no retry and no cancellation; a request that
//! outlives its usefulness is neutralized by the generation check when its
//! response arrives, and a response whose receiver is gone (the app quit)
//! is dropped silently.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::Instrument;

use crate::api::CompanyDirectory;

use super::messages::{FetchRequest, FetchResponse};

/// Executes one fetch request against the directory and posts the response.
///
/// Intended to be spawned onto the runtime by the action executor; the
/// caller keeps no handle to the task.
pub async fn run_fetch<D: CompanyDirectory + ?Sized>(
    directory: Arc<D>,
    request: FetchRequest,
    responses: UnboundedSender<FetchResponse>,
) {
    let response = match request {
        FetchRequest::Search { query, generation } => {
            // The span is attached to the future rather than entered: an
            // entered guard must not be held across an await point.
            let span = tracing::debug_span!("fetch_search", query = %query, generation = generation.0);

            let outcome = async {
                let outcome = directory.search_companies(&query).await;
                match &outcome {
                    Ok(results) => {
                        tracing::debug!(result_count = results.len(), "search completed");
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, "search failed");
                    }
                }
                outcome
            }
            .instrument(span)
            .await;

            FetchResponse::Search {
                generation,
                outcome,
            }
        }
        FetchRequest::Company { id, generation } => {
            let span = tracing::debug_span!("fetch_company", company_id = %id, generation = generation.0);

            let outcome = async {
                let outcome = directory.get_company(&id).await;
                match &outcome {
                    Ok(company) => {
                        tracing::debug!(company_name = %company.name, "company record fetched");
                    }
                    Err(crate::domain::ApiError::NotFound) => {
                        // Expected outcome; not alarmed.
                        tracing::debug!("company record absent");
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, "company fetch failed");
                    }
                }
                outcome
            }
            .instrument(span)
            .await;

            FetchResponse::Company {
                generation,
                outcome,
            }
        }
    };

    // The receiver disappearing means the app is shutting down; the
    // response has nowhere meaningful to go.
    let _ = responses.send(response);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fetch::Generation;
    use crate::domain::{ApiError, Company, CompanySummary};
    use async_trait::async_trait;
    use tokio::sync::mpsc;

    struct StubDirectory {
        summaries: Vec<CompanySummary>,
        company: Result<Company, ApiError>,
    }

    #[async_trait]
    impl crate::api::CompanyDirectory for StubDirectory {
        async fn search_companies(&self, _query: &str) -> Result<Vec<CompanySummary>, ApiError> {
            Ok(self.summaries.clone())
        }

        async fn get_company(&self, _id: &str) -> Result<Company, ApiError> {
            self.company.clone()
        }
    }

    fn stub(company: Result<Company, ApiError>) -> Arc<StubDirectory> {
        Arc::new(StubDirectory {
            summaries: vec![CompanySummary {
                id: "1".to_string(),
                name: "Acme Corp".to_string(),
                industry: "Manufacturing".to_string(),
            }],
            company,
        })
    }

    #[tokio::test]
    async fn search_response_echoes_request_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let request = FetchRequest::Search {
            query: "Acme".to_string(),
            generation: Generation(7),
        };

        run_fetch(stub(Err(ApiError::NotFound)), request, tx).await;

        match rx.recv().await.expect("response should arrive") {
            FetchResponse::Search {
                generation,
                outcome,
            } => {
                assert_eq!(generation, Generation(7));
                assert_eq!(outcome.expect("search should succeed").len(), 1);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn company_failure_is_delivered_not_swallowed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let request = FetchRequest::Company {
            id: "absent-id".to_string(),
            generation: Generation(1),
        };

        run_fetch(stub(Err(ApiError::NotFound)), request, tx).await;

        match rx.recv().await.expect("response should arrive") {
            FetchResponse::Company { outcome, .. } => {
                assert_eq!(outcome, Err(ApiError::NotFound));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_task_is_spawnable_onto_the_runtime() {
        // The action executor spawns fetch tasks, so the future must stay
        // Send end to end, including across the directory await.
        let (tx, mut rx) = mpsc::unbounded_channel();
        let request = FetchRequest::Company {
            id: "1".to_string(),
            generation: Generation(3),
        };

        let company = Company {
            id: "1".to_string(),
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            location: None,
            employees: None,
            founded_year: None,
            description: None,
        };
        tokio::spawn(run_fetch(stub(Ok(company)), request, tx))
            .await
            .expect("task should run to completion");

        match rx.recv().await.expect("response should arrive") {
            FetchResponse::Company {
                generation,
                outcome,
            } => {
                assert_eq!(generation, Generation(3));
                assert_eq!(outcome.expect("fetch should succeed").name, "Acme Corp");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_panic_the_task() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        run_fetch(
            stub(Err(ApiError::Transport("gone".to_string()))),
            FetchRequest::Search {
                query: "Acme".to_string(),
                generation: Generation(1),
            },
            tx,
        )
        .await;
    }
}
