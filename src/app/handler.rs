//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! fetch responses, translating them into state changes and action
//! sequences. It is the control-flow coordinator for both views.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the terminal shim or a fetch task
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations happen via controller methods on [`AppState`]
//! 4. Actions are collected and returned for execution
//!
//! # Event Categories
//!
//! - **Query editing**: `Char`, `Backspace`, `ClearQuery`
//! - **Submission**: `Submit`
//! - **Navigation**: `MoveDown`, `MoveUp`, `FocusResults`, `FocusInput`,
//!   `Select`, `Back`
//! - **Detail**: `Refresh`
//! - **System**: `Quit`, `FetchResponse`

use crate::domain::error::Result;
use crate::worker::{FetchRequest, FetchResponse};

use super::actions::Action;
use super::fetch::FetchState;
use super::modes::SearchFocus;
use super::route::Route;
use super::state::AppState;

/// Events triggered by user input or fetch resolution.
///
/// Each event is a discrete occurrence that may change state and emit
/// actions. The handler processes them sequentially on one thread, so state
/// transitions are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search query (input focus only).
    Char(char),
    /// Removes the last character from the search query (input focus only).
    Backspace,
    /// Clears the query text without touching results.
    ClearQuery,
    /// Submits the current query; a no-op when the trimmed query is empty.
    Submit,
    /// Moves the result selection down one row (wraps to top).
    MoveDown,
    /// Moves the result selection up one row (wraps to bottom).
    MoveUp,
    /// Moves focus from the input box to the result list.
    FocusResults,
    /// Moves focus from the result list back to the input box.
    FocusInput,
    /// Opens the detail view for the selected result.
    Select,
    /// Returns from the detail view to a fresh search view.
    Back,
    /// Re-runs the detail fetch for the current company.
    Refresh,
    /// Exits the application.
    Quit,
    /// A fetch task resolved.
    FetchResponse(FetchResponse),
}

/// Processes an event, mutates application state and returns actions.
///
/// Returns `(should_render, actions)`: `should_render` is `false` when the
/// event left the visible view unchanged (stale responses, ignored keys),
/// so the shim can skip the redraw.
///
/// # Errors
///
/// Reserved for controller operations that can fail; current transitions
/// are infallible.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if state.route != Route::Search || state.search.focus != SearchFocus::Input {
                return Ok((false, vec![]));
            }
            state.search.push_char(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.route != Route::Search || state.search.focus != SearchFocus::Input {
                return Ok((false, vec![]));
            }
            state.search.pop_char();
            Ok((true, vec![]))
        }
        Event::ClearQuery => {
            if state.route != Route::Search || state.search.query.is_empty() {
                return Ok((false, vec![]));
            }
            state.search.query.clear();
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.route != Route::Search {
                return Ok((false, vec![]));
            }
            match state.search.submit() {
                Some((generation, query)) => Ok((
                    true,
                    vec![Action::Fetch(FetchRequest::Search {
                        query: query.into_inner(),
                        generation,
                    })],
                )),
                None => {
                    // Validation skip: whitespace-only input never issues
                    // a request and leaves state unchanged.
                    tracing::debug!("empty query submit ignored");
                    Ok((false, vec![]))
                }
            }
        }
        Event::MoveDown => {
            if state.route != Route::Search || state.search.focus != SearchFocus::Results {
                return Ok((false, vec![]));
            }
            state.search.move_selection_down();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            if state.route != Route::Search || state.search.focus != SearchFocus::Results {
                return Ok((false, vec![]));
            }
            state.search.move_selection_up();
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            // Only a populated result list can take focus.
            if state.route != Route::Search
                || !matches!(state.search.state(), FetchState::Success(_))
            {
                return Ok((false, vec![]));
            }
            state.search.focus = SearchFocus::Results;
            Ok((true, vec![]))
        }
        Event::FocusInput => {
            if state.route != Route::Search || state.search.focus == SearchFocus::Input {
                return Ok((false, vec![]));
            }
            state.search.focus = SearchFocus::Input;
            Ok((true, vec![]))
        }
        Event::Select => {
            if state.route != Route::Search || state.search.focus != SearchFocus::Results {
                return Ok((false, vec![]));
            }
            let Some(summary) = state.search.selected_company() else {
                tracing::debug!("no result selected");
                return Ok((false, vec![]));
            };
            let id = summary.id.clone();
            tracing::debug!(company_id = %id, path = %Route::CompanyDetail { id: id.clone() }.path(), "opening company");
            let generation = state.open_company(id.clone());
            Ok((
                true,
                vec![Action::Fetch(FetchRequest::Company { id, generation })],
            ))
        }
        Event::Back => {
            if !matches!(state.route, Route::CompanyDetail { .. }) {
                return Ok((false, vec![]));
            }
            tracing::debug!("returning to search view");
            state.go_back();
            Ok((true, vec![]))
        }
        Event::Refresh => {
            if !matches!(state.route, Route::CompanyDetail { .. }) {
                return Ok((false, vec![]));
            }
            match state.detail.refresh() {
                Some((generation, id)) => Ok((
                    true,
                    vec![Action::Fetch(FetchRequest::Company { id, generation })],
                )),
                None => Ok((false, vec![])),
            }
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::FetchResponse(response) => match response {
            FetchResponse::Search {
                generation,
                outcome,
            } => {
                let applied = state.search.apply_response(*generation, outcome.clone());
                // A response for a view the user has left is applied to its
                // controller but needs no redraw.
                Ok((applied && state.route == Route::Search, vec![]))
            }
            FetchResponse::Company {
                generation,
                outcome,
            } => {
                let applied = state.detail.apply_response(*generation, outcome.clone());
                let visible = matches!(state.route, Route::CompanyDetail { .. });
                Ok((applied && visible, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, Company, CompanySummary};
    use crate::ui::theme::Theme;
    use crate::worker::FetchRequest;

    fn new_state() -> AppState {
        AppState::new(Theme::default())
    }

    fn acme_summary() -> CompanySummary {
        CompanySummary {
            id: "1".to_string(),
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
        }
    }

    fn acme_company() -> Company {
        Company {
            id: "1".to_string(),
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            location: None,
            employees: None,
            founded_year: None,
            description: None,
        }
    }

    /// Drives a state through typing and submitting a query, returning the
    /// generation of the emitted fetch request.
    fn submit_query(state: &mut AppState, query: &str) -> crate::app::fetch::Generation {
        for c in query.chars() {
            handle_event(state, &Event::Char(c)).expect("char event");
        }
        let (_, actions) = handle_event(state, &Event::Submit).expect("submit event");
        match actions.as_slice() {
            [Action::Fetch(FetchRequest::Search { generation, .. })] => *generation,
            other => panic!("expected one search fetch action, got {other:?}"),
        }
    }

    #[test]
    fn typing_updates_query_without_issuing_requests() {
        let mut state = new_state();
        let (should_render, actions) =
            handle_event(&mut state, &Event::Char('a')).expect("char event");

        assert!(should_render);
        assert!(actions.is_empty(), "query edits must not fetch");
        assert_eq!(state.search.query, "a");
        assert!(matches!(state.search.state(), FetchState::Idle));
    }

    #[test]
    fn whitespace_only_submit_is_silently_ignored() {
        let mut state = new_state();
        for query in ["", "   "] {
            state.search.query = query.to_string();
            let (should_render, actions) =
                handle_event(&mut state, &Event::Submit).expect("submit event");

            assert!(!should_render);
            assert!(actions.is_empty(), "no request for query {query:?}");
            assert!(matches!(state.search.state(), FetchState::Idle));
        }
    }

    #[test]
    fn submit_enters_loading_and_issues_exactly_one_fetch() {
        let mut state = new_state();
        for c in "Acme".chars() {
            handle_event(&mut state, &Event::Char(c)).expect("char event");
        }

        let (should_render, actions) =
            handle_event(&mut state, &Event::Submit).expect("submit event");

        assert!(should_render);
        assert!(state.search.state().is_loading());
        match actions.as_slice() {
            [Action::Fetch(FetchRequest::Search { query, .. })] => {
                assert_eq!(query, "Acme");
            }
            other => panic!("expected one search fetch action, got {other:?}"),
        }
    }

    #[test]
    fn submit_trims_query_before_sending() {
        let mut state = new_state();
        state.search.query = "  Acme  ".to_string();
        let (_, actions) = handle_event(&mut state, &Event::Submit).expect("submit event");
        match actions.as_slice() {
            [Action::Fetch(FetchRequest::Search { query, .. })] => assert_eq!(query, "Acme"),
            other => panic!("expected one search fetch action, got {other:?}"),
        }
    }

    #[test]
    fn search_success_with_results_reaches_success() {
        let mut state = new_state();
        let generation = submit_query(&mut state, "Acme");

        let (should_render, _) = handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Search {
                generation,
                outcome: Ok(vec![acme_summary()]),
            }),
        )
        .expect("response event");

        assert!(should_render);
        assert!(matches!(state.search.state(), FetchState::Success(results) if results.len() == 1));
    }

    #[test]
    fn search_success_with_zero_results_reaches_empty() {
        let mut state = new_state();
        let generation = submit_query(&mut state, "zzzznotreal");

        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Search {
                generation,
                outcome: Ok(vec![]),
            }),
        )
        .expect("response event");

        assert!(matches!(state.search.state(), FetchState::Empty));
        assert_eq!(state.search.submitted.as_deref(), Some("zzzznotreal"));
    }

    #[test]
    fn search_failure_reaches_generic_error() {
        let mut state = new_state();
        let generation = submit_query(&mut state, "Acme");

        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Search {
                generation,
                outcome: Err(ApiError::Server { status: 502 }),
            }),
        )
        .expect("response event");

        match state.search.state() {
            FetchState::Error(message) => {
                assert!(
                    !message.contains("502"),
                    "status codes must not leak to the user"
                );
            }
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[test]
    fn stale_search_response_never_clobbers_newer_result() {
        let mut state = new_state();
        let first = submit_query(&mut state, "x");
        state.search.query.clear();
        let second = submit_query(&mut state, "y");

        // The newer submit resolves first.
        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Search {
                generation: second,
                outcome: Ok(vec![acme_summary()]),
            }),
        )
        .expect("response event");

        // The superseded response arrives late and must be discarded.
        let (should_render, _) = handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Search {
                generation: first,
                outcome: Ok(vec![]),
            }),
        )
        .expect("response event");

        assert!(!should_render, "stale responses must not trigger a redraw");
        assert!(
            matches!(state.search.state(), FetchState::Success(_)),
            "the final state must reflect the newer submit"
        );
    }

    #[test]
    fn selecting_a_result_navigates_and_fetches_the_record() {
        let mut state = new_state();
        let generation = submit_query(&mut state, "Acme");
        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Search {
                generation,
                outcome: Ok(vec![acme_summary()]),
            }),
        )
        .expect("response event");

        handle_event(&mut state, &Event::FocusResults).expect("focus event");
        let (_, actions) = handle_event(&mut state, &Event::Select).expect("select event");

        assert_eq!(state.route.path(), "/company/1");
        assert!(state.detail.state().is_loading());
        match actions.as_slice() {
            [Action::Fetch(FetchRequest::Company { id, .. })] => assert_eq!(id, "1"),
            other => panic!("expected one company fetch action, got {other:?}"),
        }
    }

    #[test]
    fn select_is_rejected_outside_success() {
        let mut state = new_state();
        let (should_render, actions) =
            handle_event(&mut state, &Event::Select).expect("select event");
        assert!(!should_render);
        assert!(actions.is_empty());
        assert_eq!(state.route, Route::Search);
    }

    #[test]
    fn detail_not_found_is_distinct_from_error() {
        let mut state = new_state();
        let generation = state.open_company("404".to_string());
        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Company {
                generation,
                outcome: Err(ApiError::NotFound),
            }),
        )
        .expect("response event");
        assert!(matches!(state.detail.state(), FetchState::NotFound));

        let generation = state.open_company("500".to_string());
        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Company {
                generation,
                outcome: Err(ApiError::Server { status: 500 }),
            }),
        )
        .expect("response event");
        assert!(matches!(state.detail.state(), FetchState::Error(_)));
    }

    #[test]
    fn refresh_from_error_reissues_the_fetch_and_can_succeed() {
        let mut state = new_state();
        let generation = state.open_company("1".to_string());
        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Company {
                generation,
                outcome: Err(ApiError::Transport("connection reset".to_string())),
            }),
        )
        .expect("response event");
        assert!(matches!(state.detail.state(), FetchState::Error(_)));

        let (_, actions) = handle_event(&mut state, &Event::Refresh).expect("refresh event");
        assert!(state.detail.state().is_loading());
        let retry_generation = match actions.as_slice() {
            [Action::Fetch(FetchRequest::Company { id, generation })] => {
                assert_eq!(id, "1", "refresh must re-run the same fetch");
                *generation
            }
            other => panic!("expected one company fetch action, got {other:?}"),
        };

        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Company {
                generation: retry_generation,
                outcome: Ok(acme_company()),
            }),
        )
        .expect("response event");
        assert!(matches!(state.detail.state(), FetchState::Success(_)));
    }

    #[test]
    fn back_resets_search_to_a_fresh_idle() {
        let mut state = new_state();
        let generation = submit_query(&mut state, "Acme");
        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Search {
                generation,
                outcome: Ok(vec![acme_summary()]),
            }),
        )
        .expect("response event");
        handle_event(&mut state, &Event::FocusResults).expect("focus event");
        handle_event(&mut state, &Event::Select).expect("select event");

        handle_event(&mut state, &Event::Back).expect("back event");

        assert_eq!(state.route, Route::Search);
        assert!(
            matches!(state.search.state(), FetchState::Idle),
            "returning must not show stale results"
        );
        assert!(state.search.query.is_empty());
        assert!(state.detail.current_id().is_none());
    }

    #[test]
    fn id_change_while_mounted_discards_the_pending_fetch() {
        let mut state = new_state();
        let first = state.open_company("1".to_string());

        // Direct navigation to a second detail page before the first fetch
        // resolves.
        let second = state.open_company("2".to_string());

        let (should_render, _) = handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Company {
                generation: first,
                outcome: Ok(acme_company()),
            }),
        )
        .expect("response event");
        assert!(!should_render);
        assert!(
            state.detail.state().is_loading(),
            "the old id's response must not populate the new id's view"
        );

        handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Company {
                generation: second,
                outcome: Err(ApiError::NotFound),
            }),
        )
        .expect("response event");
        assert!(matches!(state.detail.state(), FetchState::NotFound));
    }

    #[test]
    fn late_detail_response_after_back_is_suppressed() {
        let mut state = new_state();
        let generation = state.open_company("1".to_string());
        handle_event(&mut state, &Event::Back).expect("back event");

        let (should_render, _) = handle_event(
            &mut state,
            &Event::FetchResponse(FetchResponse::Company {
                generation,
                outcome: Ok(acme_company()),
            }),
        )
        .expect("response event");

        assert!(!should_render);
        assert!(matches!(state.detail.state(), FetchState::Idle));
    }

    #[test]
    fn back_is_available_from_loading() {
        let mut state = new_state();
        state.open_company("1".to_string());
        assert!(state.detail.state().is_loading());

        let (should_render, _) = handle_event(&mut state, &Event::Back).expect("back event");
        assert!(should_render);
        assert_eq!(state.route, Route::Search);
    }

    #[test]
    fn quit_emits_a_quit_action() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Quit).expect("quit event");
        assert_eq!(actions, vec![Action::Quit]);
    }
}
