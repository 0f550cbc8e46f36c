//! Application state and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for all
//! transient UI state, built from two view controllers that specialize the
//! shared fetch machine in [`super::fetch`]:
//!
//! - [`SearchController`] owns the query text, the search fetch lifecycle
//!   and the selection cursor over results.
//! - [`DetailController`] owns one company id and its fetch lifecycle.
//!
//! Each controller owns its state exclusively; nothing is shared across
//! views. Both controllers live for the whole application lifetime so their
//! generation counters stay monotonic: a view "unmounts" by resetting its
//! controller, which also invalidates any fetch still in flight for it.
//!
//! View models are computed on demand from state snapshots by
//! [`AppState::compute_viewmodel`], which handles result windowing and all
//! user-facing state copy.

use crate::domain::{ApiError, Company, CompanySummary, Query};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CompanyCard, DetailBody, DetailViewModel, FooterInfo, HeaderInfo, Notice, NoticeTone,
    ResultRow, SearchBarInfo, SearchBody, SearchViewModel, UiViewModel,
};

use super::fetch::{FetchController, FetchState, Generation};
use super::modes::SearchFocus;
use super::route::Route;

/// Generic failure copy for the search view. The underlying cause is logged
/// but never surfaced to the user.
const SEARCH_ERROR_MESSAGE: &str = "Error searching companies. Please try again.";

/// Generic failure copy for the detail view.
const DETAIL_ERROR_MESSAGE: &str = "Failed to fetch company details. Please try again later.";

/// Search view controller: query text, fetch lifecycle and selection.
#[derive(Debug, Clone)]
pub struct SearchController {
    /// Raw query text as typed; validated only on submit.
    pub query: String,

    /// The trimmed query of the most recent submit, kept for the
    /// zero-matches message. `None` until the first submit.
    pub submitted: Option<String>,

    /// Current focus within the view (input box vs result list).
    pub focus: SearchFocus,

    /// Fetch lifecycle for the result list.
    fetch: FetchController<Vec<CompanySummary>>,

    /// Zero-based selection cursor within the results.
    selected_index: usize,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    /// Creates a fresh controller: empty query, `Idle`, input focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            submitted: None,
            focus: SearchFocus::Input,
            fetch: FetchController::new(),
            selected_index: 0,
        }
    }

    /// Returns the current fetch state.
    #[must_use]
    pub fn state(&self) -> &FetchState<Vec<CompanySummary>> {
        self.fetch.state()
    }

    /// Appends a character to the query. Pure text edit, no fetch.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Removes the last character from the query. Pure text edit, no fetch.
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Submits the current query.
    ///
    /// Returns `None` without any state change when the trimmed query is
    /// empty (validation skip). Otherwise enters `Loading`, records the
    /// submitted text for the empty-state message, resets the selection and
    /// returns the generation token plus validated query for the fetch
    /// request.
    pub fn submit(&mut self) -> Option<(Generation, Query)> {
        let query = Query::parse(&self.query)?;
        self.submitted = Some(query.as_str().to_string());
        self.selected_index = 0;
        let generation = self.fetch.begin();
        tracing::debug!(query = %query, generation = generation.0, "search submitted");
        Some((generation, query))
    }

    /// Applies a search response, discarding it when stale.
    ///
    /// An ok response with zero results becomes `Empty`; any failure becomes
    /// `Error` with generic copy. Returns whether the response was applied.
    pub fn apply_response(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<CompanySummary>, ApiError>,
    ) -> bool {
        let state = match outcome {
            Ok(results) if results.is_empty() => FetchState::Empty,
            Ok(results) => FetchState::Success(results),
            Err(error) => {
                tracing::warn!(error = %error, "search request failed");
                FetchState::Error(SEARCH_ERROR_MESSAGE.to_string())
            }
        };

        let applied = self.fetch.resolve(generation, state);
        if applied {
            self.selected_index = 0;
        }
        applied
    }

    /// Moves the selection cursor down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.result_count();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the selection cursor up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.result_count();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected result, if results are showing.
    #[must_use]
    pub fn selected_company(&self) -> Option<&CompanySummary> {
        match self.fetch.state() {
            FetchState::Success(results) => results.get(self.selected_index),
            _ => None,
        }
    }

    /// Number of results in `Success`, zero otherwise.
    #[must_use]
    pub fn result_count(&self) -> usize {
        match self.fetch.state() {
            FetchState::Success(results) => results.len(),
            _ => 0,
        }
    }

    /// Returns the view to a fresh mount: cleared query, `Idle`, input
    /// focused. Any in-flight search is invalidated by the generation bump.
    pub fn reset(&mut self) {
        self.query.clear();
        self.submitted = None;
        self.focus = SearchFocus::Input;
        self.selected_index = 0;
        self.fetch.reset();
    }
}

/// Detail view controller: one company id and its fetch lifecycle.
#[derive(Debug, Clone, Default)]
pub struct DetailController {
    /// The id being presented; `None` while the view is unmounted.
    id: Option<String>,

    /// Fetch lifecycle for the record.
    fetch: FetchController<Company>,
}

impl DetailController {
    /// Returns the current fetch state.
    #[must_use]
    pub fn state(&self) -> &FetchState<Company> {
        self.fetch.state()
    }

    /// Returns the id being presented, if mounted.
    #[must_use]
    pub fn current_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Mounts the view for an id and starts the fetch immediately (the
    /// implicit submit at entry). Re-entering with a different id supersedes
    /// any pending fetch for the old one.
    pub fn enter(&mut self, id: String) -> Generation {
        let generation = self.fetch.begin();
        tracing::debug!(company_id = %id, generation = generation.0, "entering detail view");
        self.id = Some(id);
        generation
    }

    /// Re-runs the fetch for the current id.
    ///
    /// A hard transition back to `Loading`: no stale data is carried over
    /// while the refresh is in flight. Returns `None` when unmounted.
    pub fn refresh(&mut self) -> Option<(Generation, String)> {
        let id = self.id.clone()?;
        let generation = self.fetch.begin();
        tracing::debug!(company_id = %id, generation = generation.0, "refreshing detail view");
        Some((generation, id))
    }

    /// Applies a detail response, discarding it when stale.
    ///
    /// Resource absence is an expected outcome and becomes `NotFound`,
    /// distinct from `Error`; all other failures become `Error` with
    /// generic copy. Returns whether the response was applied.
    pub fn apply_response(
        &mut self,
        generation: Generation,
        outcome: Result<Company, ApiError>,
    ) -> bool {
        let state = match outcome {
            Ok(company) => FetchState::Success(company),
            Err(ApiError::NotFound) => FetchState::NotFound,
            Err(error) => {
                tracing::warn!(error = %error, "detail request failed");
                FetchState::Error(DETAIL_ERROR_MESSAGE.to_string())
            }
        };
        self.fetch.resolve(generation, state)
    }

    /// Unmounts the view, invalidating any fetch still in flight.
    pub fn reset(&mut self) {
        self.id = None;
        self.fetch.reset();
    }
}

/// Central application state container.
///
/// Holds the active route, both view controllers and the color theme.
/// Mutated by the event handler in response to user input and fetch
/// responses; view models are computed on demand.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The view currently presented.
    pub route: Route,

    /// Search view controller.
    pub search: SearchController,

    /// Detail view controller.
    pub detail: DetailController,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: search view, nothing fetched.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            route: Route::Search,
            search: SearchController::new(),
            detail: DetailController::default(),
            theme,
        }
    }

    /// Navigates to the detail view for a company id and starts its fetch.
    pub fn open_company(&mut self, id: String) -> Generation {
        self.route = Route::CompanyDetail { id: id.clone() };
        self.detail.enter(id)
    }

    /// Navigates back to the search view.
    ///
    /// The detail controller unmounts and the search view resets to a fresh
    /// `Idle` with a cleared query, the same as a fresh mount.
    pub fn go_back(&mut self) {
        self.detail.reset();
        self.search.reset();
        self.route = Route::Search;
    }

    /// Computes the render model for the current frame.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells (reserved for future
    ///   truncation decisions; current layouts are row-bound)
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UiViewModel {
        match &self.route {
            Route::Search => UiViewModel::Search(self.compute_search_viewmodel(rows)),
            Route::CompanyDetail { .. } => UiViewModel::Detail(self.compute_detail_viewmodel()),
        }
    }

    fn compute_search_viewmodel(&self, rows: usize) -> SearchViewModel {
        let body = match self.search.state() {
            FetchState::Idle => SearchBody::Notice(Notice {
                message: "Ready to explore?".to_string(),
                subtitle: "Type a search above to discover companies across industries."
                    .to_string(),
                tone: NoticeTone::Info,
            }),
            FetchState::Loading => SearchBody::Notice(Notice {
                message: "Searching...".to_string(),
                subtitle: "Querying the company directory.".to_string(),
                tone: NoticeTone::Loading,
            }),
            FetchState::Empty => {
                let term = self.search.submitted.as_deref().unwrap_or_default();
                SearchBody::Notice(Notice {
                    message: format!("No companies found matching \"{term}\""),
                    subtitle: "Try a different search term or check your spelling.".to_string(),
                    tone: NoticeTone::Info,
                })
            }
            FetchState::Error(message) => SearchBody::Notice(Notice {
                message: message.clone(),
                subtitle: "Press Enter to retry the search.".to_string(),
                tone: NoticeTone::Error,
            }),
            // NotFound is never produced by the search controller.
            FetchState::NotFound => SearchBody::Notice(Notice {
                message: "No companies found".to_string(),
                subtitle: "Try a different search term.".to_string(),
                tone: NoticeTone::Info,
            }),
            FetchState::Success(results) => {
                let (rows_window, selected) =
                    window_results(results, self.search.selected_index, available_rows(rows));
                let count_line = if results.len() == 1 {
                    "Found 1 matching company".to_string()
                } else {
                    format!("Found {} matching companies", results.len())
                };
                SearchBody::Results {
                    rows: rows_window
                        .iter()
                        .enumerate()
                        .map(|(i, summary)| ResultRow {
                            name: summary.name.clone(),
                            industry: summary.industry.clone(),
                            is_selected: i == selected,
                        })
                        .collect(),
                    count_line,
                }
            }
        };

        SearchViewModel {
            header: HeaderInfo {
                title: "COMPANY EXPLORER".to_string(),
                tagline: Some(
                    "The search engine where you discover companies, not just data".to_string(),
                ),
            },
            search_bar: SearchBarInfo {
                query: self.search.query.clone(),
                focused: self.search.focus == SearchFocus::Input,
            },
            body,
            footer: FooterInfo {
                keybindings: match self.search.focus {
                    SearchFocus::Input => {
                        "Enter: search  Tab/Down: results  Esc: clear  Ctrl+c: quit".to_string()
                    }
                    SearchFocus::Results => {
                        "j/k: navigate  Enter: open  /: edit query  q: quit".to_string()
                    }
                },
            },
        }
    }

    fn compute_detail_viewmodel(&self) -> DetailViewModel {
        let body = match self.detail.state() {
            // Idle only flashes between mount and the first render.
            FetchState::Idle | FetchState::Loading => DetailBody::Notice(Notice {
                message: "Loading company details".to_string(),
                subtitle: "Please wait while we fetch the information...".to_string(),
                tone: NoticeTone::Loading,
            }),
            FetchState::NotFound => DetailBody::Notice(Notice {
                message: "Company not found".to_string(),
                subtitle: "The company you're looking for doesn't exist in our database."
                    .to_string(),
                tone: NoticeTone::Info,
            }),
            FetchState::Error(message) => DetailBody::Notice(Notice {
                message: message.clone(),
                subtitle: "Press r to retry or Esc to go back.".to_string(),
                tone: NoticeTone::Error,
            }),
            // Empty is never produced by the detail controller.
            FetchState::Empty => DetailBody::Notice(Notice {
                message: "Company not found".to_string(),
                subtitle: "The company you're looking for doesn't exist in our database."
                    .to_string(),
                tone: NoticeTone::Info,
            }),
            FetchState::Success(company) => DetailBody::Company(company_card(company)),
        };

        DetailViewModel {
            header: HeaderInfo {
                title: "COMPANY DETAILS".to_string(),
                tagline: None,
            },
            body,
            footer: FooterInfo {
                keybindings: "b/Esc: back to search  r: refresh  q: quit".to_string(),
            },
        }
    }
}

/// Rows left for the result table after subtracting UI chrome: blank line,
/// two header lines, two borders, three search-bar lines, count line and
/// footer.
fn available_rows(total_rows: usize) -> usize {
    total_rows.saturating_sub(12).max(1)
}

/// Windows the result list around the selection.
///
/// Centers the selected index in the window where possible and clamps the
/// window at both ends so it always shows `available` rows when the list is
/// long enough. Returns the visible slice and the selection index relative
/// to it.
fn window_results<'a>(
    results: &'a [CompanySummary],
    selected_index: usize,
    available: usize,
) -> (&'a [CompanySummary], usize) {
    let mut start = selected_index.saturating_sub(available / 2);
    let end = (start + available).min(results.len());

    if end - start < available && results.len() >= available {
        start = end.saturating_sub(available);
    }

    (&results[start..end], selected_index - start)
}

/// Builds the display-ready card for a fetched company.
fn company_card(company: &Company) -> CompanyCard {
    let mut facts = Vec::new();
    if let Some(employees) = company.employees {
        facts.push(("Employees".to_string(), format_grouped(employees)));
    }
    if let Some(year) = company.founded_year {
        facts.push(("Founded".to_string(), year.to_string()));
    }
    facts.push(("Industry".to_string(), company.industry.clone()));
    if let Some(location) = &company.location {
        facts.push(("Location".to_string(), location.clone()));
    }

    CompanyCard {
        name: company.name.clone(),
        industry: company.industry.clone(),
        location: company.location.clone(),
        facts,
        description: company.description.clone(),
    }
}

/// Formats an integer with thousands separators ("1234567" → "1,234,567").
fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(count: usize) -> Vec<CompanySummary> {
        (0..count)
            .map(|i| CompanySummary {
                id: format!("{i}"),
                name: format!("Company {i}"),
                industry: "Testing".to_string(),
            })
            .collect()
    }

    fn state_with_results(count: usize) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.search.query = "acme".to_string();
        let (generation, _) = state.search.submit().expect("query is non-empty");
        state.search.apply_response(generation, Ok(summaries(count)));
        state
    }

    #[test]
    fn idle_and_empty_render_distinct_messages() {
        let idle = AppState::new(Theme::default());
        let UiViewModel::Search(idle_vm) = idle.compute_viewmodel(24, 80) else {
            panic!("search route must produce a search view model");
        };

        let mut searched = AppState::new(Theme::default());
        searched.search.query = "zzzznotreal".to_string();
        let (generation, _) = searched.search.submit().expect("query is non-empty");
        searched.search.apply_response(generation, Ok(vec![]));
        let UiViewModel::Search(empty_vm) = searched.compute_viewmodel(24, 80) else {
            panic!("search route must produce a search view model");
        };

        let (SearchBody::Notice(idle_notice), SearchBody::Notice(empty_notice)) =
            (&idle_vm.body, &empty_vm.body)
        else {
            panic!("both states must render notices");
        };
        assert_ne!(idle_notice.message, empty_notice.message);
        assert!(
            empty_notice.message.contains("zzzznotreal"),
            "empty state must name the searched term"
        );
    }

    #[test]
    fn selection_wraps_at_both_ends() {
        let mut state = state_with_results(3);

        state.search.move_selection_up();
        assert_eq!(state.search.selected_company().map(|c| c.id.as_str()), Some("2"));

        state.search.move_selection_down();
        assert_eq!(state.search.selected_company().map(|c| c.id.as_str()), Some("0"));
    }

    #[test]
    fn windowing_keeps_selection_visible_in_long_lists() {
        let results = summaries(100);
        let (window, relative) = window_results(&results, 90, 10);
        assert_eq!(window.len(), 10);
        assert_eq!(window[relative].id, "90");
    }

    #[test]
    fn windowing_clamps_at_list_end() {
        let results = summaries(100);
        let (window, relative) = window_results(&results, 99, 10);
        assert_eq!(window.len(), 10);
        assert_eq!(window[relative].id, "99");
        assert_eq!(window[0].id, "90");
    }

    #[test]
    fn success_viewmodel_reports_result_count() {
        let state = state_with_results(3);
        let UiViewModel::Search(vm) = state.compute_viewmodel(24, 80) else {
            panic!("search route must produce a search view model");
        };
        let SearchBody::Results { count_line, .. } = vm.body else {
            panic!("success must render results");
        };
        assert_eq!(count_line, "Found 3 matching companies");
    }

    #[test]
    fn singular_result_count_is_grammatical() {
        let state = state_with_results(1);
        let UiViewModel::Search(vm) = state.compute_viewmodel(24, 80) else {
            panic!("search route must produce a search view model");
        };
        let SearchBody::Results { count_line, .. } = vm.body else {
            panic!("success must render results");
        };
        assert_eq!(count_line, "Found 1 matching company");
    }

    #[test]
    fn detail_not_found_and_error_render_differently() {
        let mut state = AppState::new(Theme::default());
        let generation = state.open_company("404".to_string());
        state.detail.apply_response(generation, Err(ApiError::NotFound));
        let UiViewModel::Detail(not_found_vm) = state.compute_viewmodel(24, 80) else {
            panic!("detail route must produce a detail view model");
        };

        let generation = state.open_company("500".to_string());
        state
            .detail
            .apply_response(generation, Err(ApiError::Server { status: 500 }));
        let UiViewModel::Detail(error_vm) = state.compute_viewmodel(24, 80) else {
            panic!("detail route must produce a detail view model");
        };

        let (DetailBody::Notice(not_found), DetailBody::Notice(error)) =
            (&not_found_vm.body, &error_vm.body)
        else {
            panic!("both states must render notices");
        };
        assert_ne!(not_found.message, error.message);
        assert_eq!(not_found.tone, NoticeTone::Info);
        assert_eq!(error.tone, NoticeTone::Error);
    }

    #[test]
    fn company_card_formats_employee_counts() {
        let card = company_card(&Company {
            id: "1".to_string(),
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            location: Some("Springfield".to_string()),
            employees: Some(1234567),
            founded_year: Some(1947),
            description: None,
        });

        assert!(card
            .facts
            .contains(&("Employees".to_string(), "1,234,567".to_string())));
        assert!(card.facts.contains(&("Founded".to_string(), "1947".to_string())));
    }

    #[test]
    fn grouping_handles_short_values() {
        assert_eq!(format_grouped(7), "7");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
    }
}
