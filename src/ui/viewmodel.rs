//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! no business logic, only display-ready data: windowed result rows,
//! formatted stat lines and the exact notice copy for each view state.

/// The complete render model for one frame, one variant per route.
#[derive(Debug, Clone)]
pub enum UiViewModel {
    /// Search view: input bar plus results or a notice.
    Search(SearchViewModel),
    /// Detail view: company card or a notice.
    Detail(DetailViewModel),
}

/// Render model for the search view.
#[derive(Debug, Clone)]
pub struct SearchViewModel {
    /// Title and tagline for the header block.
    pub header: HeaderInfo,
    /// Search input box state.
    pub search_bar: SearchBarInfo,
    /// Results table or state notice.
    pub body: SearchBody,
    /// Keybinding hints for the current focus.
    pub footer: FooterInfo,
}

/// Render model for the detail view.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    /// Title for the header block.
    pub header: HeaderInfo,
    /// Company card or state notice.
    pub body: DetailBody,
    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text displayed across the top.
    pub title: String,
    /// Optional tagline under the title.
    pub tagline: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  Enter: open").
    pub keybindings: String,
}

/// Search input box state.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,
    /// Whether the input box has focus (cursor marker rendered).
    pub focused: bool,
}

/// Body of the search view.
#[derive(Debug, Clone)]
pub enum SearchBody {
    /// Idle, loading, empty or error state rendered as a centered notice.
    Notice(Notice),
    /// At least one result to display.
    Results {
        /// Visible window of result rows.
        rows: Vec<ResultRow>,
        /// Count line above the table (e.g., "Found 3 matching companies").
        count_line: String,
    },
}

/// One row of the result table.
#[derive(Debug, Clone)]
pub struct ResultRow {
    /// Company display name.
    pub name: String,
    /// Industry column text.
    pub industry: String,
    /// Whether this row holds the selection cursor.
    pub is_selected: bool,
}

/// Body of the detail view.
#[derive(Debug, Clone)]
pub enum DetailBody {
    /// Loading, not-found or error state rendered as a centered notice.
    Notice(Notice),
    /// A fetched company record.
    Company(CompanyCard),
}

/// Display-ready company record.
#[derive(Debug, Clone)]
pub struct CompanyCard {
    /// Company name.
    pub name: String,
    /// Industry tag line.
    pub industry: String,
    /// Optional location tag line.
    pub location: Option<String>,
    /// Formatted stat lines as (label, value) pairs.
    pub facts: Vec<(String, String)>,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// A centered two-line message with a tone controlling its color.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Primary message line.
    pub message: String,
    /// Secondary explanatory line.
    pub subtitle: String,
    /// Visual tone of the message.
    pub tone: NoticeTone,
}

/// Visual tone for a [`Notice`].
///
/// `Info` covers expected outcomes (nothing searched yet, zero matches,
/// record absent); `Error` covers transport and server failures and is the
/// only tone rendered in the error color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    /// Informational state, including not-found and empty results.
    Info,
    /// A request is in flight.
    Loading,
    /// Transport or server failure.
    Error,
}
