//! Terminal shim and entry point.
//!
//! This module is the thin integration layer between the firmscout library
//! and the terminal: it owns raw mode and the alternate screen, translates
//! key presses into library events, spawns fetch tasks for the actions the
//! handler returns, and redraws when a handler reports a visible change.
//!
//! # Event Loop
//!
//! A single-threaded tokio runtime drives one `select!` loop over two
//! sources:
//!
//! ```text
//! ┌──────────────────────────┐     ┌──────────────────────────┐
//! │ crossterm EventStream    │     │ mpsc fetch responses     │
//! │ (keys, resize)           │     │ (spawned request tasks)  │
//! └────────────┬─────────────┘     └────────────┬─────────────┘
//!              │          select!               │
//!              └──────────────┬─────────────────┘
//!                             ▼
//!                  handle_event(&mut state)
//!                             │
//!              ┌──────────────┴───────────────┐
//!              ▼                              ▼
//!        render if changed           execute actions
//!                                    (spawn fetch / quit)
//! ```
//!
//! # Keybindings
//!
//! Search view, input focus:
//! - `Enter`: submit query
//! - `Tab` / `Down`: focus results
//! - `Esc`: clear query
//! - `Ctrl+c`: quit
//!
//! Search view, results focus:
//! - `j`/`k`, `Down`/`Up`: move selection
//! - `Enter`: open selected company
//! - `/` or `Esc`: back to input
//! - `q`: quit
//!
//! Detail view:
//! - `b` / `Esc`: back to search
//! - `r`: refresh
//! - `q`: quit
//!
//! # Deep Links
//!
//! An optional path argument opens a view directly:
//!
//! ```text
//! firmscout                # search view
//! firmscout /company/42    # detail view for company 42
//! ```

use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use url::Url;

use firmscout::api::HttpDirectory;
use firmscout::app::SearchFocus;
use firmscout::worker::{run_fetch, FetchRequest, FetchResponse};
use firmscout::{
    handle_event, initialize, observability::init_tracing, ui, Action, AppState, Config, Event,
    Route, ScoutError,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("firmscout: {e}");
        std::process::exit(1);
    }
}

async fn run() -> firmscout::Result<()> {
    let initial_route = parse_cli_route()?;

    let config_path = env::var_os("FIRMSCOUT_CONFIG").map_or_else(
        || firmscout::infrastructure::config_dir().join("config.toml"),
        Into::into,
    );
    let config = Config::load(&config_path)?;
    init_tracing(&config);

    let base_url = Url::parse(&config.base_url)
        .map_err(|e| ScoutError::Config(format!("invalid base_url {:?}: {e}", config.base_url)))?;
    let directory: Arc<HttpDirectory> = Arc::new(HttpDirectory::new(
        base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?);

    let mut state = initialize(&config);
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchResponse>();

    // A deep link enters the detail view immediately with its fetch already
    // in flight.
    if let Route::CompanyDetail { id } = initial_route {
        let generation = state.open_company(id.clone());
        tokio::spawn(run_fetch(
            directory.clone(),
            FetchRequest::Company { id, generation },
            tx.clone(),
        ));
    }

    let mut terminal_guard = TerminalGuard::enter()?;
    let mut events = EventStream::new();

    redraw(&state)?;

    loop {
        let event = tokio::select! {
            term_event = events.next() => {
                match term_event {
                    Some(Ok(TermEvent::Key(key))) => map_key_event(&state, &key),
                    Some(Ok(TermEvent::Resize(_, _))) => {
                        redraw(&state)?;
                        None
                    }
                    Some(Ok(_)) => None,
                    Some(Err(e)) => return Err(ScoutError::Terminal(e.to_string())),
                    None => break,
                }
            }
            response = rx.recv() => {
                response.map(Event::FetchResponse)
            }
        };

        let Some(event) = event else { continue };

        let (should_render, actions) = handle_event(&mut state, &event)?;

        let mut quit = false;
        for action in actions {
            match action {
                Action::Fetch(request) => {
                    tokio::spawn(run_fetch(directory.clone(), request, tx.clone()));
                }
                Action::Quit => quit = true,
            }
        }
        if quit {
            break;
        }

        if should_render {
            redraw(&state)?;
        }
    }

    terminal_guard.restore()?;
    Ok(())
}

/// Parses the optional CLI path argument into the initial route.
fn parse_cli_route() -> firmscout::Result<Route> {
    match env::args().nth(1) {
        None => Ok(Route::Search),
        Some(raw) => Route::parse(&raw).ok_or_else(|| {
            ScoutError::Config(format!(
                "unrecognized path {raw:?} (expected \"/\" or \"/company/<id>\")"
            ))
        }),
    }
}

/// Queries the terminal size and renders the current state.
fn redraw(state: &AppState) -> firmscout::Result<()> {
    let (cols, rows) =
        terminal::size().map_err(|e| ScoutError::Terminal(e.to_string()))?;
    ui::render(state, rows as usize, cols as usize);
    Ok(())
}

/// Translates a key press into a library event for the active view and
/// focus. Returns `None` for keys with no meaning in the current context.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    match &state.route {
        Route::Search => match state.search.focus {
            SearchFocus::Input => match key.code {
                KeyCode::Enter => Some(Event::Submit),
                KeyCode::Esc => Some(Event::ClearQuery),
                KeyCode::Tab | KeyCode::Down => Some(Event::FocusResults),
                KeyCode::Backspace => Some(Event::Backspace),
                KeyCode::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            SearchFocus::Results => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Event::MoveDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Event::MoveUp),
                KeyCode::Enter => Some(Event::Select),
                KeyCode::Char('/') | KeyCode::Esc => Some(Event::FocusInput),
                KeyCode::Char('q') => Some(Event::Quit),
                _ => None,
            },
        },
        Route::CompanyDetail { .. } => match key.code {
            KeyCode::Char('b') | KeyCode::Esc => Some(Event::Back),
            KeyCode::Char('r') => Some(Event::Refresh),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
    }
}

/// RAII guard for terminal state.
///
/// Enters raw mode and the alternate screen on construction and undoes
/// both on drop, so a panic or early return still leaves the terminal
/// usable.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn enter() -> firmscout::Result<Self> {
        terminal::enable_raw_mode().map_err(|e| ScoutError::Terminal(e.to_string()))?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .map_err(|e| ScoutError::Terminal(e.to_string()))?;
        Ok(Self { restored: false })
    }

    fn restore(&mut self) -> firmscout::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)
            .map_err(|e| ScoutError::Terminal(e.to_string()))?;
        terminal::disable_raw_mode().map_err(|e| ScoutError::Terminal(e.to_string()))?;
        let _ = io::stdout().flush();
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
