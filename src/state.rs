//! Core application state types for bookdex's TUI.
//!
//! This module defines the data structures shared across the application:
//! the parsed [`Book`] value, the id-correlated search coordination types,
//! and the central [`AppState`] container mutated by the event loop.

use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::time::Instant;

/// Smallest result count the catalog endpoint is asked for.
pub const MIN_RESULTS: u32 = 5;
/// Largest result count; the API rejects anything above 40.
pub const MAX_RESULTS: u32 = 40;
/// Stepper increment for the result count.
pub const RESULTS_STEP: u32 = 5;
/// Result count used on first start, before any persisted value exists.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// A single catalog match: title and author line, compared by value.
///
/// Books are created only while parsing a catalog response and are replaced
/// wholesale on every successful search; nothing mutates them afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    /// Volume title as reported by the catalog.
    pub title: String,
    /// Authors joined into a single display line.
    pub author: String,
}

/// Search request sent to the background fetch worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Fully built request URL, or `None` when the submit-time connectivity
    /// check failed and the fetch must be skipped.
    pub url: Option<String>,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Parsed books, `Some(vec![])` for a zero-match response, or `None`
    /// when no fetch was attempted or the request failed outright.
    pub books: Option<Vec<Book>>,
}

/// Message shown in place of the results list when it is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyNotice {
    /// Startup hint, before the first search.
    #[default]
    Hint,
    /// Blank region, used while a search is being prepared.
    Cleared,
    /// The last search completed with zero books to show.
    NoResults,
    /// The submit-time connectivity check reported no network.
    NoConnection,
}

/// Global application state shared by the event, networking, and UI layers.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text.
    pub input: String,
    /// Books currently displayed, replaced in full on each completed search.
    pub books: Vec<Book>,
    /// Index into `books` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// How many results to request per search; always a multiple of
    /// [`RESULTS_STEP`] within [`MIN_RESULTS`]..=[`MAX_RESULTS`].
    pub max_results: u32,
    /// Result of the most recent submit-time connectivity check. Starts
    /// `true` so previously displayed books are never invalidated passively.
    pub connected: bool,
    /// Whether a fetch is currently in flight for the latest query.
    pub loading: bool,
    /// Which message the empty-state region shows when `books` is empty.
    pub empty_notice: EmptyNotice,
    /// Transient notice (e.g. empty-input rejection), shown until expiry.
    pub toast_message: Option<String>,
    /// Deadline after which the toast is dropped.
    pub toast_expires_at: Option<Instant>,
    /// Identifier of the latest query whose results may be applied.
    pub latest_query_id: u64,
    /// Next query identifier to allocate.
    pub next_query_id: u64,
    /// Path where the result count is persisted as JSON.
    pub count_path: PathBuf,
    /// Dirty flag indicating `max_results` needs to be saved.
    pub count_dirty: bool,
}

impl Default for AppState {
    /// Construct the startup state: default count, assumed connectivity,
    /// startup hint in the empty-state region.
    fn default() -> Self {
        Self {
            input: String::new(),
            books: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            max_results: DEFAULT_MAX_RESULTS,
            connected: true,
            loading: false,
            empty_notice: EmptyNotice::Hint,
            toast_message: None,
            toast_expires_at: None,
            latest_query_id: 0,
            next_query_id: 1,
            // Result count (XDG state)
            count_path: crate::paths::state_dir().join("max_results.json"),
            count_dirty: false,
        }
    }
}
