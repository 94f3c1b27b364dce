//! Controller logic: stepper clamping, search dispatch with monotonically
//! increasing ids, and application of fetch results.
//!
//! Search results carry the id of the query that produced them; only results
//! matching the latest issued id are ever applied, so a slow fetch that is
//! superseded by a newer search is discarded on arrival rather than
//! overwriting fresher state.

use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::connectivity::ConnectivityProbe;
use crate::query::build_query;
use crate::state::{
    AppState, EmptyNotice, MAX_RESULTS, MIN_RESULTS, QueryInput, RESULTS_STEP, SearchResults,
};

/// How long transient toasts stay visible.
const TOAST_TTL: Duration = Duration::from_secs(3);

/// Raise the result count by one step; no-op at the upper bound.
pub fn increase_max_results(app: &mut AppState) {
    if app.max_results >= MAX_RESULTS {
        return;
    }
    app.max_results += RESULTS_STEP;
    app.count_dirty = true;
}

/// Lower the result count by one step; no-op at the lower bound.
pub fn decrease_max_results(app: &mut AppState) {
    if app.max_results <= MIN_RESULTS {
        return;
    }
    app.max_results -= RESULTS_STEP;
    app.count_dirty = true;
}

/// Show a short-lived notice line without changing search state.
pub fn show_toast(app: &mut AppState, message: &str) {
    app.toast_message = Some(message.to_owned());
    app.toast_expires_at = Some(Instant::now() + TOAST_TTL);
}

/// Drop the toast once its deadline has passed. Called from the tick arm.
pub fn expire_toast(app: &mut AppState) {
    if let Some(deadline) = app.toast_expires_at
        && Instant::now() >= deadline
    {
        app.toast_message = None;
        app.toast_expires_at = None;
    }
}

/// Submit the current input as a search.
///
/// Empty (after trim) input only raises a toast and changes nothing else.
/// Otherwise the displayed books and empty notice are cleared, the busy flag
/// is set, connectivity is re-checked through `probe`, and a [`QueryInput`]
/// with a fresh id goes out over `query_tx`. When the probe reports offline
/// the url is forced to the `None` sentinel so no fetch is attempted.
pub fn submit_search(
    app: &mut AppState,
    probe: &dyn ConnectivityProbe,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    let trimmed = app.input.trim().to_owned();
    if trimmed.is_empty() {
        show_toast(app, "Type a book title to search");
        return;
    }

    app.books.clear();
    app.selected = 0;
    app.list_state.select(None);
    app.empty_notice = EmptyNotice::Cleared;
    app.loading = true;
    app.connected = probe.is_connected();

    let url = app
        .connected
        .then(|| build_query(&trimmed, app.max_results));
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    tracing::info!(id, connected = app.connected, "dispatching search");
    let _ = query_tx.send(QueryInput { id, url });
}

/// Apply a completed fetch to the visible state.
///
/// Results whose id does not match the latest issued query are superseded
/// and dropped without any state change. Matching results either replace the
/// displayed list or, when null/empty, select the empty-state message: "no
/// connection" if the submit-time check failed, "no results" otherwise.
pub fn apply_results(app: &mut AppState, results: SearchResults) {
    if results.id != app.latest_query_id {
        tracing::debug!(
            id = results.id,
            latest = app.latest_query_id,
            "discarding superseded results"
        );
        return;
    }
    app.loading = false;
    match results.books {
        Some(books) if !books.is_empty() => {
            app.books = books;
            app.selected = 0;
            app.list_state.select(Some(0));
            app.empty_notice = EmptyNotice::Cleared;
        }
        _ => {
            app.books.clear();
            app.selected = 0;
            app.list_state.select(None);
            app.empty_notice = if app.connected {
                EmptyNotice::NoResults
            } else {
                EmptyNotice::NoConnection
            };
        }
    }
}

/// Clear displayed books without touching the result count or connectivity
/// flag. Bound to the reset key; the empty region falls back to the hint.
pub fn reset_results(app: &mut AppState) {
    app.books.clear();
    app.selected = 0;
    app.list_state.select(None);
    app.empty_notice = EmptyNotice::Hint;
}

/// Move the selection by `delta`, clamped to the list bounds.
pub fn move_sel(app: &mut AppState, delta: isize) {
    if app.books.is_empty() {
        return;
    }
    let len = app.books.len() as isize;
    let mut idx = app.selected as isize + delta;
    if idx < 0 {
        idx = 0;
    }
    if idx >= len {
        idx = len - 1;
    }
    app.selected = idx as usize;
    app.list_state.select(Some(app.selected));
}
