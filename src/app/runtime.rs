//! Application runtime: terminal setup, background workers, and the event
//! loop that owns all state mutation.

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    select,
    sync::mpsc,
    time::{Duration, interval},
};

use std::sync::Arc;

use crate::connectivity::DnsProbe;
use crate::logic::{apply_results, expire_toast};
use crate::sources;
use crate::state::{AppState, QueryInput, SearchResults};
use crate::ui::ui;

use super::persist::{load_max_results, maybe_flush_count};
use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Run the bookdex TUI end-to-end: initialize the terminal and state, spawn
/// the fetch worker and input-reader thread, drive the event loop, and
/// restore the terminal on exit.
///
/// State mutation happens exclusively on this loop; the fetch worker hands
/// results back over a channel and stale ids are discarded on arrival. With
/// `BOOKDEX_TEST_HEADLESS=1` no terminal is touched and no frames are drawn.
pub async fn run() -> Result<()> {
    let headless = std::env::var("BOOKDEX_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    if let Some(n) = load_max_results(&app.count_path) {
        app.max_results = n;
    }
    tracing::info!(
        count = app.max_results,
        path = %app.count_path.display(),
        "restored result count"
    );

    let probe = Arc::new(DnsProbe::catalog());

    // Reachability refresher: the bounded blocking check runs off the event
    // loop, so submit-time reads only hit the cached answer.
    {
        let probe = Arc::clone(&probe);
        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(5));
            loop {
                ticker.tick().await;
                let p = Arc::clone(&probe);
                if tokio::task::spawn_blocking(move || p.refresh()).await.is_err() {
                    break;
                }
            }
        });
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (query_tx, mut query_rx) = mpsc::unbounded_channel::<QueryInput>();
    let (results_tx, mut results_rx) = mpsc::unbounded_channel::<SearchResults>();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();

    // Fetch worker: one spawned task per dispatched query so a slow fetch
    // never delays a newer one. The event loop discards stale ids.
    tokio::spawn(async move {
        while let Some(q) = query_rx.recv().await {
            let tx = results_tx.clone();
            tokio::spawn(async move {
                let books = sources::fetch_books(q.url).await;
                let _ = tx.send(SearchResults { id: q.id, books });
            });
        }
    });

    if !headless {
        std::thread::spawn(move || {
            loop {
                match crossterm::event::read() {
                    Ok(ev) => {
                        let _ = event_tx.send(ev);
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                }
            }
        });
    }

    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(200));
        loop {
            ticker.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, probe.as_ref(), &query_tx) {
                    break;
                }
            }
            Some(results) = results_rx.recv() => {
                apply_results(&mut app, results);
            }
            Some(()) = tick_rx.recv() => {
                maybe_flush_count(&mut app);
                expire_toast(&mut app);
            }
            else => break,
        }
    }

    maybe_flush_count(&mut app);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
