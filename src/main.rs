//! bookdex binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod connectivity;
mod events;
mod logic;
mod paths;
mod query;
mod sources;
mod state;
mod ui;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct BookdexTimer;

impl tracing_subscriber::fmt::time::FormatTime for BookdexTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    // Initialize tracing logger writing to the bookdex log directory
    {
        let mut log_path = crate::paths::logs_dir();
        log_path.push("bookdex.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(BookdexTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(BookdexTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    let cli = args::Args::parse();
    if let Some(title) = cli.search.as_deref() {
        let code = args::run_search(title, cli.max_results).await;
        std::process::exit(code);
    }

    tracing::info!("bookdex starting");
    if let Err(err) = app::run().await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("bookdex exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    #[test]
    fn bookdex_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::BookdexTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
