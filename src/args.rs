//! Command-line interface: flag parsing and the one-shot search mode that
//! prints matches without launching the TUI.

use clap::Parser;

use crate::query::{build_query, clamp_max_results};
use crate::sources;
use crate::state::DEFAULT_MAX_RESULTS;

/// Command-line arguments for bookdex.
#[derive(Debug, Parser)]
#[command(name = "bookdex", version, about = "Search the Google Books catalog by title")]
pub struct Args {
    /// Run a one-shot search and print matches instead of launching the TUI
    #[arg(short, long, value_name = "TITLE")]
    pub search: Option<String>,

    /// How many results to request, snapped to 5..=40 in steps of 5
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: u32,
}

/// What: Execute a non-interactive search and print one block per match.
///
/// Inputs:
/// - `raw`: Title text from `--search`.
/// - `max_results`: Requested count, clamped onto the stepper grid.
///
/// Output:
/// - Process exit code: 0 on success (including zero matches), 1 when the
///   catalog could not be reached, 2 for empty input.
pub async fn run_search(raw: &str, max_results: u32) -> i32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        eprintln!("bookdex: search title must not be empty");
        return 2;
    }
    let count = clamp_max_results(max_results);
    let url = build_query(trimmed, count);
    tracing::info!(%url, "CLI search");
    match sources::fetch_books(Some(url)).await {
        None => {
            eprintln!("bookdex: catalog unavailable");
            1
        }
        Some(books) if books.is_empty() => {
            println!("No books found for '{trimmed}'");
            0
        }
        Some(books) => {
            for b in &books {
                println!("{}", b.title);
                println!("    {}", b.author);
            }
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn defaults_and_flags_parse() {
        let args = Args::parse_from(["bookdex"]);
        assert!(args.search.is_none());
        assert_eq!(args.max_results, 10);

        let args = Args::parse_from(["bookdex", "--search", "dune", "-n", "25"]);
        assert_eq!(args.search.as_deref(), Some("dune"));
        assert_eq!(args.max_results, 25);
    }
}
