//! Catalog fetching: one GET against the volumes endpoint per search,
//! parsed into [`Book`] records.
//!
//! Failure handling is deliberately coarse. Transport errors, non-2xx
//! statuses, and malformed bodies are logged and collapsed into `None`; the
//! controller treats that the same as zero matches. A response without an
//! `items` field is a real zero-match answer and yields an empty vec instead,
//! so "did not attempt" and "nothing found" stay distinguishable.

use serde_json::Value;
use std::sync::LazyLock;

use crate::state::Book;
use crate::util::{join_arr, s};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Shown when a volume carries no `volumeInfo.title`.
pub const UNKNOWN_TITLE: &str = "Unknown title";
/// Shown when a volume carries no `volumeInfo.authors` array.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

async fn get_json(url: &str) -> Result<Value> {
    let resp = CLIENT.get(url).send().await?.error_for_status()?;
    Ok(resp.json::<Value>().await?)
}

/// Parse a volumes response body into books, in response order.
///
/// Missing titles and author arrays fall back to the placeholder strings;
/// an absent `items` field means zero matches and yields an empty vec.
#[must_use]
pub fn parse_volumes(v: &Value) -> Vec<Book> {
    let Some(items) = v.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut books = Vec::with_capacity(items.len());
    for item in items {
        let info = item.get("volumeInfo").unwrap_or(&Value::Null);
        let title = match s(info, "title") {
            t if t.is_empty() => UNKNOWN_TITLE.to_owned(),
            t => t,
        };
        let author =
            join_arr(info, "authors", ", ").unwrap_or_else(|| UNKNOWN_AUTHOR.to_owned());
        books.push(Book { title, author });
    }
    books
}

/// Fetch and parse one catalog search.
///
/// A `None` url is the "do not attempt" sentinel (used when the submit-time
/// connectivity check failed) and returns `None` without touching the
/// network. Any request or parse failure is logged and also returns `None`.
pub async fn fetch_books(url: Option<String>) -> Option<Vec<Book>> {
    let url = url?;
    tracing::info!(%url, "fetching catalog search");
    match get_json(&url).await {
        Ok(v) => Some(parse_volumes(&v)),
        Err(e) => {
            tracing::warn!(error = %e, "catalog request failed");
            None
        }
    }
}
