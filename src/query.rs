//! Request-string assembly for the Google Books volumes endpoint.
//!
//! The catalog expects title words joined by `+` after the `intitle:`
//! qualifier. Only whitespace is folded; every other character passes through
//! verbatim, which the endpoint tolerates in practice. Callers reject empty
//! input before building a query.

use crate::state::{MAX_RESULTS, MIN_RESULTS, RESULTS_STEP};

/// Fixed base URL including the `intitle:` qualifier.
pub const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes?q=intitle:";
/// Query parameter carrying the requested result count.
pub const COUNT_PARAM: &str = "&maxResults=";

/// Build the full request URL from raw user text and a result count.
///
/// Whitespace runs in `raw` collapse into single `+` separators with no
/// leading or trailing artifacts. `raw` must contain at least one word.
#[must_use]
pub fn build_query(raw: &str, max_results: u32) -> String {
    let mut joined = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !joined.is_empty() {
            joined.push('+');
        }
        joined.push_str(word);
    }
    format!("{SEARCH_ENDPOINT}{joined}{COUNT_PARAM}{max_results}")
}

/// Snap an arbitrary count onto the stepper grid: a multiple of
/// [`RESULTS_STEP`] within [`MIN_RESULTS`]..=[`MAX_RESULTS`].
///
/// Used when restoring a persisted value or accepting a CLI flag, so the
/// stepper invariant holds no matter where the number came from.
#[must_use]
pub fn clamp_max_results(n: u32) -> u32 {
    let stepped = n - n % RESULTS_STEP;
    stepped.clamp(MIN_RESULTS, MAX_RESULTS)
}

#[cfg(test)]
mod tests {
    use super::{build_query, clamp_max_results};

    #[test]
    fn builds_the_documented_example() {
        assert_eq!(
            build_query("harry potter", 10),
            "https://www.googleapis.com/books/v1/volumes?q=intitle:harry+potter&maxResults=10"
        );
    }

    #[test]
    fn collapses_irregular_whitespace() {
        assert_eq!(build_query("  foo   bar ", 5), build_query("foo bar", 5));
        assert_eq!(build_query("\tfoo\n bar", 5), build_query("foo bar", 5));
    }

    #[test]
    fn single_word_has_no_separator() {
        assert_eq!(
            build_query("dune", 40),
            "https://www.googleapis.com/books/v1/volumes?q=intitle:dune&maxResults=40"
        );
    }

    /// Non-space characters are passed through unencoded. The endpoint
    /// accepts them as-is; do not add URL escaping here.
    #[test]
    fn special_characters_pass_through_verbatim() {
        let url = build_query("c++ & sons", 10);
        assert!(url.contains("intitle:c+++&+sons&maxResults=10"), "{url}");
    }

    #[test]
    fn clamp_snaps_to_grid() {
        assert_eq!(clamp_max_results(0), 5);
        assert_eq!(clamp_max_results(4), 5);
        assert_eq!(clamp_max_results(7), 5);
        assert_eq!(clamp_max_results(10), 10);
        assert_eq!(clamp_max_results(23), 20);
        assert_eq!(clamp_max_results(40), 40);
        assert_eq!(clamp_max_results(100), 40);
    }
}
