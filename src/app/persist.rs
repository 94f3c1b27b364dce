//! Persistence of the result count across runs.
//!
//! The only value that survives a restart is the integer result count, kept
//! as a tiny JSON object under a fixed key in the XDG state directory.

use std::fs;
use std::path::Path;

use crate::query::clamp_max_results;
use crate::state::AppState;

/// What: Load the persisted result count, snapped onto the stepper grid.
///
/// Inputs:
/// - `path`: JSON state file written by [`maybe_flush_count`]
///
/// Output:
/// - `Some(count)` when the file exists and holds a usable integer under
///   `"max_results"`; `None` otherwise (first run, unreadable, malformed).
#[must_use]
pub fn load_max_results(path: &Path) -> Option<u32> {
    let body = fs::read_to_string(path).ok()?;
    let v: serde_json::Value = serde_json::from_str(&body).ok()?;
    let n = v.get("max_results")?.as_u64()?;
    Some(clamp_max_results(u32::try_from(n).ok()?))
}

/// What: Persist the result count to disk if marked dirty.
///
/// Inputs:
/// - `app`: Application state whose `max_results` and `count_path` are used
///
/// Output:
/// - Writes the count JSON to `count_path` and clears the dirty flag.
pub fn maybe_flush_count(app: &mut AppState) {
    if !app.count_dirty {
        return;
    }
    let body = serde_json::json!({ "max_results": app.max_results }).to_string();
    match fs::write(&app.count_path, &body) {
        Ok(()) => {
            tracing::trace!(path = %app.count_path.display(), "result count persisted");
        }
        Err(e) => {
            tracing::warn!(
                path = %app.count_path.display(),
                error = %e,
                "failed to write result count"
            );
        }
    }
    // Clear the flag regardless to avoid repeated writes on a broken disk.
    app.count_dirty = false;
}

#[cfg(test)]
mod tests {
    use super::{load_max_results, maybe_flush_count};
    use crate::state::AppState;

    #[test]
    fn roundtrips_through_the_state_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("max_results.json");
        let mut app = AppState {
            max_results: 25,
            count_path: path.clone(),
            count_dirty: true,
            ..Default::default()
        };
        maybe_flush_count(&mut app);
        assert!(!app.count_dirty);
        assert_eq!(load_max_results(&path), Some(25));
    }

    #[test]
    fn missing_or_malformed_file_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load_max_results(&dir.path().join("absent.json")), None);
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").expect("write");
        assert_eq!(load_max_results(&bad), None);
    }

    /// Out-of-grid values stored by older builds are snapped on load.
    #[test]
    fn loaded_values_are_clamped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("max_results.json");
        std::fs::write(&path, r#"{"max_results": 97}"#).expect("write");
        assert_eq!(load_max_results(&path), Some(40));
    }
}
