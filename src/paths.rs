//! XDG-style directory helpers for config, state, and log files.

use std::env;
use std::path::PathBuf;

/// Create `dir` (and parents) if missing, then return it unchanged.
fn ensure(dir: PathBuf) -> PathBuf {
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Configuration directory: `$XDG_CONFIG_HOME/bookdex` or
/// `~/.config/bookdex`, created on demand.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    ensure(base.join("bookdex"))
}

/// State directory for persisted values: `$XDG_STATE_HOME/bookdex` or
/// `~/.local/state/bookdex`, created on demand.
#[must_use]
pub fn state_dir() -> PathBuf {
    let base = env::var("XDG_STATE_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".local").join("state"))
        })
        .unwrap_or_else(|| PathBuf::from("."));
    ensure(base.join("bookdex"))
}

/// Log directory under the configuration directory, created on demand.
#[must_use]
pub fn logs_dir() -> PathBuf {
    ensure(config_dir().join("logs"))
}

#[cfg(test)]
mod tests {
    /// Directory helpers always return a `bookdex`-suffixed path and create it.
    #[test]
    fn dirs_end_with_app_name() {
        assert!(super::config_dir().ends_with("bookdex"));
        assert!(super::state_dir().ends_with("bookdex"));
        assert!(super::logs_dir().ends_with("bookdex/logs"));
    }
}
