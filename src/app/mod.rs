//! Application runtime wiring: terminal session, persistence, event loop.

mod persist;
mod runtime;
mod terminal;

pub use persist::{load_max_results, maybe_flush_count};
pub use runtime::run;
