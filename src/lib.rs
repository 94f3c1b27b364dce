//! Library entry for bookdex exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod connectivity;
pub mod events;
pub mod logic;
pub mod paths;
pub mod query;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
