//! Headless smoke test for the application runtime.
//!
//! With `BOOKDEX_TEST_HEADLESS=1` the runtime skips terminal setup and
//! drawing, so `run` can be spawned, left to initialize its workers, and
//! then cancelled cleanly.

use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_starts_and_cancels_cleanly_headless() {
    unsafe {
        std::env::set_var("BOOKDEX_TEST_HEADLESS", "1");
    }

    let handle = tokio::spawn(async { bookdex::app::run().await });

    // Give startup (state restore, worker spawns, first loop turn) a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;

    if handle.is_finished() {
        let res = handle.await.expect("runtime task join");
        assert!(res.is_ok(), "headless runtime exited with error: {res:?}");
    } else {
        handle.abort();
        let join_err = handle.await.expect_err("aborted task yields a join error");
        assert!(join_err.is_cancelled());
    }
}
