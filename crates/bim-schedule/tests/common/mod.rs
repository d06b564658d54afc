//! Shared helpers for integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `tracing` output through the test harness
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}
