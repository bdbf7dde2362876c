use std::sync::Once;

// Ensures the subscriber is installed only once across test threads
static TRACING_INIT: Once = Once::new();

/// Initialize a tracing subscriber for the whole test binary.
///
/// Honors `RUST_LOG`; with no filter set the subscriber stays silent so test
/// output remains clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
