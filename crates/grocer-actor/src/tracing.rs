//! Tracing bootstrap shared by the binary and the integration tests.

/// Initializes the global tracing subscriber.
///
/// Filtering follows the `RUST_LOG` environment variable:
///
/// - `RUST_LOG=info` - lifecycle events and successful operations
/// - `RUST_LOG=debug` - full request payloads
/// - `RUST_LOG=grocer_app=debug` - debug for one crate only
///
/// Call once, before the first actor is spawned.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
