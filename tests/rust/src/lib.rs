//! Shared test utilities and fixtures for kernelspecs integration tests.

pub use kernelspecs_core::{
    FetchError, KernelSpec, KernelSpecs, ServerSettings, ValidationError,
};


pub use server::MockKernelServer;

/// Install a test subscriber so `warn!` output from dropped entries shows
/// up with `--nocapture`. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kernelspecs_core=debug")),
        )
        .with_test_writer()
        .try_init();
}
