//! Shared helpers for the integration suite.

use callspec::{ApiClient, ClientConfig};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn client(base_url: &str) -> ApiClient {
    init_tracing();
    ApiClient::new(
        ClientConfig::builder(base_url)
            .build()
            .expect("valid base URL"),
    )
}
