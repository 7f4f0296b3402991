//! Shared test helpers for client tests.

#![allow(dead_code)]

use configid_client::{ClientConfig, HttpProvisioningClient};
use wiremock::MockServer;

/// Installs a fmt subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Config pointing at the mock server with short timeouts.
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..Default::default()
    }
}

pub fn mock_client(server: &MockServer) -> HttpProvisioningClient {
    init_tracing();
    HttpProvisioningClient::new(mock_config(server)).unwrap()
}
