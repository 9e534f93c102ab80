//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use playshare::{RequestContext, ShareContext};
use playshare_core::config::AppConfig;
use playshare_core::traits::ManualClock;

/// Secret used by every test application.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// Wired share services
    pub ctx: ShareContext,
    /// Clock driving issuance and expiry
    pub clock: Arc<ManualClock>,
    /// Configuration the services were built from
    pub config: AppConfig,
    /// Keeps the data directory alive for the test's duration
    pub data_dir: TempDir,
}

impl TestApp {
    /// Create a test application backed by a JSON file store
    pub async fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Self::config_for(&data_dir, "file", TEST_SECRET);
        Self::build(config, data_dir, Arc::new(ManualClock::starting_now())).await
    }

    /// Create a test application backed by the in-memory store
    pub async fn in_memory() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Self::config_for(&data_dir, "memory", TEST_SECRET);
        Self::build(config, data_dir, Arc::new(ManualClock::starting_now())).await
    }

    /// Rebuild the services from the same data directory, as after a restart
    pub async fn restart(self, secret: &str) -> Self {
        let config = Self::config_for(&self.data_dir, &self.config.store.backend, secret);
        Self::build(config, self.data_dir, self.clock).await
    }

    /// Path of the share document
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.config.store.path)
    }

    /// Caller context for an authenticated user
    pub fn user(&self, name: &str) -> RequestContext {
        RequestContext::new(name)
    }

    fn config_for(data_dir: &TempDir, backend: &str, secret: &str) -> AppConfig {
        let path = data_dir.path().join("db").join("shares.json");
        let toml = format!(
            "[auth]\nshare_secret = \"{secret}\"\n\n[store]\nbackend = \"{backend}\"\npath = \"{}\"\n",
            path.display()
        );
        AppConfig::from_toml_str(&toml).expect("Failed to parse test config")
    }

    async fn build(config: AppConfig, data_dir: TempDir, clock: Arc<ManualClock>) -> Self {
        let ctx = ShareContext::with_clock(&config, clock.clone())
            .await
            .expect("Failed to wire share services");
        Self {
            ctx,
            clock,
            config,
            data_dir,
        }
    }
}
