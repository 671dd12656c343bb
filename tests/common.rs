// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides file-backed SQLite databases and seeding helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 Async Config Contributors
#![allow(dead_code)]

//! Shared test utilities for `dyncfg`
//!
//! Databases are file-backed (under a temp directory) so that failure
//! simulation via `DROP TABLE` reliably affects every pooled connection.

use anyhow::Result;
use dyncfg::database::Database;
use dyncfg::models::{ConfigDraft, ConfigEntry};
use dyncfg::services::ConfigService;
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// An open test database plus the temp directory keeping its file alive
pub struct TestDb {
    pub db: Database,
    _dir: TempDir,
}

/// Standard test database setup
pub async fn create_test_database() -> Result<TestDb> {
    init_test_logging();

    let dir = tempfile::tempdir()?;
    let database_url = format!("sqlite:{}/test.db", dir.path().display());
    let db = Database::new(&database_url).await?;

    Ok(TestDb { db, _dir: dir })
}

/// Seed one active config row through the service layer
pub async fn seed_config(
    service: &ConfigService,
    application: &str,
    name: &str,
    value_type: &str,
    value: &str,
) -> Result<ConfigEntry> {
    let entry = service
        .add(&ConfigDraft::new(name, value_type, value), application)
        .await?;
    Ok(entry)
}

/// Simulate a store outage: every subsequent config query fails
pub async fn break_store(db: &Database) -> Result<()> {
    sqlx::query("DROP TABLE configs").execute(db.pool()).await?;
    Ok(())
}
