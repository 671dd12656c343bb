// ABOUTME: Construction-time configuration for the reader: tenant, store, refresh interval
// ABOUTME: Handles environment variables and validation before any store connection opens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

//! Environment-based configuration for reader construction

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything the reader needs to know at construction time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Application (tenant) name all lookups are scoped to
    pub application_name: String,
    /// Store connection descriptor
    pub database_url: String,
    /// Live-cache TTL; does not drive any background refresh
    pub refresh_interval: Duration,
}

impl ReaderConfig {
    /// Create a configuration from explicit values
    pub fn new(
        application_name: impl Into<String>,
        database_url: impl Into<String>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            database_url: database_url.into(),
            refresh_interval,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `DYNCFG_APPLICATION_NAME` (required), `DYNCFG_DATABASE_URL`, and
    /// `DYNCFG_REFRESH_INTERVAL_MS`.
    ///
    /// # Errors
    ///
    /// Returns an error if the application name is missing or blank
    pub fn from_env() -> AppResult<Self> {
        let application_name = env_config::application_name()
            .ok_or_else(|| AppError::config("DYNCFG_APPLICATION_NAME is not set"))?;

        let config = Self {
            application_name,
            database_url: env_config::database_url(),
            refresh_interval: Duration::from_millis(env_config::refresh_interval_ms()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the application name or database URL is blank
    pub fn validate(&self) -> AppResult<()> {
        if self.application_name.trim().is_empty() {
            return Err(AppError::invalid_input("application name must not be blank"));
        }
        if self.database_url.trim().is_empty() {
            return Err(AppError::invalid_input("database URL must not be blank"));
        }
        Ok(())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            application_name: String::new(),
            database_url: defaults::DATABASE_URL.to_owned(),
            refresh_interval: Duration::from_millis(defaults::REFRESH_INTERVAL_MS),
        }
    }
}
