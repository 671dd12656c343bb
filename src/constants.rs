// ABOUTME: Constants module with application defaults and environment helpers
// ABOUTME: Groups construction-time defaults used across config, cache, and store layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

//! Constants module
//!
//! Application constants grouped by domain: construction-time defaults and
//! environment-based configuration helpers.

use std::env;

/// Construction-time defaults
pub mod defaults {
    /// Default live-cache refresh interval in milliseconds
    pub const REFRESH_INTERVAL_MS: u64 = 30_000;

    /// Default database URL when none is configured
    pub const DATABASE_URL: &str = "sqlite:dyncfg.db";
}

/// Cache key namespaces
pub mod cache {
    /// Namespace for TTL-bounded live entries
    pub const LIVE_NAMESPACE: &str = "cfg";

    /// Namespace for unbounded last-known-good snapshot entries
    pub const SNAPSHOT_NAMESPACE: &str = "snapshot";
}

/// Environment-based configuration
pub mod env_config {
    use super::{defaults, env};

    /// Get the application (tenant) name from the environment
    #[must_use]
    pub fn application_name() -> Option<String> {
        env::var("DYNCFG_APPLICATION_NAME").ok()
    }

    /// Get the database URL from the environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DYNCFG_DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.to_owned())
    }

    /// Get the refresh interval in milliseconds from the environment or default
    #[must_use]
    pub fn refresh_interval_ms() -> u64 {
        env::var("DYNCFG_REFRESH_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::REFRESH_INTERVAL_MS)
    }
}
