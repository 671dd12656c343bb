// ABOUTME: Per-application configuration reader with read-through caching and fallback
// ABOUTME: Guarantees a value on every read: live cache, fresh fetch, snapshot, or default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

//! # Configuration Reader
//!
//! The typed read accessor consuming services hold on to. Reads resolve in
//! order: non-expired live cache entry, then a store fetch through the
//! service layer (refreshing both cache tiers), then the last-known-good
//! snapshot, then the target type's default. The read path never surfaces a
//! failure; store outages are only observable through logging.
//!
//! Writes are a different story: the administrative CRUD surface reachable
//! via [`ConfigurationReader::service`] reports its failures explicitly.

use crate::cache::{CacheKey, ConfigCache};
use crate::coercion::ConfigScalar;
use crate::config::ReaderConfig;
use crate::database::Database;
use crate::errors::AppResult;
use crate::services::ConfigService;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Per-application typed configuration accessor
///
/// One instance is shared per application and process. The cache is owned by
/// the reader; the store handle is opened at construction and closed via
/// [`shutdown`](Self::shutdown).
pub struct ConfigurationReader {
    application_name: String,
    refresh_interval: Duration,
    service: ConfigService,
    cache: ConfigCache,
    db: Database,
}

impl ConfigurationReader {
    /// Open the store described by `config` and build a reader over it
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the store
    /// connection cannot be established
    pub async fn connect(config: ReaderConfig) -> AppResult<Self> {
        config.validate()?;

        let db = Database::new(&config.database_url).await?;
        Ok(Self::new(
            config.application_name,
            db,
            config.refresh_interval,
        ))
    }

    /// Build a reader over an already-open database handle
    #[must_use]
    pub fn new(application_name: impl Into<String>, db: Database, refresh_interval: Duration) -> Self {
        let application_name = application_name.into();

        info!(
            application = %application_name,
            refresh_interval_ms = refresh_interval.as_millis() as u64,
            "configuration reader initialized"
        );

        Self {
            application_name,
            refresh_interval,
            service: ConfigService::new(db.clone()),
            cache: ConfigCache::new(),
            db,
        }
    }

    /// Application name this reader is scoped to
    #[must_use]
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Live-cache TTL
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// The administrative CRUD surface over the same store
    #[must_use]
    pub const fn service(&self) -> &ConfigService {
        &self.service
    }

    /// Typed read for `key`, scoped to this reader's application
    ///
    /// Never fails and never blocks on anything beyond a single store fetch:
    /// the result is a live cached value, a freshly fetched one, a stale
    /// snapshot, or the target type's default. A value that legitimately
    /// resolved to the default is cached and served like any other.
    pub async fn get_value<T>(&self, key: &str) -> T
    where
        T: ConfigScalar + Serialize + DeserializeOwned + Send,
    {
        let live_key = CacheKey::live(&self.application_name, key);

        match self.cache.get::<T>(&live_key) {
            Ok(Some(value)) => return value,
            Ok(None) => {}
            Err(e) => {
                debug!(key, error = %e, "live cache entry unreadable; treating as miss");
                self.cache.remove(&live_key);
            }
        }

        let snapshot_key = CacheKey::snapshot(&self.application_name, key);

        match self
            .service
            .get_value::<T>(key, &self.application_name)
            .await
        {
            Ok(value) => {
                if let Err(e) = self
                    .cache
                    .set(&live_key, &value, Some(self.refresh_interval))
                {
                    debug!(key, error = %e, "failed to write live cache entry");
                }
                if let Err(e) = self.cache.set(&snapshot_key, &value, None) {
                    debug!(key, error = %e, "failed to write snapshot cache entry");
                }
                value
            }
            Err(e) => {
                warn!(
                    key,
                    application = %self.application_name,
                    error = %e,
                    "configuration fetch failed; falling back to snapshot"
                );

                match self.cache.get::<T>(&snapshot_key) {
                    Ok(Some(snapshot)) => snapshot,
                    Ok(None) => T::default(),
                    Err(e) => {
                        debug!(key, error = %e, "snapshot entry unreadable; returning default");
                        T::default()
                    }
                }
            }
        }
    }

    /// Close the underlying store connection
    pub async fn shutdown(&self) {
        self.db.close().await;
    }
}
