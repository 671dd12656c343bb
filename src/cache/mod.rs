// ABOUTME: Two-tier in-process cache for configuration values
// ABOUTME: Live entries expire after the refresh interval; snapshot entries never expire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

//! # Configuration Cache
//!
//! Process-local cache backing the reader. Each `(application, key)` pair has
//! two parallel entries: a *live* entry whose TTL equals the configured
//! refresh interval, and a *snapshot* entry with no expiry that is
//! overwritten on every successful store fetch. The snapshot is the only
//! state consulted when the store is unreachable.
//!
//! Entries live in a sharded concurrent map; expiry is checked on access
//! rather than by a background sweep. There is no single-flight
//! deduplication: concurrent misses for the same key may each query the
//! store, and the entry reflects whichever fetch completed last.

use crate::constants::cache::{LIVE_NAMESPACE, SNAPSHOT_NAMESPACE};
use crate::errors::AppResult;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cache tier a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheNamespace {
    /// TTL-bounded entry, source of truth for fast reads until expiry
    Live,
    /// Unbounded-lifetime entry used exclusively as a fallback
    Snapshot,
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(f, "{LIVE_NAMESPACE}"),
            Self::Snapshot => write!(f, "{SNAPSHOT_NAMESPACE}"),
        }
    }
}

/// Structured cache key with tenant isolation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Cache tier
    pub namespace: CacheNamespace,
    /// Application (tenant) name
    pub application: String,
    /// Configuration key
    pub key: String,
}

impl CacheKey {
    /// Create a new cache key
    pub fn new(
        namespace: CacheNamespace,
        application: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            namespace,
            application: application.into(),
            key: key.into(),
        }
    }

    /// Key for the live tier
    pub fn live(application: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(CacheNamespace::Live, application, key)
    }

    /// Key for the snapshot tier
    pub fn snapshot(application: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(CacheNamespace::Snapshot, application, key)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.application, self.key)
    }
}

/// Cache entry with optional expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Option<Duration>) -> Self {
        Self {
            data,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    fn remaining_ttl(&self) -> Option<Duration> {
        self.expires_at
            .and_then(|at| at.checked_duration_since(Instant::now()))
    }
}

/// Sharded in-process cache for configuration values
///
/// The `Arc` gives every clone a view of the same entries, so the reader and
/// any helper handles share one cache. Values are stored serialized, which
/// keeps the map homogeneous across target types.
#[derive(Clone, Default)]
pub struct ConfigCache {
    entries: Arc<DashMap<String, CacheEntry>>,
}

impl ConfigCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, with a TTL for live entries or none for snapshots
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn set<T: Serialize>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Option<Duration>,
    ) -> AppResult<()> {
        let serialized = serde_json::to_vec(value)?;
        self.entries
            .insert(key.to_string(), CacheEntry::new(serialized, ttl));
        Ok(())
    }

    /// Retrieve a value, dropping it when expired
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> AppResult<Option<T>> {
        let rendered = key.to_string();

        let data = match self.entries.get(&rendered) {
            Some(entry) if entry.is_expired() => {
                drop(entry);
                self.entries.remove(&rendered);
                return Ok(None);
            }
            Some(entry) => entry.data.clone(),
            None => return Ok(None),
        };

        let value = serde_json::from_slice(&data)?;
        Ok(Some(value))
    }

    /// Remove a single entry
    pub fn remove(&self, key: &CacheKey) {
        self.entries.remove(&key.to_string());
    }

    /// Get remaining TTL for a key; `None` for absent, expired, or
    /// unbounded entries
    #[must_use]
    pub fn ttl(&self, key: &CacheKey) -> Option<Duration> {
        self.entries
            .get(&key.to_string())
            .and_then(|entry| entry.remaining_ttl())
    }

    /// Number of entries currently held, expired or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.entries.clear();
    }
}
